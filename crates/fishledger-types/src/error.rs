//! Error types for fishledger

use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Input rejected at the boundary before it reaches the calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Gross weight must be greater than zero (got {0} kg)")]
    NonPositiveWeight(Decimal),

    #[error("Rate per kg must be greater than zero (got {0})")]
    NonPositiveRate(Decimal),

    #[error("Gross weight must not exceed {max} kg (got {value} kg)")]
    WeightTooLarge { value: Decimal, max: Decimal },

    #[error("Rate per kg must not exceed {max} (got {value})")]
    RateTooLarge { value: Decimal, max: Decimal },

    #[error("{field} must be between 0 and 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: Decimal },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid deduction method '{0}' (expected A or B)")]
    InvalidDeductionMethod(String),

    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl Error {
    /// Attach a 1-based data row number to an error raised while loading a file
    pub fn at_row(self, row: usize) -> Self {
        Error::Row {
            row,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
