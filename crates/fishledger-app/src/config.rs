//! Configuration management for fishledger
//!
//! Config stored at: ~/.config/fishledger/config.toml

use std::path::{Path, PathBuf};

use fishledger_domain::model::calculation::{DEFAULT_COMMISSION_PERCENT, DEFAULT_DEDUCTION_PERCENT};
use fishledger_domain::service::validation::check_percent;
use fishledger_domain::CalculationDefaults;
use fishledger_types::{ConfigError, DeductionMethod, OutputFormat, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Deduction method used when a slip or command does not name one
    #[serde(default = "default_method")]
    pub default_method: DeductionMethod,

    /// Ice/water deduction in percent
    #[serde(default = "default_deduction_percent")]
    pub deduction_percent: Decimal,

    /// Broker commission in percent
    #[serde(default = "default_commission_percent")]
    pub commission_percent: Decimal,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_method() -> DeductionMethod {
    DeductionMethod::A
}

fn default_deduction_percent() -> Decimal {
    DEFAULT_DEDUCTION_PERCENT
}

fn default_commission_percent() -> Decimal {
    DEFAULT_COMMISSION_PERCENT
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_method: default_method(),
            deduction_percent: default_deduction_percent(),
            commission_percent: default_commission_percent(),
            currency_symbol: default_currency_symbol(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fishledger");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or fall back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Reject percentages outside 0..=100
    pub fn validate(&self) -> Result<()> {
        check_percent("deduction percent", self.deduction_percent)?;
        check_percent("commission percent", self.commission_percent)?;
        Ok(())
    }

    /// Percentages handed to the calculator for inputs that omit them
    pub fn defaults(&self) -> CalculationDefaults {
        CalculationDefaults {
            deduction_percent: self.deduction_percent,
            commission_percent: self.commission_percent,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fishledger Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Default method:   {} ({})",
            self.default_method,
            self.default_method.label()
        )?;
        writeln!(f, "Deduction:        {}%", self.deduction_percent)?;
        writeln!(f, "Commission:       {}%", self.commission_percent)?;
        writeln!(f, "Currency symbol:  {}", self.currency_symbol)?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        Ok(())
    }
}
