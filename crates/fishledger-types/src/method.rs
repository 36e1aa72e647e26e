use serde::{Deserialize, Serialize};

use crate::Error;

/// Weight deduction convention applied before pricing.
///
/// Markets differ in how they discount ice and water from a weighed catch:
/// - `A` deducts the percentage from the whole gross weight.
/// - `B` deducts it from whole kilograms only; the gram remainder is paid in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DeductionMethod {
    /// Total weight deduction
    #[serde(rename = "A")]
    A,
    /// Kilogram-only deduction
    #[serde(rename = "B")]
    B,
}

impl DeductionMethod {
    pub const ALL: [DeductionMethod; 2] = [DeductionMethod::A, DeductionMethod::B];

    pub fn code(&self) -> &'static str {
        match self {
            DeductionMethod::A => "A",
            DeductionMethod::B => "B",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeductionMethod::A => "Total weight deduction",
            DeductionMethod::B => "Kilogram-only deduction",
        }
    }
}

impl std::fmt::Display for DeductionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for DeductionMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(DeductionMethod::A),
            "B" | "b" => Ok(DeductionMethod::B),
            _ => Err(Error::InvalidDeductionMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeductionMethod {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
