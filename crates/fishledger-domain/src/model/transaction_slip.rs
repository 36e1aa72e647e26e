use serde::{Deserialize, Serialize};

use super::{CalculationInput, CalculationResult};

/// A sale recorded at the auction floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSlip {
    pub slip_number: String,
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
    /// Buyer or seller the slip is settled with
    #[serde(default)]
    pub party: Option<String>,
    pub input: CalculationInput,
}

/// A slip together with its calculated amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettledTransaction {
    pub slip: TransactionSlip,
    pub result: CalculationResult,
}
