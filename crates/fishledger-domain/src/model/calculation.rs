//! Calculation input and result records

use fishledger_types::DeductionMethod;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Percentage deducted from weight for ice, water and packaging when none is given
pub const DEFAULT_DEDUCTION_PERCENT: Decimal = dec!(5.00);

/// Broker commission percentage added on the base amount when none is given
pub const DEFAULT_COMMISSION_PERCENT: Decimal = dec!(2.00);

/// Percentages applied when a [`CalculationInput`] leaves them unset.
///
/// Passed explicitly to the calculator; there is no process-wide setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationDefaults {
    pub deduction_percent: Decimal,
    pub commission_percent: Decimal,
}

impl Default for CalculationDefaults {
    fn default() -> Self {
        Self {
            deduction_percent: DEFAULT_DEDUCTION_PERCENT,
            commission_percent: DEFAULT_COMMISSION_PERCENT,
        }
    }
}

/// One weighed lot to be priced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Gross weight in kg, conventionally entered as kg.grams
    pub gross_weight_kg: Decimal,
    /// Currency units per kg
    pub rate_per_kg: Decimal,
    pub deduction_method: DeductionMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduction_percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_percent: Option<Decimal>,
}

impl CalculationInput {
    pub fn new(gross_weight_kg: Decimal, rate_per_kg: Decimal, deduction_method: DeductionMethod) -> Self {
        Self {
            gross_weight_kg,
            rate_per_kg,
            deduction_method,
            deduction_percent: None,
            commission_percent: None,
        }
    }

    pub fn with_deduction_percent(mut self, percent: Decimal) -> Self {
        self.deduction_percent = Some(percent);
        self
    }

    pub fn with_commission_percent(mut self, percent: Decimal) -> Self {
        self.commission_percent = Some(percent);
        self
    }

    pub fn with_method(mut self, method: DeductionMethod) -> Self {
        self.deduction_method = method;
        self
    }
}

/// Fully derived outcome of pricing one lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub gross_weight_kg: Decimal,
    /// 3 decimal places
    pub net_weight_kg: Decimal,
    pub rate_per_kg: Decimal,
    pub deduction_method: DeductionMethod,
    /// Effective deduction percentage after defaulting
    pub deduction_percent: Decimal,
    /// 2 decimal places
    pub base_amount: Decimal,
    /// Effective commission percentage after defaulting
    pub commission_percent: Decimal,
    /// 2 decimal places
    pub commission_amount: Decimal,
    /// 2 decimal places, computed from the commission multiplier
    pub final_amount: Decimal,
}

impl CalculationResult {
    /// Weight removed by the deduction
    pub fn deducted_weight_kg(&self) -> Decimal {
        self.gross_weight_kg - self.net_weight_kg
    }

    /// Difference between `final_amount` and `base_amount + commission_amount`
    pub fn rounding_gap(&self) -> Decimal {
        self.final_amount - (self.base_amount + self.commission_amount)
    }
}
