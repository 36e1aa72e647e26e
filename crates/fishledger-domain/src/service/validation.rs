//! Boundary checks for calculation input
//!
//! The calculator trusts its input. Loaders and the CLI call
//! [`validate_input`] before handing values over.

use fishledger_types::ValidationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::CalculationInput;

/// Largest accepted gross weight (1,000 tonnes)
pub const MAX_GROSS_WEIGHT_KG: Decimal = dec!(1000000);

/// Largest accepted rate per kg
///
/// `MAX_GROSS_WEIGHT_KG * MAX_RATE_PER_KG * 2` stays far inside `Decimal`'s
/// range, so validated input cannot overflow the money steps.
pub const MAX_RATE_PER_KG: Decimal = dec!(1000000000);

pub fn validate_input(input: &CalculationInput) -> Result<(), ValidationError> {
    if input.gross_weight_kg <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveWeight(input.gross_weight_kg));
    }
    if input.gross_weight_kg > MAX_GROSS_WEIGHT_KG {
        return Err(ValidationError::WeightTooLarge {
            value: input.gross_weight_kg,
            max: MAX_GROSS_WEIGHT_KG,
        });
    }
    if input.rate_per_kg <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveRate(input.rate_per_kg));
    }
    if input.rate_per_kg > MAX_RATE_PER_KG {
        return Err(ValidationError::RateTooLarge {
            value: input.rate_per_kg,
            max: MAX_RATE_PER_KG,
        });
    }
    if let Some(percent) = input.deduction_percent {
        check_percent("deduction percent", percent)?;
    }
    if let Some(percent) = input.commission_percent {
        check_percent("commission percent", percent)?;
    }
    Ok(())
}

pub fn check_percent(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ValidationError::PercentOutOfRange { field, value });
    }
    Ok(())
}
