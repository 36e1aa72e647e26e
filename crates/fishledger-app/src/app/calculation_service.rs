//! Calculation Service - price a single lot entered by hand
//!
//! Fills the method and percentages from configuration, validates the
//! result at this boundary, then hands it to the pure calculator.

use fishledger_domain::service::{calculate_transaction_with, compare_methods, validate_input, MethodComparison};
use fishledger_domain::{CalculationInput, CalculationResult};
use fishledger_types::{DeductionMethod, Result};
use rust_decimal::Decimal;

use crate::config::Config;

/// A lot as typed in by the user; unset fields come from [`Config`]
#[derive(Debug, Clone, Default)]
pub struct QuoteRequest {
    pub gross_weight_kg: Decimal,
    pub rate_per_kg: Decimal,
    pub method: Option<DeductionMethod>,
    pub deduction_percent: Option<Decimal>,
    pub commission_percent: Option<Decimal>,
}

impl QuoteRequest {
    fn to_input(&self, config: &Config) -> CalculationInput {
        let mut input = CalculationInput::new(
            self.gross_weight_kg,
            self.rate_per_kg,
            self.method.unwrap_or(config.default_method),
        );
        input.deduction_percent = self.deduction_percent;
        input.commission_percent = self.commission_percent;
        input
    }
}

pub fn quote(request: &QuoteRequest, config: &Config) -> Result<CalculationResult> {
    let input = request.to_input(config);
    validate_input(&input)?;
    let result = calculate_transaction_with(&input, &config.defaults());
    tracing::debug!(
        method = %result.deduction_method,
        net = %result.net_weight_kg,
        final_amount = %result.final_amount,
        "quoted lot"
    );
    Ok(result)
}

/// Price the lot under both methods; any method in the request is ignored
pub fn quote_both_methods(request: &QuoteRequest, config: &Config) -> Result<MethodComparison> {
    let input = request.to_input(config);
    validate_input(&input)?;
    Ok(compare_methods(&input, &config.defaults()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fishledger_types::{Error, ValidationError};
    use rust_decimal_macros::dec;

    fn request() -> QuoteRequest {
        QuoteRequest {
            gross_weight_kg: dec!(15.700),
            rate_per_kg: dec!(120),
            ..Default::default()
        }
    }

    #[test]
    fn test_quote_uses_config_method_and_percentages() {
        let config = Config {
            default_method: DeductionMethod::B,
            ..Config::default()
        };
        let result = quote(&request(), &config).unwrap();
        assert_eq!(result.deduction_method, DeductionMethod::B);
        assert_eq!(result.final_amount, dec!(1829.88));
    }

    #[test]
    fn test_request_overrides_config() {
        let config = Config {
            default_method: DeductionMethod::B,
            commission_percent: dec!(10),
            ..Config::default()
        };
        let req = QuoteRequest {
            method: Some(DeductionMethod::A),
            commission_percent: Some(dec!(2)),
            ..request()
        };
        let result = quote(&req, &config).unwrap();
        assert_eq!(result.final_amount, dec!(1825.60));
    }

    #[test]
    fn test_quote_rejects_zero_weight() {
        let req = QuoteRequest {
            gross_weight_kg: dec!(0),
            ..request()
        };
        let err = quote(&req, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::NonPositiveWeight(_))));
    }

    #[test]
    fn test_quote_both_methods() {
        let comparison = quote_both_methods(&request(), &Config::default()).unwrap();
        assert_eq!(comparison.method_a.final_amount, dec!(1825.60));
        assert_eq!(comparison.method_b.final_amount, dec!(1829.88));
        assert_eq!(comparison.final_amount_delta, dec!(4.28));
    }
}
