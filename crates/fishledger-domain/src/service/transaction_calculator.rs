//! Transaction calculator: composes the weight and money steps into one result

use fishledger_types::DeductionMethod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::monetary::{calculate_base_amount, calculate_commission, calculate_final_amount};
use super::weight_normalizer::calculate_net_weight;
use crate::model::{CalculationDefaults, CalculationInput, CalculationResult};

/// Price one lot using the standard 5.00% deduction and 2.00% commission defaults
pub fn calculate_transaction(input: &CalculationInput) -> CalculationResult {
    calculate_transaction_with(input, &CalculationDefaults::default())
}

/// Price one lot, filling unset percentages from `defaults`.
///
/// # Pipeline
/// 1. net weight   = deduction method applied to gross weight
/// 2. base amount  = net weight x rate
/// 3. commission   = base amount x commission%
/// 4. final amount = base amount x (1 + commission%)
///
/// Inputs are trusted as given; negative values propagate into the result.
pub fn calculate_transaction_with(
    input: &CalculationInput,
    defaults: &CalculationDefaults,
) -> CalculationResult {
    let deduction_percent = input.deduction_percent.unwrap_or(defaults.deduction_percent);
    let commission_percent = input.commission_percent.unwrap_or(defaults.commission_percent);

    let net_weight_kg = calculate_net_weight(input.gross_weight_kg, input.deduction_method, deduction_percent);
    let base_amount = calculate_base_amount(net_weight_kg, input.rate_per_kg);
    let commission_amount = calculate_commission(base_amount, commission_percent);
    let final_amount = calculate_final_amount(base_amount, commission_percent);

    CalculationResult {
        gross_weight_kg: input.gross_weight_kg,
        net_weight_kg,
        rate_per_kg: input.rate_per_kg,
        deduction_method: input.deduction_method,
        deduction_percent,
        base_amount,
        commission_percent,
        commission_amount,
        final_amount,
    }
}

/// The same lot priced under both deduction methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodComparison {
    pub method_a: CalculationResult,
    pub method_b: CalculationResult,
    /// Method B net weight minus method A net weight
    pub net_weight_delta_kg: Decimal,
    /// Method B final amount minus method A final amount
    pub final_amount_delta: Decimal,
}

impl MethodComparison {
    /// The method that pays the seller more, if they differ
    pub fn higher_paying(&self) -> Option<DeductionMethod> {
        match self.final_amount_delta.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Some(DeductionMethod::B),
            std::cmp::Ordering::Less => Some(DeductionMethod::A),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Price `input` under method A and method B, ignoring its own method
pub fn compare_methods(input: &CalculationInput, defaults: &CalculationDefaults) -> MethodComparison {
    let method_a = calculate_transaction_with(&input.clone().with_method(DeductionMethod::A), defaults);
    let method_b = calculate_transaction_with(&input.clone().with_method(DeductionMethod::B), defaults);
    MethodComparison {
        net_weight_delta_kg: method_b.net_weight_kg - method_a.net_weight_kg,
        final_amount_delta: method_b.final_amount - method_a.final_amount,
        method_a,
        method_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_lot(method: DeductionMethod) -> CalculationInput {
        CalculationInput::new(dec!(15.700), dec!(120), method).with_commission_percent(dec!(2.00))
    }

    #[test]
    fn test_method_a_pipeline() {
        let result = calculate_transaction(&reference_lot(DeductionMethod::A));
        assert_eq!(result.net_weight_kg, dec!(14.915));
        assert_eq!(result.base_amount, dec!(1789.80));
        assert_eq!(result.commission_amount, dec!(35.80));
        assert_eq!(result.final_amount, dec!(1825.60));
    }

    #[test]
    fn test_method_b_pipeline() {
        let result = calculate_transaction(&reference_lot(DeductionMethod::B));
        assert_eq!(result.net_weight_kg, dec!(14.950));
        assert_eq!(result.base_amount, dec!(1794.00));
        assert_eq!(result.commission_amount, dec!(35.88));
        assert_eq!(result.final_amount, dec!(1829.88));
    }

    #[test]
    fn test_inputs_are_echoed() {
        let input = reference_lot(DeductionMethod::B);
        let result = calculate_transaction(&input);
        assert_eq!(result.gross_weight_kg, input.gross_weight_kg);
        assert_eq!(result.rate_per_kg, input.rate_per_kg);
        assert_eq!(result.deduction_method, DeductionMethod::B);
        assert_eq!(result.commission_percent, dec!(2));
        assert_eq!(result.deduction_percent, dec!(5));
    }

    #[test]
    fn test_omitted_percentages_use_defaults() {
        let explicit = CalculationInput::new(dec!(15.700), dec!(120), DeductionMethod::A)
            .with_deduction_percent(dec!(5.00))
            .with_commission_percent(dec!(2.00));
        let omitted = CalculationInput::new(dec!(15.700), dec!(120), DeductionMethod::A);
        assert_eq!(calculate_transaction(&explicit), calculate_transaction(&omitted));
    }

    #[test]
    fn test_caller_supplied_defaults() {
        let defaults = CalculationDefaults {
            deduction_percent: dec!(0),
            commission_percent: dec!(10),
        };
        let input = CalculationInput::new(dec!(10), dec!(100), DeductionMethod::A);
        let result = calculate_transaction_with(&input, &defaults);
        assert_eq!(result.net_weight_kg, dec!(10.000));
        assert_eq!(result.base_amount, dec!(1000.00));
        assert_eq!(result.commission_amount, dec!(100.00));
        assert_eq!(result.final_amount, dec!(1100.00));
    }

    #[test]
    fn test_explicit_percentages_override_defaults() {
        let defaults = CalculationDefaults {
            deduction_percent: dec!(50),
            commission_percent: dec!(50),
        };
        let input = reference_lot(DeductionMethod::A).with_deduction_percent(dec!(5));
        let result = calculate_transaction_with(&input, &defaults);
        assert_eq!(result.final_amount, dec!(1825.60));
    }

    #[test]
    fn test_compare_methods_delta() {
        let comparison = compare_methods(&reference_lot(DeductionMethod::A), &CalculationDefaults::default());
        assert_eq!(comparison.method_a.deduction_method, DeductionMethod::A);
        assert_eq!(comparison.method_b.deduction_method, DeductionMethod::B);
        assert_eq!(comparison.net_weight_delta_kg, dec!(0.035));
        assert_eq!(comparison.final_amount_delta, dec!(4.28));
        assert_eq!(comparison.higher_paying(), Some(DeductionMethod::B));
    }

    #[test]
    fn test_compare_methods_whole_kilograms_tie() {
        let input = CalculationInput::new(dec!(20), dec!(95), DeductionMethod::B);
        let comparison = compare_methods(&input, &CalculationDefaults::default());
        assert_eq!(comparison.final_amount_delta, dec!(0));
        assert_eq!(comparison.higher_paying(), None);
    }

    #[test]
    fn test_negative_rate_propagates() {
        let input = CalculationInput::new(dec!(10), dec!(-10), DeductionMethod::A);
        let result = calculate_transaction(&input);
        assert_eq!(result.base_amount, dec!(-95.00));
        assert_eq!(result.final_amount, dec!(-96.90));
    }
}
