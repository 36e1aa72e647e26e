//! Net weight calculation under the two market deduction conventions

use fishledger_types::DeductionMethod;
use rust_decimal::Decimal;

use super::rounding::{retained_fraction, round_weight};

/// Method A: deduct the percentage from the whole gross weight.
///
/// # Formula
/// net = round3(gross x (1 - deduction/100))
pub fn net_weight_total_deduction(gross_weight_kg: Decimal, deduction_percent: Decimal) -> Decimal {
    round_weight(gross_weight_kg * retained_fraction(deduction_percent))
}

/// Method B: deduct the percentage from whole kilograms only.
///
/// The gram remainder passes through untouched.
///
/// # Formula
/// net = round3(floor(gross) x (1 - deduction/100) + (gross - floor(gross)))
pub fn net_weight_kilogram_deduction(gross_weight_kg: Decimal, deduction_percent: Decimal) -> Decimal {
    let (kilograms, grams) = split_kilograms(gross_weight_kg);
    round_weight(kilograms * retained_fraction(deduction_percent) + grams)
}

/// Split a weight into its whole-kilogram part and the fractional remainder
pub fn split_kilograms(weight_kg: Decimal) -> (Decimal, Decimal) {
    let kilograms = weight_kg.floor();
    (kilograms, weight_kg - kilograms)
}

/// Net weight after deduction, rounded to 3 decimal places
pub fn calculate_net_weight(
    gross_weight_kg: Decimal,
    method: DeductionMethod,
    deduction_percent: Decimal,
) -> Decimal {
    match method {
        DeductionMethod::A => net_weight_total_deduction(gross_weight_kg, deduction_percent),
        DeductionMethod::B => net_weight_kilogram_deduction(gross_weight_kg, deduction_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==========================================
    // Method A - total weight deduction
    // ==========================================

    #[test]
    fn test_method_a_reference_lot() {
        // 15.700 x 0.95 = 14.915
        assert_eq!(net_weight_total_deduction(dec!(15.700), dec!(5)), dec!(14.915));
    }

    #[test]
    fn test_method_a_half_kilo() {
        // 13.500 x 0.95 = 12.825
        assert_eq!(net_weight_total_deduction(dec!(13.500), dec!(5)), dec!(12.825));
    }

    #[test]
    fn test_method_a_rounds_once_at_the_end() {
        // 1.111 x 0.97 = 1.07767 -> 1.078
        assert_eq!(net_weight_total_deduction(dec!(1.111), dec!(3)), dec!(1.078));
    }

    // ==========================================
    // Method B - kilogram-only deduction
    // ==========================================

    #[test]
    fn test_method_b_reference_lot() {
        // 15 x 0.95 + 0.700 = 14.950
        assert_eq!(net_weight_kilogram_deduction(dec!(15.700), dec!(5)), dec!(14.950));
    }

    #[test]
    fn test_method_b_half_kilo() {
        // 13 x 0.95 + 0.500 = 12.850
        assert_eq!(net_weight_kilogram_deduction(dec!(13.500), dec!(5)), dec!(12.850));
    }

    #[test]
    fn test_method_b_under_one_kilo_is_not_deducted() {
        assert_eq!(net_weight_kilogram_deduction(dec!(0.850), dec!(5)), dec!(0.850));
    }

    #[test]
    fn test_methods_agree_on_whole_kilograms() {
        let a = net_weight_total_deduction(dec!(20.000), dec!(5));
        let b = net_weight_kilogram_deduction(dec!(20.000), dec!(5));
        assert_eq!(a, b);
        assert_eq!(a, dec!(19.000));
    }

    #[test]
    fn test_methods_agree_below_weight_resolution() {
        // 0.001 x 0.95 = 0.00095 -> 0.001, so the deduction rounds away
        let a = net_weight_total_deduction(dec!(0.001), dec!(5));
        let b = net_weight_kilogram_deduction(dec!(0.001), dec!(5));
        assert_eq!(a, dec!(0.001));
        assert_eq!(a, b);
    }

    // ==========================================
    // Edge cases
    // ==========================================

    #[test]
    fn test_zero_deduction_keeps_gross() {
        for method in DeductionMethod::ALL {
            assert_eq!(calculate_net_weight(dec!(15.700), method, dec!(0)), dec!(15.700));
        }
    }

    #[test]
    fn test_full_deduction() {
        assert_eq!(calculate_net_weight(dec!(15.700), DeductionMethod::A, dec!(100)), dec!(0));
        // Only the grams survive under method B
        assert_eq!(calculate_net_weight(dec!(15.700), DeductionMethod::B, dec!(100)), dec!(0.700));
    }

    #[test]
    fn test_zero_weight() {
        for method in DeductionMethod::ALL {
            assert_eq!(calculate_net_weight(dec!(0), method, dec!(5)), dec!(0));
        }
    }

    #[test]
    fn test_negative_weight_propagates() {
        // Not validated here; -2 x 0.95 = -1.9
        assert_eq!(calculate_net_weight(dec!(-2), DeductionMethod::A, dec!(5)), dec!(-1.900));
        // floor(-1.3) = -2, remainder 0.7: -2 x 0.95 + 0.7 = -1.2
        assert_eq!(calculate_net_weight(dec!(-1.3), DeductionMethod::B, dec!(5)), dec!(-1.200));
    }

    #[test]
    fn test_split_kilograms() {
        assert_eq!(split_kilograms(dec!(15.700)), (dec!(15), dec!(0.700)));
        assert_eq!(split_kilograms(dec!(3)), (dec!(3), dec!(0)));
    }

    #[test]
    fn test_net_weight_has_three_places() {
        let net = calculate_net_weight(dec!(20), DeductionMethod::A, dec!(5));
        assert_eq!(net.to_string(), "19.000");
    }
}
