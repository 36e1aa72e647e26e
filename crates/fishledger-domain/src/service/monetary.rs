//! Money calculations: base amount, commission and final payable amount

use rust_decimal::Decimal;

use super::rounding::{round_money, surcharge_multiplier};

/// net weight x rate, rounded to the cent
pub fn calculate_base_amount(net_weight_kg: Decimal, rate_per_kg: Decimal) -> Decimal {
    round_money(net_weight_kg * rate_per_kg)
}

/// base x commission/100, rounded to the cent
pub fn calculate_commission(base_amount: Decimal, commission_percent: Decimal) -> Decimal {
    round_money(base_amount * commission_percent / Decimal::ONE_HUNDRED)
}

/// base x (1 + commission/100), rounded to the cent.
///
/// Derived from the multiplier rather than by adding [`calculate_commission`]
/// to the base; the two paths round independently.
pub fn calculate_final_amount(base_amount: Decimal, commission_percent: Decimal) -> Decimal {
    round_money(base_amount * surcharge_multiplier(commission_percent))
}
