//! Fixed-point rounding shared by the weight and money calculations

use rust_decimal::{Decimal, RoundingStrategy};

/// Weights are kept to the gram
pub const WEIGHT_DECIMAL_PLACES: u32 = 3;

/// Amounts are kept to the cent
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round half away from zero and pad to exactly `dp` decimal places.
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

pub fn round_weight(value: Decimal) -> Decimal {
    round_to(value, WEIGHT_DECIMAL_PLACES)
}

pub fn round_money(value: Decimal) -> Decimal {
    round_to(value, MONEY_DECIMAL_PLACES)
}

/// `1 - percent/100`, the share kept after a percentage deduction
pub fn retained_fraction(percent: Decimal) -> Decimal {
    Decimal::ONE - percent / Decimal::ONE_HUNDRED
}

/// `1 + percent/100`, the multiplier after a percentage surcharge
pub fn surcharge_multiplier(percent: Decimal) -> Decimal {
    Decimal::ONE + percent / Decimal::ONE_HUNDRED
}
