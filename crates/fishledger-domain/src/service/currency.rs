//! Currency and weight text helpers for input boundaries and display
//!
//! None of these are used by the calculation pipeline itself.

use std::str::FromStr;

use fishledger_types::Error;
use rust_decimal::Decimal;

use super::rounding::{round_money, round_weight};

/// Parse a displayed amount such as `"₹1,825.60"` back into a number.
///
/// A leading currency glyph and thousands separators are stripped. Anything
/// that still does not parse yields zero.
pub fn parse_currency(text: &str) -> Decimal {
    strip_amount(text)
        .and_then(|(negative, number)| signed(&number, negative))
        .unwrap_or(Decimal::ZERO)
}

/// Parse a user-entered amount, accepting the same glyphs and separators as
/// [`parse_currency`] but failing with `InvalidNumber` instead of yielding zero.
pub fn parse_amount(field: &'static str, text: &str) -> Result<Decimal, Error> {
    strip_amount(text)
        .and_then(|(negative, number)| signed(&number, negative))
        .ok_or_else(|| Error::InvalidNumber {
            field,
            value: text.trim().to_string(),
        })
}

/// Split off any glyph prefix and drop separators. Returns whether the prefix
/// carried a minus sign, and the bare number text.
fn strip_amount(text: &str) -> Option<(bool, String)> {
    let trimmed = text.trim();
    let start = trimmed
        .char_indices()
        .find(|&(i, c)| c.is_ascii_digit() || (c == '.' && starts_with_digit(&trimmed[i + 1..])))
        .map(|(i, _)| i)?;

    let (prefix, number) = trimmed.split_at(start);
    let mut cleaned: String = number
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.starts_with('.') {
        cleaned.insert(0, '0');
    }
    Some((prefix.contains('-'), cleaned))
}

fn signed(number: &str, negative: bool) -> Option<Decimal> {
    let value = Decimal::from_str(number).ok()?;
    Some(if negative { -value } else { value })
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Format an amount with a currency symbol, thousands separators and 2 decimals
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
}

/// Format a weight with exactly 3 decimals
pub fn format_weight(weight_kg: Decimal) -> String {
    format!("{} kg", round_weight(weight_kg))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
