//! Conversion between display text and numbers

use crate::engine::{CalcError, CalcResult};

/// Renders a number the way the display shows it.
///
/// Uses the default `f64` formatting (shortest digits that round-trip, no
/// exponent, no grouping). Negative zero renders as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Parses display text into a number.
///
/// Accepts everything the keypad can produce, including a trailing decimal
/// point (`"12."`). A literal too long for `f64` parses as infinity. The
/// error sentinel and anything else non-numeric fail.
pub fn parse_number(text: &str) -> CalcResult<f64> {
    let invalid = || CalcError::InvalidNumber {
        text: text.to_string(),
    };
    if text.is_empty()
        || !text
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return Err(invalid());
    }
    text.parse::<f64>().map_err(|_| invalid())
}
