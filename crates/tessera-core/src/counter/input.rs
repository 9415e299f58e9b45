//! Coercion of raw text-field contents into counter candidates

use crate::count::NumberType;
use crate::decimal::collapse_to_last_tenth;

/// Turn the raw contents of a counting text field into a candidate value
///
/// Returns `None` when the text is not a number (a lone `-` or `.` while
/// the user is still typing); the caller leaves its state untouched.
///
/// - Empty text and zero become the type's minimum value, never zero
/// - Integer mode drops any fractional part
/// - Decimal mode collapses a second decimal place to the last digit in tenths
/// - Negative input is made positive
pub fn parse_candidate(raw: &str, number_type: NumberType) -> Option<f64> {
    let trimmed = raw.trim();

    let mut num = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse::<f64>().ok()?
    };

    if num.is_nan() {
        return None;
    }

    if number_type == NumberType::Integer {
        num = num.trunc();
    }

    if num == 0.0 {
        num = number_type.min_value();
    }

    if number_type == NumberType::Decimal {
        num = collapse_to_last_tenth(num.abs());
    }

    Some(num.abs())
}
