//! Tenth-precision arithmetic
//!
//! Decimal counters step by 0.1. Adding binary floats directly drifts
//! (`0.1 + 0.2 != 0.3`), so all stepping happens on values scaled to
//! whole tenths and is divided back afterwards.

/// Round to the nearest tenth
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `a + b`, exact to one decimal place
pub fn plus_decimal(a: f64, b: f64) -> f64 {
    ((a * 10.0).round() + (b * 10.0).round()) / 10.0
}

/// `a - b`, exact to one decimal place
pub fn minus_decimal(a: f64, b: f64) -> f64 {
    ((a * 10.0).round() - (b * 10.0).round()) / 10.0
}

/// Number of fractional digits in the shortest decimal form of `value`
///
/// `0.25` has 2, `10.5` has 1, `3.0` has 0.
pub fn fractional_digits(value: f64) -> usize {
    let repr = format!("{}", value);
    repr.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}

/// Collapse a value with two or more fractional digits to its last digit in tenths
///
/// Typing a second decimal place replaces the value rather than extending
/// it: `0.25` becomes `0.5`, `1.25` becomes `0.5`. Values with at most one
/// fractional digit are returned unchanged.
pub fn collapse_to_last_tenth(value: f64) -> f64 {
    if fractional_digits(value) < 2 {
        return value;
    }

    let repr = format!("{}", value);
    repr.chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map(|digit| f64::from(digit) / 10.0)
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_drift() {
        assert_eq!(plus_decimal(0.1, 0.2), 0.3);
        assert_eq!(minus_decimal(0.3, 0.1), 0.2);

        let mut v = 0.0;
        for _ in 0..10 {
            v = plus_decimal(v, 0.1);
        }
        assert_eq!(v, 1.0);
    }

    #[test]
    fn test_fractional_digits() {
        assert_eq!(fractional_digits(3.0), 0);
        assert_eq!(fractional_digits(10.5), 1);
        assert_eq!(fractional_digits(0.25), 2);
        assert_eq!(fractional_digits(12.345), 3);
    }

    #[test]
    fn test_collapse() {
        assert_eq!(collapse_to_last_tenth(0.25), 0.5);
        assert_eq!(collapse_to_last_tenth(1.25), 0.5);
        assert_eq!(collapse_to_last_tenth(0.07), 0.7);
        // Single decimal place is already valid
        assert_eq!(collapse_to_last_tenth(10.5), 10.5);
        assert_eq!(collapse_to_last_tenth(0.3), 0.3);
        assert_eq!(collapse_to_last_tenth(4.0), 4.0);
    }
}
