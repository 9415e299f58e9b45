//! Number modes and step directions for counting inputs

use serde::{Deserialize, Serialize};

/// How a counting input interprets and steps its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberType {
    /// Whole numbers, stepped by 1
    #[default]
    Integer,
    /// One decimal place, stepped by 0.1
    Decimal,
}

impl NumberType {
    /// Step size used by press-and-hold
    pub fn step(self) -> f64 {
        match self {
            NumberType::Integer => 1.0,
            NumberType::Decimal => 0.1,
        }
    }

    /// Smallest value a counter may rest at (substituted for a typed zero)
    pub fn min_value(self) -> f64 {
        self.step()
    }

    /// Step `value` once in `direction`
    pub fn step_value(self, value: f64, direction: Direction) -> f64 {
        match (self, direction) {
            (NumberType::Integer, Direction::Increment) => value + 1.0,
            (NumberType::Integer, Direction::Decrement) => value - 1.0,
            (NumberType::Decimal, Direction::Increment) => crate::decimal::plus_decimal(value, 0.1),
            (NumberType::Decimal, Direction::Decrement) => crate::decimal::minus_decimal(value, 0.1),
        }
    }

    /// Snap `value` to this mode's precision (whole numbers or tenths)
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            NumberType::Integer => value.trunc(),
            NumberType::Decimal => crate::decimal::round_tenths(value),
        }
    }

    /// Format a value for display in a text field
    pub fn format(self, value: f64) -> String {
        match self {
            NumberType::Integer => format!("{}", value.trunc()),
            NumberType::Decimal => format!("{}", crate::decimal::round_tenths(value)),
        }
    }
}

/// Direction of a press-and-hold session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// Label shown on the control
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Increment => "+",
            Direction::Decrement => "−",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps() {
        assert_eq!(NumberType::Integer.step(), 1.0);
        assert_eq!(NumberType::Decimal.step(), 0.1);
        assert_eq!(NumberType::Integer.step_value(5.0, Direction::Increment), 6.0);
        assert_eq!(NumberType::Integer.step_value(5.0, Direction::Decrement), 4.0);
        assert_eq!(NumberType::Decimal.step_value(0.2, Direction::Increment), 0.3);
        assert_eq!(NumberType::Decimal.step_value(0.3, Direction::Decrement), 0.2);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(NumberType::Integer.normalize(120.5), 120.0);
        assert_eq!(NumberType::Integer.normalize(7.0), 7.0);
        assert_eq!(NumberType::Decimal.normalize(0.36), 0.4);
        assert_eq!(NumberType::Decimal.normalize(0.32), 0.3);
        assert_eq!(NumberType::Decimal.normalize(0.04), 0.0);
        assert!(NumberType::Integer.normalize(f64::NAN).is_nan());
    }

    #[test]
    fn test_format() {
        assert_eq!(NumberType::Integer.format(12.0), "12");
        assert_eq!(NumberType::Decimal.format(0.5), "0.5");
        assert_eq!(NumberType::Decimal.format(0.30000000000000004), "0.3");
        assert_eq!(NumberType::Decimal.format(1.0), "1");
    }
}
