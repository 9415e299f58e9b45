//! Press-and-hold repetition

use std::time::Duration;

use crate::count::{Direction, NumberType};

/// Period between steps while a control is held
pub const HOLD_INTERVAL: Duration = Duration::from_millis(50);

/// An active press-and-hold session
///
/// Keeps its own running value so steps continue from where the hold
/// started, independent of how quickly the owner commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldSession {
    direction: Direction,
    value: f64,
}

impl HoldSession {
    pub fn new(direction: Direction, start_value: f64) -> Self {
        Self {
            direction,
            value: start_value,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Last value proposed by this session
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Advance one step and return the new candidate
    pub fn advance(&mut self, number_type: NumberType) -> f64 {
        self.value = number_type.step_value(self.value, self.direction);
        self.value
    }
}
