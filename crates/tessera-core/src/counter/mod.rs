//! Bounded counter logic
//!
//! The state machine behind every numeric option in the builder. The owner
//! keeps the actual value; the counter only proposes new values and tracks
//! whether the last attempt went over the limit.
//!
//! ## Ranges
//!
//! ```text
//!   0 ─────────────── limit ───── limit + 2
//!   │   committed,     │ committed, │ rejected
//!   │   Valid          │ Invalid    │ Invalid, hold stops
//! ```
//!
//! Values up to `limit + 2` (exclusive) are still committed so the feedback
//! can flash at the boundary before a held control stops stepping.
//!
//! ## Usage
//!
//! ```rust
//! use tessera_core::counter::BoundedCounter;
//! use tessera_core::count::NumberType;
//!
//! let mut size = 12.0;
//! let mut counter = BoundedCounter::new(20.0, NumberType::Integer);
//!
//! if let Some(committed) = counter.text_input("18") {
//!     size = committed;
//! }
//! assert_eq!(size, 18.0);
//! assert!(counter.validity().is_valid());
//! ```

mod hold;
mod input;

pub use hold::{HoldSession, HOLD_INTERVAL};
pub use input::parse_candidate;

use crate::count::{Direction, NumberType};

/// Outcome of the most recent attempted change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// No change attempted yet
    #[default]
    Untouched,
    /// Last attempt was within the limit
    Valid,
    /// Last attempt exceeded the limit
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }

    pub fn is_invalid(self) -> bool {
        self == Validity::Invalid
    }
}

/// Counter state for one numeric option
#[derive(Debug, Clone)]
pub struct BoundedCounter {
    limit: f64,
    number_type: NumberType,
    validity: Validity,
    /// At most one session per counter
    hold: Option<HoldSession>,
}

impl BoundedCounter {
    pub fn new(limit: f64, number_type: NumberType) -> Self {
        Self {
            limit,
            number_type,
            validity: Validity::Untouched,
            hold: None,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn number_type(&self) -> NumberType {
        self.number_type
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Whether a press-and-hold session is running
    pub fn is_holding(&self) -> bool {
        self.hold.is_some()
    }

    /// Direction of the running session, if any
    pub fn hold_direction(&self) -> Option<Direction> {
        self.hold.map(|session| session.direction())
    }

    /// Whether `value` may be committed
    pub fn accepts(&self, value: f64) -> bool {
        value > 0.0 && value < self.limit + 2.0
    }

    /// Handle an edit of the text field
    ///
    /// Returns the value to commit, or `None` if the text was not a number
    /// or the candidate fell outside the accepted range.
    pub fn text_input(&mut self, raw: &str) -> Option<f64> {
        let candidate = parse_candidate(raw, self.number_type)?;
        self.accept(candidate)
    }

    /// Begin stepping from `current` in `direction`
    ///
    /// `current` is snapped to the counter's precision first, so steps land
    /// on whole numbers or tenths even if the owner's value does not.
    /// Returns `false` without touching the running session if one is
    /// already active.
    pub fn start_hold(&mut self, direction: Direction, current: f64) -> bool {
        if self.hold.is_some() {
            return false;
        }

        let start = self.number_type.normalize(current);
        log::debug!("start_hold: {:?} from {} (owner value {})", direction, start, current);
        self.hold = Some(HoldSession::new(direction, start));
        true
    }

    /// End the running session, if any
    pub fn stop_hold(&mut self) {
        if let Some(session) = self.hold.take() {
            log::debug!(
                "stop_hold: {:?} ended at {}",
                session.direction(),
                session.value()
            );
        }
    }

    /// One hold period elapsed
    ///
    /// Steps the session and returns the value to commit. A rejected step
    /// ends the session.
    pub fn hold_tick(&mut self) -> Option<f64> {
        let number_type = self.number_type;
        let candidate = self.hold.as_mut()?.advance(number_type);
        self.accept(candidate)
    }

    /// Validate a candidate and decide whether it is committed
    ///
    /// Validity always reflects the attempted value, even when the value
    /// itself is rejected.
    pub fn accept(&mut self, candidate: f64) -> Option<f64> {
        self.validity = if candidate > self.limit {
            Validity::Invalid
        } else {
            Validity::Valid
        };

        if self.accepts(candidate) {
            Some(candidate)
        } else {
            log::debug!(
                "accept: rejected {} (range 0..{})",
                candidate,
                self.limit + 2.0
            );
            self.stop_hold();
            None
        }
    }
}
