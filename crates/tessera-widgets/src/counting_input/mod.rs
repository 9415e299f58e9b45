//! Counting Input Widget
//!
//! A numeric text field with optional press-and-hold +/- controls and an
//! over-limit warning. Used for every size, width and opacity option in the
//! builder.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  [          14 ] px   [−] [+]            │
//! │  Set a value of 20 or less.              │  <- only when over the limit
//! └──────────────────────────────────────────┘
//! ```
//!
//! The owner keeps the value. `CountingInput` holds the counter logic, the
//! draft text and the hold session, and hands back values to commit:
//!
//! ```rust,ignore
//! // update
//! Message::IconSize(msg) => {
//!     if let Some(size) = self.icon_size_input.handle_message(msg, self.icon_size) {
//!         self.icon_size = size;
//!     }
//! }
//!
//! // view
//! counting_input_view(&self.icon_size_input, self.icon_size).map(Message::IconSize)
//!
//! // subscription
//! self.icon_size_input.subscription().map(Message::IconSize)
//! ```

mod message;
mod view;

pub use message::CountingInputMessage;
pub use view::counting_input_view;

use std::sync::atomic::{AtomicU64, Ordering};

use iced::Subscription;
use tessera_core::{BoundedCounter, Direction, NumberType, Validity};

use crate::subscription::hold_ticks;

/// Global counter for generating unique widget IDs
static INPUT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// State for one counting input
#[derive(Debug, Clone)]
pub struct CountingInput {
    /// Stable unique ID (keys the hold timer subscription)
    id: u64,
    /// Accessible name, also used for the +/- control labels
    label: String,
    /// Decorative suffix shown after the field (e.g. "px")
    unit: Option<String>,
    /// Show the +/- hold controls
    show_controls: bool,
    /// Show the over-limit warning under the field
    show_feedback: bool,
    counter: BoundedCounter,
    /// Text as typed, while it still matches the committed value
    draft: Option<String>,
}

impl CountingInput {
    /// Create an input bounded by `limit`
    pub fn new(label: impl Into<String>, limit: f64, number_type: NumberType) -> Self {
        Self {
            id: INPUT_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            label: label.into(),
            unit: None,
            show_controls: true,
            show_feedback: true,
            counter: BoundedCounter::new(limit, number_type),
            draft: None,
        }
    }

    /// Set the unit suffix
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Show or hide the +/- controls
    pub fn controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    /// Show or hide the over-limit warning
    pub fn feedback(mut self, show: bool) -> Self {
        self.show_feedback = show;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn unit_label(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn shows_controls(&self) -> bool {
        self.show_controls
    }

    pub fn shows_feedback(&self) -> bool {
        self.show_feedback
    }

    pub fn limit(&self) -> f64 {
        self.counter.limit()
    }

    pub fn number_type(&self) -> NumberType {
        self.counter.number_type()
    }

    pub fn validity(&self) -> Validity {
        self.counter.validity()
    }

    /// Direction of the running hold session, if any
    pub fn held(&self) -> Option<Direction> {
        self.counter.hold_direction()
    }

    /// Text to show in the field for the owner's current `value`
    pub fn display_text(&self, value: f64) -> String {
        self.draft
            .clone()
            .unwrap_or_else(|| self.number_type().format(value))
    }

    /// Handle a message and return the value the owner should commit
    ///
    /// `value` is the owner's current value; holds step from it.
    pub fn handle_message(&mut self, message: CountingInputMessage, value: f64) -> Option<f64> {
        match message {
            CountingInputMessage::TextChanged(raw) => {
                let committed = self.counter.text_input(&raw);
                // Keep partial input such as "1." visible while it still
                // means the committed value; otherwise show the value itself
                self.draft = committed
                    .filter(|&v| raw.trim().parse::<f64>().ok() == Some(v))
                    .map(|_| raw.trim().to_string());
                committed
            }
            CountingInputMessage::HoldPressed(direction) => {
                if self.counter.start_hold(direction, value) {
                    log::debug!("{}: hold {:?} from {}", self.label, direction, value);
                }
                None
            }
            CountingInputMessage::HoldReleased => {
                self.counter.stop_hold();
                None
            }
            CountingInputMessage::HoldTick => {
                let committed = self.counter.hold_tick();
                if committed.is_some() {
                    self.draft = None;
                }
                committed
            }
        }
    }

    /// Hold timer, active only while a +/- control is held
    pub fn subscription(&self) -> Subscription<CountingInputMessage> {
        if self.counter.is_holding() {
            hold_ticks(self.id).map(|_id| CountingInputMessage::HoldTick)
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon_size() -> CountingInput {
        CountingInput::new("Icon size", 20.0, NumberType::Integer).unit("px")
    }

    #[test]
    fn test_ids_are_unique() {
        let a = icon_size();
        let b = icon_size();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_builder_flags() {
        let input = CountingInput::new("Opacity", 1.0, NumberType::Decimal)
            .controls(false)
            .feedback(false);
        assert!(!input.shows_controls());
        assert!(!input.shows_feedback());
        assert_eq!(input.unit_label(), None);
        assert_eq!(icon_size().unit_label(), Some("px"));
    }

    #[test]
    fn test_text_commit_and_display() {
        let mut input = icon_size();
        let mut value = 12.0;

        if let Some(v) = input.handle_message(CountingInputMessage::TextChanged("18".into()), value) {
            value = v;
        }
        assert_eq!(value, 18.0);
        assert_eq!(input.display_text(value), "18");
        assert!(input.validity().is_valid());

        // Non-numeric text leaves everything as it was
        assert_eq!(
            input.handle_message(CountingInputMessage::TextChanged("18a".into()), value),
            None
        );
        assert_eq!(input.display_text(value), "18");
    }

    #[test]
    fn test_partial_decimal_text_is_kept() {
        let mut input = CountingInput::new("Opacity", 1.0, NumberType::Decimal);
        let value = input
            .handle_message(CountingInputMessage::TextChanged("0.".into()), 0.5)
            .unwrap_or(0.5);
        // "0." parses to zero, which becomes the minimum step
        assert_eq!(value, 0.1);
        assert_eq!(input.display_text(value), "0.1");

        let value = input
            .handle_message(CountingInputMessage::TextChanged("1.".into()), value)
            .unwrap_or(value);
        assert_eq!(value, 1.0);
        assert_eq!(input.display_text(value), "1.");

        let value = input
            .handle_message(CountingInputMessage::TextChanged("0.15".into()), value)
            .unwrap_or(value);
        assert_eq!(value, 0.5);
        assert_eq!(input.display_text(value), "0.5");
    }

    #[test]
    fn test_hold_drives_subscription_state() {
        let mut input = icon_size();
        let mut value = 19.0;

        input.handle_message(CountingInputMessage::HoldPressed(Direction::Increment), value);
        assert_eq!(input.held(), Some(Direction::Increment));

        for _ in 0..2 {
            if let Some(v) = input.handle_message(CountingInputMessage::HoldTick, value) {
                value = v;
            }
        }
        assert_eq!(value, 21.0);
        assert!(input.validity().is_invalid());

        // 22 is rejected and the session ends by itself
        assert_eq!(input.handle_message(CountingInputMessage::HoldTick, value), None);
        assert_eq!(input.held(), None);
    }

    #[test]
    fn test_release_ends_hold() {
        let mut input = icon_size();
        input.handle_message(CountingInputMessage::HoldPressed(Direction::Decrement), 5.0);
        input.handle_message(CountingInputMessage::HoldReleased, 5.0);
        assert_eq!(input.held(), None);
        assert_eq!(input.handle_message(CountingInputMessage::HoldTick, 5.0), None);
    }

    #[test]
    fn test_hold_clears_draft() {
        let mut input = CountingInput::new("Opacity", 1.0, NumberType::Decimal);
        let value = input
            .handle_message(CountingInputMessage::TextChanged("0.3".into()), 0.5)
            .unwrap_or(0.5);
        assert_eq!(input.display_text(value), "0.3");

        input.handle_message(CountingInputMessage::HoldPressed(Direction::Increment), value);
        let value = input
            .handle_message(CountingInputMessage::HoldTick, value)
            .unwrap_or(value);
        assert_eq!(value, 0.4);
        assert_eq!(input.display_text(value), "0.4");
    }
}
