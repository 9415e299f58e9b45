//! Timer subscriptions for press-and-hold controls
//!
//! A hold session's timer is an iced subscription that exists only while
//! the session does. Returning `Subscription::none()` once the session ends
//! is what cancels it.
//!
//! # Usage
//!
//! ```ignore
//! fn subscription(&self) -> Subscription<Message> {
//!     Subscription::batch([
//!         self.width.subscription().map(Message::Width),
//!         self.height.subscription().map(Message::Height),
//!     ])
//! }
//! ```

use iced::time;
use iced::Subscription;
use tessera_core::HOLD_INTERVAL;

/// Ticks every [`HOLD_INTERVAL`] for the widget with the given id
///
/// The id is part of the subscription's identity, so two widgets holding at
/// the same time each get their own timer.
pub fn hold_ticks(id: u64) -> Subscription<u64> {
    time::every(HOLD_INTERVAL).with(id).map(|(id, _instant)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: driving a subscription needs an iced runtime; the hold logic
    // itself is covered by tessera-core's counter tests.

    #[test]
    fn test_builds_without_runtime() {
        let _ticks: Subscription<u64> = hold_ticks(7);
    }
}
