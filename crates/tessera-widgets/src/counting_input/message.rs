//! Messages for the counting input widget

use tessera_core::Direction;

/// Messages emitted by a counting input
#[derive(Debug, Clone)]
pub enum CountingInputMessage {
    /// The text field was edited
    TextChanged(String),

    /// Pointer pressed on a +/- control
    HoldPressed(Direction),

    /// Pointer released on, or left, a +/- control
    HoldReleased,

    /// One hold interval elapsed (from the widget's subscription)
    HoldTick,
}
