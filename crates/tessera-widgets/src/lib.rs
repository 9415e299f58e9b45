//! Shared UI widgets for the tessera snippet builder
//!
//! Reusable iced widgets for the builder's option forms.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: `CountingInput` wraps the core `BoundedCounter`
//!   with presentation flags and the draft text
//! - **View functions**: take state + the owner's value, return
//!   `Element<Message>`
//! - **Subscriptions**: hold timers exist only while a control is held
//!
//! ## Widgets
//!
//! - `counting_input_view`: numeric field with press-and-hold +/- controls
//! - `feedback`: over-limit warning line

pub mod button_styles;
pub mod counting_input;
pub mod feedback;
pub mod subscription;
pub mod theme;

pub use counting_input::{counting_input_view, CountingInput, CountingInputMessage};
pub use feedback::feedback;
pub use subscription::hold_ticks;
pub use theme::{FormConfig, INVALID_COLOR, VALID_COLOR};
