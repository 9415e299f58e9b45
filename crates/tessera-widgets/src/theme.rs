//! Shared theme constants for tessera form widgets
//!
//! Colours for validation feedback and the panels that frame the form and
//! preview.

use iced::Color;

/// Field border after a change within the limit
pub const VALID_COLOR: Color = Color::from_rgb(0.2, 0.75, 0.4); // #33BF66

/// Field border and warning text after a change over the limit
pub const INVALID_COLOR: Color = Color::from_rgb(0.9, 0.3, 0.3); // #E64D4D

/// Base colour of the +/- hold controls
pub const CONTROL_BG: Color = Color::from_rgb(0.25, 0.25, 0.28);

/// Secondary text (units, captions)
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.65);

/// Divider lines around panels
pub const DIVIDER_COLOR: Color = Color::from_rgb(0.35, 0.35, 0.40);

/// Panel background
pub const PANEL_BG: Color = Color::from_rgb(0.14, 0.14, 0.16);

/// Form layout configuration
pub struct FormConfig {
    /// Width of an option's label column
    pub label_width: f32,
    /// Size of each +/- control
    pub control_size: f32,
    /// Text size inside fields
    pub text_size: f32,
    /// Spacing between options
    pub spacing: f32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            label_width: 120.0,
            control_size: 28.0,
            text_size: 14.0,
            spacing: 8.0,
        }
    }
}
