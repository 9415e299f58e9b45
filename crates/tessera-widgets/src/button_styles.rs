//! Raised/pressed button styling
//!
//! The +/- controls of a counting input are held rather than clicked, so
//! their look follows the hold session instead of iced's momentary status:
//! - Raised while idle
//! - "Pressed in" for as long as the session runs

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

use crate::theme::CONTROL_BG;

/// Shadow offset for raised buttons
const SHADOW_OFFSET: Vector = Vector::new(1.0, 1.0);

/// Shadow blur for raised buttons
const SHADOW_BLUR: f32 = 2.0;

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Darken a color by a factor (0.0-1.0)
fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

fn raised_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(base_color)),
        text_color: Color::WHITE,
        border: Border {
            color: lighten(base_color, 0.1),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: SHADOW_OFFSET,
            blur_radius: SHADOW_BLUR,
        },
        snap: false,
    }
}

fn pressed_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(darken(base_color, 0.15))),
        text_color: Color::WHITE,
        border: Border {
            color: darken(base_color, 0.2),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Style for a +/- hold control
///
/// The control is a button without `on_press` (the surrounding mouse area
/// handles input), so iced always reports `Status::Disabled`; the hold state
/// decides the look instead.
///
/// Use with `.style(move |_theme, _status| hold_control_style(is_held))`
pub fn hold_control_style(is_held: bool) -> Style {
    if is_held {
        pressed_style(CONTROL_BG)
    } else {
        raised_style(CONTROL_BG)
    }
}

/// Style for ordinary clickable buttons in the builder (export, dialogs)
///
/// Use with `.style(move |_theme, status| press_release_style(status, color))`
pub fn press_release_style(status: Status, base_color: Color) -> Style {
    match status {
        Status::Active => raised_style(base_color),
        Status::Hovered => raised_style(lighten(base_color, 0.08)),
        Status::Pressed => pressed_style(base_color),
        Status::Disabled => Style {
            background: Some(Background::Color(Color::from_rgb(0.2, 0.2, 0.2))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_control_is_darker() {
        let idle = hold_control_style(false);
        let held = hold_control_style(true);
        let bg = |s: &Style| match s.background {
            Some(Background::Color(c)) => c,
            _ => panic!("expected a solid background"),
        };
        assert!(bg(&held).r < bg(&idle).r);
        assert_eq!(held.shadow.blur_radius, 0.0);
    }
}
