//! Numeric options of the button builder
//!
//! Each numeric property of a [`ButtonStyle`] is edited through a counting
//! input. This table fixes the limit, number mode and unit for each one.

use tessera_core::{ButtonStyle, NumberType};

/// A numeric property of the generated button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    Width,
    Height,
    BackgroundAlpha,
    BorderRadius,
    BorderWidth,
    FontSize,
}

impl StyleField {
    /// Form order
    pub const ALL: [StyleField; 6] = [
        StyleField::Width,
        StyleField::Height,
        StyleField::BackgroundAlpha,
        StyleField::BorderRadius,
        StyleField::BorderWidth,
        StyleField::FontSize,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StyleField::Width => "Width",
            StyleField::Height => "Height",
            StyleField::BackgroundAlpha => "Background opacity",
            StyleField::BorderRadius => "Border radius",
            StyleField::BorderWidth => "Border width",
            StyleField::FontSize => "Font size",
        }
    }

    /// Upper limit before the field is flagged
    pub fn limit(self) -> f64 {
        match self {
            StyleField::Width => 500.0,
            StyleField::Height => 200.0,
            StyleField::BackgroundAlpha => 1.0,
            StyleField::BorderRadius => 100.0,
            StyleField::BorderWidth => 20.0,
            StyleField::FontSize => 72.0,
        }
    }

    pub fn number_type(self) -> NumberType {
        match self {
            StyleField::BackgroundAlpha => NumberType::Decimal,
            _ => NumberType::Integer,
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            StyleField::BackgroundAlpha => None,
            _ => Some("px"),
        }
    }

    pub fn get(self, style: &ButtonStyle) -> f64 {
        match self {
            StyleField::Width => style.width,
            StyleField::Height => style.height,
            StyleField::BackgroundAlpha => style.background_alpha,
            StyleField::BorderRadius => style.border_radius,
            StyleField::BorderWidth => style.border_width,
            StyleField::FontSize => style.font_size,
        }
    }

    pub fn set(self, style: &mut ButtonStyle, value: f64) {
        let slot = match self {
            StyleField::Width => &mut style.width,
            StyleField::Height => &mut style.height,
            StyleField::BackgroundAlpha => &mut style.background_alpha,
            StyleField::BorderRadius => &mut style.border_radius,
            StyleField::BorderWidth => &mut style.border_width,
            StyleField::FontSize => &mut style.font_size,
        };
        *slot = value;
    }

    /// Whether `value` is a sensible saved default (within `0..=limit`)
    pub fn is_within_limit(self, value: f64) -> bool {
        value > 0.0 && value <= self.limit()
    }

    /// Snap `value` to this field's precision; `None` if it then falls outside `0..=limit`
    pub fn fit(self, value: f64) -> Option<f64> {
        let snapped = self.number_type().normalize(value);
        self.is_within_limit(snapped).then_some(snapped)
    }
}

/// A numeric value changed while fitting a loaded style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub field: StyleField,
    pub from: f64,
    pub to: f64,
}

/// Fit every numeric value of a style read from outside the form
///
/// Values are snapped to whole numbers or tenths. Values still outside
/// their field's range take the value from `fallback`.
pub fn fit_style(style: &mut ButtonStyle, fallback: &ButtonStyle) -> Vec<Adjustment> {
    let mut adjusted = Vec::new();

    for field in StyleField::ALL {
        let from = field.get(style);
        let to = field.fit(from).unwrap_or_else(|| field.get(fallback));
        // NaN never equals itself, so it is always reported
        if to != from {
            log::warn!("fit_style: {} {} -> {}", field.label(), from, to);
            field.set(style, to);
            adjusted.push(Adjustment { field, from, to });
        }
    }

    adjusted
}
