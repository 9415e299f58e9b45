//! Hex colour parsing and CSS colour strings

use crate::error::{ColorError, ColorResult};

/// An 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `rgba(r, g, b, alpha)` for CSS
    pub fn to_css_rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Parse `#rrggbb`, `rrggbb` or the `#rgb` shorthand
pub fn hex_to_rgb(hex: &str) -> ColorResult<Rgb> {
    let digits = hex.trim().trim_start_matches('#');

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(hex.to_string()));
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidDigit(hex.to_string()));

    match digits.len() {
        6 => Ok(Rgb {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
        }),
        3 => {
            // #abc == #aabbcc
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Ok(Rgb {
                r: expand(0)?,
                g: expand(1)?,
                b: expand(2)?,
            })
        }
        _ => Err(ColorError::InvalidLength(hex.to_string())),
    }
}

/// CSS background for a hex colour at `alpha`, or `inherit` if the hex is invalid
pub fn background_css(hex: &str, alpha: f64) -> String {
    match hex_to_rgb(hex) {
        Ok(rgb) => rgb.to_css_rgba(alpha),
        Err(e) => {
            log::debug!("background_css: {}, falling back to inherit", e);
            String::from("inherit")
        }
    }
}
