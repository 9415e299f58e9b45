//! Import of a button style pasted as YAML
//!
//! Accepts the same mapping the config file uses under `button:`. Missing
//! keys take their built-in defaults; numbers are fitted like loaded config
//! values, except that out-of-range numbers keep the form's current value.

use thiserror::Error;
use tessera_core::ButtonStyle;

use crate::fields::{fit_style, Adjustment};

/// Errors from reading a pasted style
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Nothing to import")]
    Empty,

    #[error("Not a button style: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A style ready to replace the form's
#[derive(Debug, Clone, PartialEq)]
pub struct Imported {
    pub style: ButtonStyle,
    /// Numbers changed while fitting
    pub adjusted: Vec<Adjustment>,
}

/// Parse `text` as a [`ButtonStyle`] and fit it against `current`
pub fn import_style(text: &str, current: &ButtonStyle) -> Result<Imported, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::Empty);
    }

    let mut style: ButtonStyle = serde_yaml::from_str(text)?;
    let adjusted = fit_style(&mut style, current);
    log::info!(
        "import_style: {:?}, {} value(s) adjusted",
        style.label,
        adjusted.len()
    );

    Ok(Imported { style, adjusted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::StyleField;

    #[test]
    fn test_import_full_style() {
        let current = ButtonStyle::default();
        let yaml = "\
label: Sign up
width: 160
height: 48
background_color: '#112233'
background_alpha: 0.8
color: '#eeeeee'
border_radius: 24
border_width: 0
border_color: '#000000'
font_size: 18
";
        let imported = import_style(yaml, &current).unwrap();
        assert_eq!(imported.style.label, "Sign up");
        assert_eq!(imported.style.width, 160.0);
        assert_eq!(imported.style.background_color, "#112233");
        assert_eq!(imported.style.background_alpha, 0.8);
        // Zero border is outside (0, limit], so the current width is kept
        assert_eq!(imported.style.border_width, current.border_width);
        assert_eq!(imported.adjusted.len(), 1);
        assert_eq!(imported.adjusted[0].field, StyleField::BorderWidth);
    }

    #[test]
    fn test_import_fits_against_current() {
        let current = ButtonStyle {
            font_size: 30.0,
            ..ButtonStyle::default()
        };
        let imported = import_style("width: 99.9\nbackground_alpha: 0.36\nfont_size: 400\n", &current).unwrap();
        assert_eq!(imported.style.width, 99.0);
        assert_eq!(imported.style.background_alpha, 0.4);
        assert_eq!(imported.style.font_size, 30.0);
        // Missing keys use built-in defaults
        assert_eq!(imported.style.label, ButtonStyle::default().label);
    }

    #[test]
    fn test_import_errors() {
        let current = ButtonStyle::default();
        assert!(matches!(import_style("  \n", &current), Err(ImportError::Empty)));
        assert!(matches!(import_style("width: [1, 2", &current), Err(ImportError::Parse(_))));
        assert!(matches!(import_style("just a string", &current), Err(ImportError::Parse(_))));
    }
}
