//! HTML/CSS export of a styled button
//!
//! Serializes the builder's form state into a snippet the user can paste
//! into a page. Two templates are supported:
//!
//! ```text
//! Inline            <button type="button" style="width: 120px; ...">Label</button>
//!
//! StyleAndElement   <style>
//!                     .generate-button {
//!                       width: 120px;
//!                       ...
//!                     }
//!                   </style>
//!                   <button type="button" class="generate-button">
//!                     Label
//!                   </button>
//! ```
//!
//! Either can be wrapped in a minimal HTML5 document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::background_css;

/// Class name used by the `StyleAndElement` template
pub const BUTTON_CLASS: &str = "generate-button";

/// Visual properties of the generated button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    pub label: String,
    /// Width in px
    pub width: f64,
    /// Height in px
    pub height: f64,
    /// Background as hex (`#rrggbb`)
    pub background_color: String,
    /// Background opacity (0.1 steps)
    pub background_alpha: f64,
    /// Text colour as hex
    pub color: String,
    /// Corner radius in px
    pub border_radius: f64,
    /// Border width in px
    pub border_width: f64,
    /// Border colour as hex
    pub border_color: String,
    /// Font size in px
    pub font_size: f64,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            label: String::from("Button"),
            width: 120.0,
            height: 40.0,
            background_color: String::from("#3366cc"),
            background_alpha: 1.0,
            color: String::from("#ffffff"),
            border_radius: 4.0,
            border_width: 1.0,
            border_color: String::from("#224488"),
            font_size: 14.0,
        }
    }
}

impl ButtonStyle {
    /// CSS background (`rgba(...)`, or `inherit` for an unparseable hex)
    pub fn background_css(&self) -> String {
        background_css(&self.background_color, self.background_alpha)
    }

    /// CSS declarations in export order
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", format!("{}px", self.width)),
            ("height", format!("{}px", self.height)),
            ("background-color", self.background_css()),
            ("color", self.color.clone()),
            ("border-radius", format!("{}px", self.border_radius)),
            (
                "border",
                format!("{}px solid {}", self.border_width, self.border_color),
            ),
            ("font-size", format!("{}px", self.font_size)),
        ]
    }
}

/// Shape of the exported snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportTemplate {
    /// Single element with an inline `style` attribute
    #[default]
    Inline,
    /// `<style>` block plus an element using its class
    StyleAndElement,
}

impl ExportTemplate {
    pub const ALL: [ExportTemplate; 2] = [ExportTemplate::Inline, ExportTemplate::StyleAndElement];
}

impl fmt::Display for ExportTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportTemplate::Inline => write!(f, "Inline style"),
            ExportTemplate::StyleAndElement => write!(f, "Style block + element"),
        }
    }
}

/// Export settings chosen next to the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub template: ExportTemplate,
    /// Wrap the snippet in a full HTML document
    pub wrap_html: bool,
}

/// Render the snippet for `style`
pub fn render_export(style: &ButtonStyle, options: &ExportOptions) -> String {
    let label = escape_html(&style.label);

    let snippet = match options.template {
        ExportTemplate::Inline => {
            let inline = style
                .declarations()
                .iter()
                .map(|(property, value)| format!("{}: {};", property, value))
                .collect::<Vec<_>>()
                .join(" ");
            format!("<button type=\"button\" style=\"{}\">{}</button>\n", inline, label)
        }
        ExportTemplate::StyleAndElement => {
            let mut out = String::from("<style>\n");
            out.push_str(&format!("  .{} {{\n", BUTTON_CLASS));
            for (property, value) in style.declarations() {
                out.push_str(&format!("    {}: {};\n", property, value));
            }
            out.push_str("  }\n</style>\n");
            out.push_str(&format!("<button type=\"button\" class=\"{}\">\n", BUTTON_CLASS));
            out.push_str(&format!("  {}\n", label));
            out.push_str("</button>\n");
            out
        }
    };

    if options.wrap_html {
        wrap_document(&snippet)
    } else {
        snippet
    }
}

/// Wrap a snippet in a minimal HTML5 document
fn wrap_document(snippet: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n  <head>\n");
    out.push_str("    <meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\" />\n");
    out.push_str("    <meta charset=\"utf-8\" />\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    out.push_str("  </head>\n  <body>\n");
    for line in snippet.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("  </body>\n</html>\n");
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ButtonStyle {
        ButtonStyle {
            label: String::from("Buy now"),
            width: 100.0,
            height: 30.0,
            background_color: String::from("#ff0000"),
            background_alpha: 0.5,
            color: String::from("#ffffff"),
            border_radius: 6.0,
            border_width: 2.0,
            border_color: String::from("#000000"),
            font_size: 12.0,
        }
    }

    #[test]
    fn test_inline_export() {
        let out = render_export(&sample(), &ExportOptions::default());
        assert_eq!(
            out,
            "<button type=\"button\" style=\"width: 100px; height: 30px; \
             background-color: rgba(255, 0, 0, 0.5); color: #ffffff; border-radius: 6px; \
             border: 2px solid #000000; font-size: 12px;\">Buy now</button>\n"
        );
    }

    #[test]
    fn test_style_and_element_export() {
        let options = ExportOptions {
            template: ExportTemplate::StyleAndElement,
            wrap_html: false,
        };
        let out = render_export(&sample(), &options);
        let expected = "\
<style>
  .generate-button {
    width: 100px;
    height: 30px;
    background-color: rgba(255, 0, 0, 0.5);
    color: #ffffff;
    border-radius: 6px;
    border: 2px solid #000000;
    font-size: 12px;
  }
</style>
<button type=\"button\" class=\"generate-button\">
  Buy now
</button>
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_html_wrapper() {
        let options = ExportOptions {
            template: ExportTemplate::Inline,
            wrap_html: true,
        };
        let out = render_export(&sample(), &options);
        assert!(out.starts_with("<!DOCTYPE html>\n<html>\n"));
        assert!(out.contains("<meta charset=\"utf-8\" />"));
        assert!(out.contains("  <body>\n    <button type=\"button\" style=\""));
        assert!(out.ends_with("  </body>\n</html>\n"));
    }

    #[test]
    fn test_invalid_background_falls_back() {
        let mut style = sample();
        style.background_color = String::from("not-a-colour");
        let out = render_export(&style, &ExportOptions::default());
        assert!(out.contains("background-color: inherit;"));
    }

    #[test]
    fn test_label_is_escaped() {
        let mut style = sample();
        style.label = String::from("<b>\"Tom & Jerry\"</b>");
        let out = render_export(&style, &ExportOptions::default());
        assert!(out.contains(">&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;</button>"));
    }

    #[test]
    fn test_style_deserializes_with_defaults() {
        let style: ButtonStyle = serde_yaml::from_str("label: Go\nwidth: 80\n").unwrap();
        assert_eq!(style.label, "Go");
        assert_eq!(style.width, 80.0);
        assert_eq!(style.height, ButtonStyle::default().height);
    }
}
