//! Result dialog for export and import

use iced::widget::{button, column, row, text, Space};
use iced::Length;
use tessera_widgets::theme::{INVALID_COLOR, VALID_COLOR};

use super::message::Message;
use super::modals::Modal;
use crate::fields::Adjustment;

/// Outcome shown after an export or import
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub is_error: bool,
}

impl Notice {
    pub fn copied(bytes: usize) -> Self {
        Self {
            title: String::from("Copied!"),
            body: format!("{} bytes of markup are on the clipboard.", bytes),
            is_error: false,
        }
    }

    pub fn failed(reason: &str) -> Self {
        Self {
            title: String::from("Copy failed"),
            body: format!("Copying is not supported here: {}", reason),
            is_error: true,
        }
    }

    /// Import applied; lists the numbers that had to be adjusted
    pub fn imported(adjusted: &[Adjustment]) -> Self {
        let body = if adjusted.is_empty() {
            String::from("The button style was imported.")
        } else {
            let changes: Vec<String> = adjusted
                .iter()
                .map(|a| format!("{} {} → {}", a.field.label(), a.from, a.to))
                .collect();
            format!("The button style was imported. Adjusted: {}.", changes.join(", "))
        };

        Self {
            title: String::from("Imported"),
            body,
            is_error: false,
        }
    }
}

/// Dialog for `notice` (shown through `with_modal_overlay`)
pub fn view(notice: &Notice) -> Modal<'_> {
    let accent = if notice.is_error { INVALID_COLOR } else { VALID_COLOR };

    let ok_btn = button(text("OK"))
        .on_press(Message::DismissNotice)
        .style(button::primary);

    let body = column![
        text(&notice.body).size(14),
        row![Space::new().width(Length::Fill), ok_btn],
    ]
    .spacing(15);

    Modal::new(notice.title.clone(), body).accent(accent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::StyleField;

    #[test]
    fn test_imported_lists_adjustments() {
        assert_eq!(Notice::imported(&[]).body, "The button style was imported.");

        let notice = Notice::imported(&[Adjustment {
            field: StyleField::Width,
            from: 120.5,
            to: 120.0,
        }]);
        assert!(!notice.is_error);
        assert!(notice.body.ends_with("Adjusted: Width 120.5 → 120."));
    }
}
