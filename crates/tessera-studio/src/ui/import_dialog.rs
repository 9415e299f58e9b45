//! Import dialog: paste a YAML button style to replace the form

use iced::widget::{button, column, row, text, text_editor, Space};
use iced::{Font, Length};
use tessera_widgets::theme::INVALID_COLOR;

use super::message::Message;
use super::modals::Modal;

const PLACEHOLDER: &str = "label: Sign up\nwidth: 160\nheight: 48\nbackground_color: '#3366cc'\nfont_size: 18";

/// State of the open import dialog
#[derive(Default)]
pub struct ImportDialog {
    content: text_editor::Content,
    /// Why the last attempt was refused
    error: Option<String>,
}

impl ImportDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an editor action; editing clears a previous error
    pub fn perform(&mut self, action: text_editor::Action) {
        if action.is_edit() {
            self.error = None;
        }
        self.content.perform(action);
    }

    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// Dialog for `dialog` (shown through `with_modal_overlay`)
pub fn view(dialog: &ImportDialog) -> Modal<'_> {
    let editor = text_editor(&dialog.content)
        .placeholder(PLACEHOLDER)
        .on_action(Message::ImportEdited)
        .font(Font::MONOSPACE)
        .size(13)
        .height(Length::Fixed(220.0));

    let mut body = column![
        text("Paste a button style as YAML. Missing keys use their defaults.").size(14),
        editor,
    ]
    .spacing(10);

    if let Some(error) = dialog.error() {
        body = body.push(text(error).size(12).color(INVALID_COLOR));
    }

    let cancel_btn = button(text("Cancel"))
        .on_press(Message::CloseImport)
        .style(button::secondary);
    let import_btn = button(text("Import"))
        .on_press(Message::ConfirmImport)
        .style(button::primary);

    body = body.push(row![Space::new().width(Length::Fill), cancel_btn, import_btn].spacing(10));

    Modal::new("Import style", body).width(480.0)
}
