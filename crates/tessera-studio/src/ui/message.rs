//! Message types for the tessera-studio UI
//!
//! Messages are grouped by the area of the window that sends them.

use iced::widget::text_editor;
use tessera_core::ExportTemplate;
use tessera_widgets::CountingInputMessage;

use super::form::ColorField;
use crate::fields::StyleField;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    Counter(StyleField, CountingInputMessage),
    SetLabel(String),
    SetColor(ColorField, String),

    // Export
    SelectTemplate(ExportTemplate),
    ToggleWrapHtml(bool),
    Export,
    ExportComplete(Result<usize, String>),
    DismissNotice,

    // Import
    OpenImport,
    ImportEdited(text_editor::Action),
    ConfirmImport,
    CloseImport,

    // Defaults
    SaveDefaults,
    SaveDefaultsComplete(Result<(), String>),
}
