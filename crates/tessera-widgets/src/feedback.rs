//! Validation feedback line shown under a form field

use iced::widget::{text, Space};
use iced::Element;
use tessera_core::Validity;

use crate::theme::INVALID_COLOR;

/// Warning text for an over-limit field, nothing otherwise
pub fn feedback<'a, Message: 'a>(validity: Validity, message: String) -> Element<'a, Message> {
    if validity.is_invalid() {
        text(message).size(12).color(INVALID_COLOR).into()
    } else {
        Space::new().height(0).into()
    }
}
