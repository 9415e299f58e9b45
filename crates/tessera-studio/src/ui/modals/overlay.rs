//! Dialog framing and the overlay that shows it above the window

use iced::widget::{center, column, container, mouse_area, opaque, stack, text, Space};
use iced::{Color, Element, Length};

use super::super::message::Message;

/// Backdrop dimming behind an open dialog
const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);

const DEFAULT_WIDTH: f32 = 360.0;

/// A titled dialog
pub struct Modal<'a> {
    title: String,
    accent: Option<Color>,
    body: Element<'a, Message>,
    width: f32,
}

impl<'a> Modal<'a> {
    pub fn new(title: impl Into<String>, body: impl Into<Element<'a, Message>>) -> Self {
        Self {
            title: title.into(),
            accent: None,
            body: body.into(),
            width: DEFAULT_WIDTH,
        }
    }

    /// Colour the title (success/failure)
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    fn into_element(self) -> Element<'a, Message> {
        let mut title = text(self.title).size(20);
        if let Some(color) = self.accent {
            title = title.color(color);
        }

        container(column![title, self.body].spacing(15).width(Length::Fixed(self.width)))
            .padding(30)
            .style(container::rounded_box)
            .into()
    }
}

/// Show `modal` centred above `base`
///
/// Clicking the dimmed area around the dialog sends `close_message`; clicks
/// inside the dialog never reach the backdrop or the base view.
pub fn with_modal_overlay<'a>(
    base: Element<'a, Message>,
    modal: Modal<'a>,
    close_message: Message,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(BACKDROP.into()),
                ..Default::default()
            }),
    )
    .on_press(close_message);

    let dialog = center(opaque(modal.into_element()))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![base, backdrop, dialog].into()
}
