//! Button option form
//!
//! ```text
//! Label               [ Button                 ]
//! Width               [          120 ] px [−][+]
//! Height              [           40 ] px [−][+]
//! Background          [ #3366cc    ] ■
//! Background opacity  [            1 ]    [−][+]
//! ...
//! ```

use iced::widget::{column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Subscription, Theme};
use tessera_core::{hex_to_rgb, ButtonStyle};
use tessera_widgets::theme::{FormConfig, DIVIDER_COLOR, INVALID_COLOR, PANEL_BG};
use tessera_widgets::{counting_input_view, CountingInput, CountingInputMessage};

use super::message::Message;
use crate::fields::StyleField;

/// A colour property edited as hex text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Background,
    Text,
    Border,
}

impl ColorField {
    pub fn label(self) -> &'static str {
        match self {
            ColorField::Background => "Background",
            ColorField::Text => "Text colour",
            ColorField::Border => "Border colour",
        }
    }

    pub fn get(self, style: &ButtonStyle) -> &str {
        match self {
            ColorField::Background => &style.background_color,
            ColorField::Text => &style.color,
            ColorField::Border => &style.border_color,
        }
    }

    fn slot(self, style: &mut ButtonStyle) -> &mut String {
        match self {
            ColorField::Background => &mut style.background_color,
            ColorField::Text => &mut style.color,
            ColorField::Border => &mut style.border_color,
        }
    }
}

/// Form state: the button being built plus one counting input per number
#[derive(Debug, Clone)]
pub struct ButtonForm {
    pub style: ButtonStyle,
    /// Indexed by `StyleField as usize` (declaration order matches `ALL`)
    inputs: [CountingInput; StyleField::ALL.len()],
}

impl ButtonForm {
    pub fn new(style: ButtonStyle) -> Self {
        Self {
            style,
            inputs: StyleField::ALL.map(build_input),
        }
    }

    pub fn input(&self, field: StyleField) -> &CountingInput {
        &self.inputs[field as usize]
    }

    /// Route a counting input message; returns true if a value was committed
    pub fn handle_counter(&mut self, field: StyleField, message: CountingInputMessage) -> bool {
        let current = field.get(&self.style);
        match self.inputs[field as usize].handle_message(message, current) {
            Some(value) => {
                field.set(&mut self.style, value);
                true
            }
            None => false,
        }
    }

    pub fn set_label(&mut self, label: String) {
        self.style.label = label;
    }

    pub fn set_color(&mut self, field: ColorField, hex: String) {
        *field.slot(&mut self.style) = hex;
    }

    /// Hold timers of every counting input
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(StyleField::ALL.into_iter().map(|field| {
            self.input(field)
                .subscription()
                .with(field)
                .map(|(field, message)| Message::Counter(field, message))
        }))
    }
}

fn build_input(field: StyleField) -> CountingInput {
    let input = CountingInput::new(field.label(), field.limit(), field.number_type());
    match field.unit() {
        Some(unit) => input.unit(unit),
        None => input,
    }
}

/// Render the option form
pub fn view(form: &ButtonForm) -> Element<'_, Message> {
    let config = FormConfig::default();

    let mut options = column![text("Button").size(18)].spacing(config.spacing);

    options = options.push(option_row(
        "Label",
        text_input("Button label", &form.style.label)
            .on_input(Message::SetLabel)
            .size(config.text_size)
            .into(),
        &config,
    ));

    // Numbers and colours interleaved in the order a designer reads them
    let layout: [Entry; 9] = [
        Entry::Number(StyleField::Width),
        Entry::Number(StyleField::Height),
        Entry::Color(ColorField::Background),
        Entry::Number(StyleField::BackgroundAlpha),
        Entry::Color(ColorField::Text),
        Entry::Number(StyleField::FontSize),
        Entry::Number(StyleField::BorderRadius),
        Entry::Number(StyleField::BorderWidth),
        Entry::Color(ColorField::Border),
    ];

    for entry in layout {
        let line = match entry {
            Entry::Number(field) => option_row(
                field.label(),
                counting_input_view(form.input(field), field.get(&form.style))
                    .map(move |message| Message::Counter(field, message)),
                &config,
            ),
            Entry::Color(field) => option_row(field.label(), color_input(form, field, &config), &config),
        };
        options = options.push(line);
    }

    container(scrollable(options.padding(12)))
        .width(Length::Fixed(440.0))
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

enum Entry {
    Number(StyleField),
    Color(ColorField),
}

fn option_row<'a>(label: &'a str, control: Element<'a, Message>, config: &FormConfig) -> Element<'a, Message> {
    row![
        text(label).size(config.text_size).width(Length::Fixed(config.label_width)),
        control,
    ]
    .spacing(config.spacing)
    .align_y(Alignment::Start)
    .into()
}

/// Hex text field with a swatch of the parsed colour
fn color_input<'a>(form: &'a ButtonForm, field: ColorField, config: &FormConfig) -> Element<'a, Message> {
    let hex = field.get(&form.style);
    let parsed = hex_to_rgb(hex).ok();

    let input = text_input("#rrggbb", hex)
        .on_input(move |value| Message::SetColor(field, value))
        .size(config.text_size)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if parsed.is_none() {
                style.border.color = INVALID_COLOR;
            }
            style
        });

    let swatch_color = parsed
        .map(|rgb| Color::from_rgb8(rgb.r, rgb.g, rgb.b))
        .unwrap_or(Color::TRANSPARENT);

    let swatch = container(Space::new())
        .width(Length::Fixed(config.control_size))
        .height(Length::Fixed(config.control_size))
        .style(move |_theme| container::Style {
            background: Some(Background::Color(swatch_color)),
            border: Border {
                color: DIVIDER_COLOR,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

    row![input, swatch]
        .spacing(5)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}

pub(super) fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL_BG)),
        border: Border {
            color: DIVIDER_COLOR,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Direction;

    #[test]
    fn test_inputs_follow_field_order() {
        let form = ButtonForm::new(ButtonStyle::default());
        for field in StyleField::ALL {
            assert_eq!(form.input(field).label(), field.label());
            assert_eq!(form.input(field).limit(), field.limit());
        }
    }

    #[test]
    fn test_text_commit_updates_style() {
        let mut form = ButtonForm::new(ButtonStyle::default());
        assert!(form.handle_counter(StyleField::Width, CountingInputMessage::TextChanged("250".into())));
        assert_eq!(form.style.width, 250.0);

        assert!(!form.handle_counter(StyleField::Width, CountingInputMessage::TextChanged("wide".into())));
        assert_eq!(form.style.width, 250.0);
    }

    #[test]
    fn test_hold_steps_from_style_value() {
        let mut form = ButtonForm::new(ButtonStyle::default());
        form.style.border_width = 19.0;
        form.handle_counter(
            StyleField::BorderWidth,
            CountingInputMessage::HoldPressed(Direction::Increment),
        );
        for _ in 0..5 {
            form.handle_counter(StyleField::BorderWidth, CountingInputMessage::HoldTick);
        }
        assert_eq!(form.style.border_width, 21.0);
        assert!(form.input(StyleField::BorderWidth).validity().is_invalid());
        assert_eq!(form.input(StyleField::BorderWidth).held(), None);
    }

    #[test]
    fn test_set_color_and_label() {
        let mut form = ButtonForm::new(ButtonStyle::default());
        form.set_color(ColorField::Border, "#00ff00".into());
        form.set_label("Go".into());
        assert_eq!(form.style.border_color, "#00ff00");
        assert_eq!(ColorField::Border.get(&form.style), "#00ff00");
        assert_eq!(form.style.label, "Go");
    }
}
