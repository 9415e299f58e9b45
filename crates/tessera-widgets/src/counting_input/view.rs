//! View function for the counting input widget

use iced::widget::{button, column, mouse_area, row, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use tessera_core::{Direction, Validity};

use super::message::CountingInputMessage;
use super::CountingInput;
use crate::button_styles::hold_control_style;
use crate::feedback::feedback;
use crate::theme::{FormConfig, INVALID_COLOR, TEXT_SECONDARY, VALID_COLOR};

/// Render a counting input for the owner's current `value`
///
/// Layout:
/// ```text
/// [            14 ] px  [−] [+]
/// Set a value of 20 or less.
/// ```
pub fn counting_input_view(state: &CountingInput, value: f64) -> Element<'_, CountingInputMessage> {
    let config = FormConfig::default();
    let validity = state.validity();

    let field = text_input(state.label(), &state.display_text(value))
        .on_input(CountingInputMessage::TextChanged)
        .size(config.text_size)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            match validity {
                Validity::Valid => style.border.color = VALID_COLOR,
                Validity::Invalid => style.border.color = INVALID_COLOR,
                Validity::Untouched => {}
            }
            style
        });

    let mut body = row![field].spacing(5).align_y(Alignment::Center);

    if let Some(unit) = state.unit_label() {
        body = body.push(text(unit).size(config.text_size - 2.0).color(TEXT_SECONDARY));
    }

    if state.shows_controls() {
        let held = state.held();
        body = body
            .push(hold_control(Direction::Decrement, held, &config))
            .push(hold_control(Direction::Increment, held, &config));
    }

    if state.shows_feedback() {
        let warning = format!("Set a value of {} or less.", state.number_type().format(state.limit()));
        column![body, feedback(validity, warning)]
            .spacing(2)
            .width(Length::Fill)
            .into()
    } else {
        body.width(Length::Fill).into()
    }
}

/// A +/- control that steps while the pointer is held down on it
fn hold_control<'a>(
    direction: Direction,
    held: Option<Direction>,
    config: &FormConfig,
) -> Element<'a, CountingInputMessage> {
    let is_held = held == Some(direction);

    // No on_press: the mouse area owns press/release so the hold survives
    // iced's click semantics
    let control = button(text(direction.symbol()).size(config.text_size).center())
        .width(Length::Fixed(config.control_size))
        .height(Length::Fixed(config.control_size))
        .style(move |_theme, _status| hold_control_style(is_held));

    mouse_area(control)
        .on_press(CountingInputMessage::HoldPressed(direction))
        .on_release(CountingInputMessage::HoldReleased)
        .on_exit(CountingInputMessage::HoldReleased)
        .into()
}
