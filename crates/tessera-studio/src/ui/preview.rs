//! Live preview and export controls
//!
//! ```text
//! ┌ Output ───────────────────────────────────────┐
//! │                  120px                         │
//! │          40px  [  Button  ]                    │
//! ├────────────────────────────────────────────────┤
//! │  [Import] [Inline ▾] [x] Full HTML   [Export]  │
//! ├────────────────────────────────────────────────┤
//! │  <button type="button" style="...">…</button>  │
//! └────────────────────────────────────────────────┘
//! ```

use iced::widget::{button, checkbox, column, container, pick_list, row, scrollable, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Font, Length};
use tessera_core::{hex_to_rgb, render_export, ButtonStyle, ExportOptions, ExportTemplate};
use tessera_widgets::button_styles::press_release_style;
use tessera_widgets::theme::TEXT_SECONDARY;

use super::form::panel_style;
use super::message::Message;

/// Height of the stage the button is drawn on
const STAGE_HEIGHT: f32 = 250.0;

const EXPORT_COLOR: Color = Color::from_rgb(0.3, 0.6, 0.9);

/// Render the preview panel
pub fn view<'a>(style: &'a ButtonStyle, export: &'a ExportOptions) -> Element<'a, Message> {
    let header = text("Output").size(18);

    let stage = container(sized_button(style))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(STAGE_HEIGHT))
        .clip(true);

    let template_picker = pick_list(ExportTemplate::ALL, Some(export.template), Message::SelectTemplate);

    let wrap_checkbox = checkbox(export.wrap_html)
        .label("Full HTML document")
        .on_toggle(Message::ToggleWrapHtml)
        .size(16);

    let export_btn = button(text("Export").center())
        .on_press(Message::Export)
        .width(Length::Fixed(100.0))
        .style(|_theme, status| press_release_style(status, EXPORT_COLOR));

    let import_btn = button(text("Import").center())
        .on_press(Message::OpenImport)
        .width(Length::Fixed(100.0))
        .style(button::secondary);

    let footer = row![
        import_btn,
        template_picker,
        wrap_checkbox,
        Space::new().width(Length::Fill),
        export_btn,
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let markup = scrollable(
        text(render_export(style, export))
            .font(Font::MONOSPACE)
            .size(12),
    )
    .height(Length::Fill)
    .width(Length::Fill);

    let content = column![header, stage, footer, markup]
        .spacing(12)
        .padding(12)
        .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

/// The button at its configured size with width/height captions
fn sized_button(style: &ButtonStyle) -> Element<'_, Message> {
    let background = hex_to_rgb(&style.background_color)
        .ok()
        .map(|rgb| Color::from_rgba8(rgb.r, rgb.g, rgb.b, style.background_alpha as f32));
    let text_color = parse_color(&style.color).unwrap_or(Color::WHITE);
    let border_color = parse_color(&style.border_color).unwrap_or(Color::TRANSPARENT);
    let border_width = style.border_width as f32;
    let radius = style.border_radius as f32;

    let face = container(
        text(&style.label)
            .size(style.font_size as f32)
            .color(text_color),
    )
    .center_x(Length::Fixed(style.width as f32))
    .center_y(Length::Fixed(style.height as f32))
    .style(move |_theme| container::Style {
        background: background.map(Background::Color),
        border: Border {
            color: border_color,
            width: border_width,
            radius: radius.into(),
        },
        ..Default::default()
    });

    let width_caption = text(format!("{}px", style.width))
        .size(11)
        .color(TEXT_SECONDARY);
    let height_caption = text(format!("{}px", style.height))
        .size(11)
        .color(TEXT_SECONDARY);

    column![
        width_caption,
        row![height_caption, face].spacing(6).align_y(Alignment::Center),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .into()
}

fn parse_color(hex: &str) -> Option<Color> {
    hex_to_rgb(hex).ok().map(|rgb| Color::from_rgb8(rgb.r, rgb.g, rgb.b))
}
