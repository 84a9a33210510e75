//! Small layout helpers shared by the screens.

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text, text_input, Button, Space};
use iced::{Alignment, Border, Color, Element, Length, Padding, Theme};

use crate::Message;

/// Brand blue (#1E88E5)
pub const ACCENT: Color = Color::from_rgb(30.0 / 255.0, 136.0 / 255.0, 229.0 / 255.0);

/// Secondary text
pub const MUTED: [f32; 3] = [0.5, 0.5, 0.5];

/// Error text
pub const DANGER: [f32; 3] = [0.8, 0.2, 0.2];

/// Screen title with an optional back button.
pub fn screen_header(title: &str, back: Option<Message>) -> Element<'_, Message> {
    let mut header = row![].spacing(8).align_y(Alignment::Center);
    if let Some(message) = back {
        header = header.push(
            button(text("←").size(18))
                .on_press(message)
                .padding(Padding::from([2, 8]))
                .style(button::text),
        );
    }
    header.push(text(title).size(20)).into()
}

/// Bordered content block.
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

/// Solid brand-colored block with white text, for headline figures.
pub fn accent_card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    tinted_card(content, ACCENT)
}

pub fn tinted_card<'a>(content: impl Into<Element<'a, Message>>, color: Color) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            text_color: Some(Color::WHITE),
            background: Some(color.into()),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Label above a text input.
pub fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label).size(12),
        text_input(placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(8)
            .size(14),
    ]
    .spacing(4)
    .into()
}

/// Same as [`labeled_input`] with the characters hidden.
pub fn labeled_secret<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label).size(12),
        text_input(placeholder, value)
            .on_input(on_change)
            .secure(true)
            .width(Length::Fill)
            .padding(8)
            .size(14),
    ]
    .spacing(4)
    .into()
}

/// Full-width call to action. Disabled when `on_press` is `None`.
pub fn wide_button(label: &str, on_press: Option<Message>) -> Button<'_, Message> {
    button(
        text(label)
            .size(14)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe(on_press)
    .padding(Padding::from([10, 16]))
    .width(Length::Fill)
    .style(button::primary)
}

/// Two-line label/value block used in grids.
pub fn stat<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![text(label).size(11).color(MUTED), text(value).size(14)]
        .spacing(2)
        .width(Length::Fill)
        .into()
}

/// Thin horizontal bar filled to `fraction` (0..=1).
pub fn share_bar<'a>(fraction: f64, color: Color) -> Element<'a, Message> {
    let filled = (fraction.clamp(0.0, 1.0) * 1000.0).round() as u16;
    let track = Color::from_rgb(0.88, 0.88, 0.88);

    let mut bar = row![].width(Length::Fill);
    if filled > 0 {
        bar = bar.push(bar_segment(filled, color));
    }
    if filled < 1000 {
        bar = bar.push(bar_segment(1000 - filled, track));
    }
    bar.into()
}

fn bar_segment<'a>(portion: u16, fill: Color) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::FillPortion(portion))
        .height(Length::Fixed(6.0))
        .style(move |_theme: &Theme| container::Style {
            background: Some(fill.into()),
            border: Border {
                radius: 3.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

pub fn gap(height: u16) -> Space {
    Space::new().height(Length::Fixed(f32::from(height)))
}
