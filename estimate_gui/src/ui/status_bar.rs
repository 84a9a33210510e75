//! Toast notifications (bottom, above the tab bar)

use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Border, Color, Element, Length, Padding, Theme};

use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn color(self) -> Color {
        match self {
            ToastKind::Success => Color::from_rgb8(0x43, 0xA0, 0x47),
            ToastKind::Error => Color::from_rgb8(0xE5, 0x39, 0x35),
            ToastKind::Info => Color::from_rgb8(0x1E, 0x88, 0xE5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Render a toast with a dismiss button
pub fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let color = toast.kind.color();

    let content = row![
        text(&toast.message).size(13),
        Space::new().width(Length::Fill),
        button(text("✕").size(12))
            .on_press(Message::DismissToast)
            .padding(Padding::from([2, 6]))
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    container(content)
        .padding(Padding::from([8, 12]))
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            text_color: Some(Color::WHITE),
            background: Some(color.into()),
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
