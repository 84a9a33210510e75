//! Onboarding slides shown before sign-in.

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length, Padding};

use crate::Message;
use super::shared::pie_chart::palette_color;
use super::shared::widgets::{tinted_card, wide_button, MUTED};

pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SLIDES: [Slide; 4] = [
    Slide {
        title: "Welcome to BuildCost",
        description: "Your all-in-one digital construction assistant for estimating costs and managing projects",
    },
    Slide {
        title: "Estimate Materials",
        description: "Calculate required quantities and costs for cement, sand, steel, bricks, and more in seconds",
    },
    Slide {
        title: "Manage Projects",
        description: "Save all your estimates, track project costs, and access them anytime, anywhere",
    },
    Slide {
        title: "Organize Documents",
        description: "Store bills, invoices, and documents in one secure place, linked to your projects",
    },
];

/// Render slide `index`
pub fn view(index: usize) -> Element<'static, Message> {
    let index = index.min(SLIDES.len() - 1);
    let slide = &SLIDES[index];
    let is_last = index + 1 == SLIDES.len();

    let badge = tinted_card(
        text(format!("{}", index + 1))
            .size(40)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        palette_color(index),
    );

    // Progress dots
    let mut dots = row![].spacing(6);
    for i in 0..SLIDES.len() {
        let color = if i == index { palette_color(index) } else { Color::from_rgb(0.8, 0.8, 0.8) };
        dots = dots.push(text("●").size(12).color(color));
    }

    let skip = button(text("Skip").size(13).color(MUTED))
        .on_press(Message::OnboardingSkip)
        .padding(Padding::from([4, 8]))
        .style(button::text);

    let next_label = if is_last { "Get Started" } else { "Next" };

    let content = column![
        row![Space::new().width(Length::Fill), skip],
        Space::new().height(Length::Fill),
        container(badge).width(Length::Fixed(120.0)),
        Space::new().height(24),
        text(slide.title).size(24),
        Space::new().height(8),
        text(slide.description)
            .size(14)
            .color(MUTED)
            .align_x(Horizontal::Center),
        Space::new().height(24),
        dots,
        Space::new().height(Length::Fill),
        wide_button(next_label, Some(Message::OnboardingNext)),
    ]
    .align_x(Alignment::Center)
    .padding(24)
    .height(Length::Fill);

    content.into()
}
