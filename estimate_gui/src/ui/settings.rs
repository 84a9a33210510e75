//! Settings screen
//!
//! Dark mode, display currency, the default material rate table and
//! backup/restore actions. Rates shown here are the fixed catalog values.

use iced::widget::{button, column, pick_list, row, text, toggler, Column};
use iced::{Alignment, Element, Length, Padding};

use estimate_core::materials::MaterialSpec;
use estimate_core::settings::{AppSettings, Currency};
use estimate_core::units::Amount;

use crate::Message;
use super::shared::widgets::{card, MUTED};

pub fn view(settings: &AppSettings) -> Element<'_, Message> {
    let appearance = card(
        row![
            column![
                text("Dark Mode").size(14),
                text("Switch to dark theme").size(11).color(MUTED),
            ]
            .width(Length::Fill),
            toggler(settings.theme.is_dark()).on_toggle(Message::DarkModeToggled),
        ]
        .align_y(Alignment::Center),
    );

    let currency = card(
        column![
            text("Currency").size(14),
            text("Select your preferred currency").size(11).color(MUTED),
            pick_list(&Currency::ALL[..], Some(settings.currency), Message::CurrencySelected)
                .width(Length::Fill)
                .padding(8)
                .text_size(13),
        ]
        .spacing(6),
    );

    let mut rates: Column<'_, Message> = column![
        text("Material Rates").size(14),
        text("Default material rates").size(11).color(MUTED),
    ]
    .spacing(6);
    for spec in MaterialSpec::catalog() {
        rates = rates.push(
            row![
                column![
                    text(spec.name()).size(13),
                    text(format!("per {}", spec.unit)).size(11).color(MUTED),
                ]
                .width(Length::Fill),
                text(Amount(spec.rate).to_string()).size(13),
            ]
            .align_y(Alignment::Center),
        );
    }

    let data = card(
        column![
            text("Data Management").size(14),
            text("Backup or restore your data").size(11).color(MUTED),
            row![
                data_button("Backup Data", Message::BackupData),
                data_button("Restore Data", Message::RestoreData),
            ]
            .spacing(8),
        ]
        .spacing(6),
    );

    let about = card(
        column![
            text(format!("BuildCost v{}", env!("CARGO_PKG_VERSION"))).size(14),
            text("Your Digital Construction Assistant").size(11).color(MUTED),
        ]
        .spacing(2)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    );

    column![
        text("Settings").size(20),
        appearance,
        currency,
        card(rates),
        data,
        about,
    ]
    .spacing(12)
    .into()
}

fn data_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(12).width(Length::Fill).align_x(iced::alignment::Horizontal::Center))
        .on_press(message)
        .padding(Padding::from([8, 12]))
        .width(Length::Fill)
        .style(button::secondary)
        .into()
}
