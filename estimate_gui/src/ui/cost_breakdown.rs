//! Cost breakdown: pie chart of per-material cost plus rate editing
//!
//! Edits apply to a working [`RateSheet`](estimate_core::calculations::RateSheet)
//! so the chart and totals update as the user types. Recalculate commits
//! the sheet as a new project revision.

use iced::widget::{column, row, text, text_input, Canvas, Column};
use iced::{Alignment, Element, Length};

use estimate_core::calculations::breakdown::cost_shares;
use estimate_core::project::Project;
use estimate_core::units::Amount;

use crate::{Message, RateEditor, Screen};
use super::shared::pie_chart::{palette_color, PieChart};
use super::shared::widgets::{accent_card, card, screen_header, wide_button, ACCENT, DANGER, MUTED};

pub fn view<'a>(project: &'a Project, editor: &'a RateEditor) -> Element<'a, Message> {
    let lines = editor.sheet.lines();
    let shares = cost_shares(lines);

    let mut legend: Column<'_, Message> = column![].spacing(4);
    for (i, share) in shares.iter().enumerate() {
        legend = legend.push(
            row![
                text("■").size(14).color(palette_color(i)),
                text(share.label()).size(12).width(Length::Fill),
                text(share.cost_amount().to_string()).size(12).color(MUTED),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        );
    }

    let chart: Element<'_, Message> = Canvas::new(PieChart::new(shares))
        .width(Length::Fill)
        .height(Length::Fixed(240.0))
        .into();

    let distribution = card(
        column![text("Cost Distribution").size(16), chart, legend]
            .spacing(8)
            .align_x(Alignment::Center),
    );

    let total = accent_card(
        column![
            text("Total Cost").size(12),
            text(Amount(editor.sheet.total()).to_string()).size(30),
        ]
        .spacing(4),
    );

    let mut rates: Column<'_, Message> = column![text("Modify Material Rates").size(16)].spacing(10);
    for (index, line) in lines.iter().enumerate() {
        let raw = editor.inputs.get(index).map(String::as_str).unwrap_or_default();
        rates = rates.push(
            row![
                column![
                    text(&line.name).size(14),
                    text(format!("{} {}", line.quantity, line.unit)).size(11).color(MUTED),
                ]
                .width(Length::FillPortion(3)),
                text_input("Rate", raw)
                    .on_input(move |value| Message::RateChanged(index, value))
                    .padding(6)
                    .size(13)
                    .width(Length::FillPortion(2)),
                column![
                    text("Cost").size(11).color(MUTED),
                    text(line.cost_amount().to_string()).size(13).color(ACCENT),
                ]
                .align_x(Alignment::End)
                .width(Length::FillPortion(3)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }
    if let Some(error) = &editor.error {
        rates = rates.push(text(error).size(11).color(DANGER));
    }

    column![
        screen_header("Cost Breakdown", Some(Message::Navigate(Screen::Result))),
        text(&project.name).size(13).color(MUTED),
        distribution,
        total,
        card(rates),
        wide_button("Recalculate", editor.can_commit().then_some(Message::Recalculate)),
    ]
    .spacing(12)
    .into()
}
