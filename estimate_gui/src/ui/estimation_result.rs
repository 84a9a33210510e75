//! Results view for an estimate
//!
//! Shows:
//! - Project name, type, location and total
//! - Dimensions
//! - One row per material with quantity, rate, cost and share bar
//! - Breakdown, download, share and save actions

use iced::widget::{button, column, row, text, Column};
use iced::{Alignment, Element, Length, Padding};

use estimate_core::calculations::breakdown::cost_shares;
use estimate_core::project::Project;
use estimate_core::units::Amount;

use crate::{Message, Screen};
use super::shared::pie_chart::palette_color;
use super::shared::widgets::{accent_card, card, screen_header, share_bar, stat, wide_button, ACCENT, MUTED};

pub fn view(project: &Project) -> Element<'_, Message> {
    let summary = accent_card(
        column![
            text(&project.name).size(18),
            text(format!("{} • {}", project.project_type, project.location)).size(12),
            text("Total Estimated Cost").size(12),
            text(project.total_amount().to_string()).size(30),
        ]
        .spacing(4),
    );

    let dims = &project.dimensions;
    let mut dimension_row = row![
        stat("Length", format!("{}m", dims.length)),
        stat("Breadth", format!("{}m", dims.breadth)),
        stat("Height", format!("{}m", dims.height)),
    ]
    .spacing(8);
    if let Some(thickness) = dims.thickness {
        dimension_row = dimension_row.push(stat("Thickness", format!("{}m", thickness)));
    }
    let dimensions = card(column![text("Dimensions").size(16), dimension_row].spacing(8));

    let mut materials: Column<'_, Message> = column![text("Materials Required").size(16)].spacing(10);
    for (i, (line, share)) in project.materials.iter().zip(cost_shares(&project.materials)).enumerate() {
        materials = materials.push(
            column![
                row![
                    column![
                        text(&line.name).size(14),
                        text(format!("{} {} × {}", line.quantity, line.unit, Amount(line.rate)))
                            .size(11)
                            .color(MUTED),
                    ]
                    .width(Length::Fill),
                    text(line.cost_amount().to_string()).size(14).color(ACCENT),
                ]
                .align_y(Alignment::Center),
                share_bar(share.fraction, palette_color(i)),
            ]
            .spacing(4),
        );
    }

    let secondary = row![
        action("Download PDF", Message::DownloadReport),
        action("Share", Message::ShareReport),
    ]
    .spacing(8);

    let mut content = column![
        screen_header("Estimation Result", Some(Message::Navigate(Screen::Input))),
        summary,
        dimensions,
        card(materials),
        wide_button("View Cost Breakdown", Some(Message::ViewBreakdown)),
        secondary,
        wide_button("Save Project", Some(Message::SaveProject)),
    ]
    .spacing(12);

    if project.revision > 1 {
        content = content.push(
            text(format!("Revision {}", project.revision))
                .size(11)
                .color(MUTED),
        );
    }

    content.into()
}

fn action(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(13).width(Length::Fill).align_x(iced::alignment::Horizontal::Center))
        .on_press(message)
        .padding(Padding::from([8, 12]))
        .width(Length::Fill)
        .style(button::secondary)
        .into()
}
