//! Home dashboard
//!
//! Quick actions, project count, total budget and the latest estimates.

use iced::widget::{button, column, row, text, Column};
use iced::{Alignment, Element, Length, Padding};

use estimate_core::project::Project;
use estimate_core::workspace::Workspace;

use crate::{Message, Screen};
use super::shared::pie_chart::palette_color;
use super::shared::widgets::{card, gap, tinted_card, wide_button, ACCENT, MUTED};

pub fn view(workspace: &Workspace) -> Element<'_, Message> {
    let title = column![
        text("BuildCost").size(26).color(ACCENT),
        text("Your Digital Construction Assistant").size(13).color(MUTED),
    ]
    .spacing(2);

    let actions = column![
        wide_button("+  New Estimate", Some(Message::Navigate(Screen::Input))),
        row![
            quick_action("My Projects", Screen::Projects),
            quick_action("Saved Bills", Screen::Bills),
        ]
        .spacing(8),
    ]
    .spacing(8);

    let totals = row![
        tinted_card(
            column![
                text("Total Projects").size(11),
                text(workspace.project_count().to_string()).size(22),
            ],
            palette_color(0),
        ),
        tinted_card(
            column![
                text("Total Budget").size(11),
                text(workspace.total_budget().thousands_label()).size(22),
            ],
            palette_color(2),
        ),
    ]
    .spacing(8);

    let mut recent: Column<'_, Message> = column![text("Recent Estimates").size(16)].spacing(8);
    if workspace.recent_projects().is_empty() {
        recent = recent.push(text("No projects yet").size(12).color(MUTED));
    }
    for project in workspace.recent_projects() {
        recent = recent.push(project_row(project));
    }

    column![title, gap(8), actions, totals, gap(4), recent]
        .spacing(12)
        .into()
}

fn quick_action(label: &str, screen: Screen) -> Element<'_, Message> {
    button(text(label).size(13).width(Length::Fill))
        .on_press(Message::Navigate(screen))
        .padding(Padding::from([10, 12]))
        .width(Length::Fill)
        .style(button::secondary)
        .into()
}

/// Summary row for one project; clicking opens its result.
pub fn project_row(project: &Project) -> Element<'_, Message> {
    let body = row![
        column![
            text(&project.name).size(14),
            text(format!("{} • {}", project.project_type, project.location))
                .size(11)
                .color(MUTED),
        ]
        .spacing(2)
        .width(Length::Fill),
        column![
            text(project.total_amount().to_string()).size(14).color(ACCENT),
            text(project.date_label()).size(11).color(MUTED),
        ]
        .spacing(2)
        .align_x(Alignment::End),
    ]
    .align_y(Alignment::Center);

    button(card(body))
        .on_press(Message::OpenProject(project.id))
        .padding(0)
        .style(button::text)
        .width(Length::Fill)
        .into()
}
