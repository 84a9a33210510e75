//! Saved project list

use iced::widget::{button, column, row, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use estimate_core::workspace::Workspace;

use crate::{Message, Screen};
use super::home::project_row;
use super::shared::widgets::{gap, wide_button, MUTED};

pub fn view(workspace: &Workspace) -> Element<'_, Message> {
    let header = row![
        text("My Projects").size(20),
        Space::new().width(Length::Fill),
        button(text("+ New").size(12))
            .on_press(Message::Navigate(Screen::Input))
            .padding(Padding::from([4, 10]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    let mut list: Column<'_, Message> = column![header].spacing(10);

    if workspace.projects().is_empty() {
        list = list.push(
            column![
                gap(40),
                text("No projects yet").size(14).color(MUTED),
                wide_button("Create First Project", Some(Message::Navigate(Screen::Input))),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        );
    }

    for project in workspace.projects() {
        list = list.push(project_row(project));
    }

    list.into()
}
