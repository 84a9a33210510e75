//! Bills & Documents
//!
//! Two tabs (bills, other documents) with counts, filtered by a search box
//! that matches the title or the owning project's name.

use iced::widget::{button, column, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use estimate_core::documents::{Document, DocumentKind};
use estimate_core::workspace::Workspace;

use crate::Message;
use super::shared::widgets::{card, gap, ACCENT, MUTED};

pub fn view<'a>(workspace: &'a Workspace, kind: DocumentKind, query: &'a str) -> Element<'a, Message> {
    let header = row![
        text("Bills & Documents").size(20),
        Space::new().width(Length::Fill),
        button(text("Upload").size(12))
            .on_press(Message::UploadDocument)
            .padding(Padding::from([4, 10]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    let search = text_input("Search by title or project...", query)
        .on_input(Message::DocumentSearchChanged)
        .padding(8)
        .size(13);

    let mut tabs = row![].spacing(4);
    for tab in DocumentKind::ALL {
        let count = workspace.search_documents(tab, query).len();
        let style = if tab == kind { button::primary } else { button::secondary };
        tabs = tabs.push(
            button(
                text(format!("{} ({})", tab, count))
                    .size(12)
                    .width(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Center),
            )
            .on_press(Message::DocumentKindSelected(tab))
            .padding(Padding::from([6, 8]))
            .width(Length::Fill)
            .style(style),
        );
    }

    let docs = workspace.search_documents(kind, query);
    let mut list: Column<'_, Message> = column![].spacing(8);
    if docs.is_empty() {
        list = list.push(
            column![
                gap(24),
                text(format!("No {} found", kind.display_name().to_lowercase()))
                    .size(13)
                    .color(MUTED),
            ]
            .align_x(Alignment::Center)
            .width(Length::Fill),
        );
    }
    for doc in docs {
        list = list.push(document_row(workspace, doc));
    }

    column![header, search, tabs, list].spacing(12).into()
}

fn document_row<'a>(workspace: &'a Workspace, doc: &'a Document) -> Element<'a, Message> {
    let icon = if doc.is_pdf() { "DOC" } else { "IMG" };
    card(
        row![
            text(icon).size(11).color(ACCENT).width(Length::Fixed(32.0)),
            column![
                text(&doc.title).size(14),
                text(workspace.project_name(&doc.project_id)).size(11).color(MUTED),
                text(doc.date_label()).size(11).color(MUTED),
            ]
            .spacing(2)
            .width(Length::Fill),
            text(&doc.file_type).size(11).color(ACCENT),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
}
