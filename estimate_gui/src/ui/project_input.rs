//! New Estimate form
//!
//! Displays fields for project name/type, the four dimensions, material
//! checkboxes (with their default rates) and location. Calculate stays
//! disabled until length, breadth and height have text and at least one
//! material is ticked.

use iced::widget::{checkbox, column, pick_list, row, text, Column};
use iced::{Alignment, Element, Length};

use estimate_core::materials::Material;
use estimate_core::project::ProjectType;
use estimate_core::units::Amount;

use crate::draft::EstimateDraft;
use crate::{Message, Screen};
use super::shared::widgets::{card, labeled_input, screen_header, wide_button, MUTED};

pub fn view(draft: &EstimateDraft) -> Element<'_, Message> {
    let details = card(
        column![
            labeled_input(
                "Project Name",
                "e.g., Residential Building",
                &draft.details.name,
                Message::ProjectNameChanged,
            ),
            column![
                text("Project Type").size(12),
                pick_list(
                    &ProjectType::ALL[..],
                    Some(draft.details.project_type),
                    Message::ProjectTypeSelected,
                )
                .width(Length::Fill)
                .padding(8)
                .text_size(14),
            ]
            .spacing(4),
        ]
        .spacing(10),
    );

    let dims = &draft.dimensions;
    let dimensions = card(
        column![
            text("Dimensions").size(16),
            row![
                labeled_input("Length (m)", "20", &dims.length, Message::LengthChanged),
                labeled_input("Breadth (m)", "15", &dims.breadth, Message::BreadthChanged),
            ]
            .spacing(8),
            row![
                labeled_input("Height (m)", "3", &dims.height, Message::HeightChanged),
                labeled_input("Thickness (m)", "0.23", &dims.thickness, Message::ThicknessChanged),
            ]
            .spacing(8),
        ]
        .spacing(10),
    );

    let mut materials: Column<'_, Message> = column![text("Select Materials").size(16)].spacing(8);
    for material in Material::ALL {
        let spec = material.spec();
        materials = materials.push(
            row![
                checkbox(draft.is_selected(material))
                    .label(material.display_name())
                    .on_toggle(move |on| Message::MaterialToggled(material, on))
                    .text_size(14)
                    .width(Length::Fill),
                text(format!("{}/{}", Amount(spec.rate), spec.unit)).size(12).color(MUTED),
            ]
            .align_y(Alignment::Center),
        );
    }

    let location = labeled_input("Location", "e.g., Mumbai", &draft.details.location, Message::LocationChanged);

    let calculate = wide_button(
        "Calculate Estimate",
        draft.is_ready().then_some(Message::CalculateEstimate),
    );

    column![
        screen_header("New Estimate", Some(Message::Navigate(Screen::Home))),
        details,
        dimensions,
        card(materials),
        location,
        calculate,
    ]
    .spacing(12)
    .into()
}
