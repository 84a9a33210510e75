//! Bottom navigation bar
//!
//! Five tabs. The Estimate tab stays highlighted while on the input,
//! result or breakdown screens.

use iced::alignment::Horizontal;
use iced::widget::{button, container, row, text};
use iced::{Element, Length, Padding};

use crate::{Message, Screen};

const TABS: [(&str, Screen); 5] = [
    ("Home", Screen::Home),
    ("Estimate", Screen::Input),
    ("Projects", Screen::Projects),
    ("Bills", Screen::Bills),
    ("Settings", Screen::Settings),
];

/// Which tab a screen belongs to
fn tab_of(screen: Screen) -> Screen {
    match screen {
        Screen::Result | Screen::Breakdown => Screen::Input,
        other => other,
    }
}

pub fn view_nav_bar(current: Screen) -> Element<'static, Message> {
    let active = tab_of(current);
    let mut bar = row![].spacing(2);

    for (label, screen) in TABS {
        let style = if screen == active { button::primary } else { button::text };
        bar = bar.push(
            button(text(label).size(11).width(Length::Fill).align_x(Horizontal::Center))
                .on_press(Message::Navigate(screen))
                .padding(Padding::from([10, 4]))
                .width(Length::Fill)
                .style(style),
        );
    }

    container(bar)
        .padding(4)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tab_covers_result_screens() {
        assert_eq!(tab_of(Screen::Breakdown), Screen::Input);
        assert_eq!(tab_of(Screen::Result), Screen::Input);
        assert_eq!(tab_of(Screen::Bills), Screen::Bills);
    }
}
