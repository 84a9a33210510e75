//! Login screen
//!
//! Stubbed sign-in: any non-empty email/password pair is accepted.

use iced::widget::{button, checkbox, column, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use estimate_core::session::LoginForm;

use crate::Message;
use super::shared::widgets::{accent_card, card, gap, labeled_input, labeled_secret, wide_button, MUTED};

pub fn view(form: &LoginForm) -> Element<'_, Message> {
    let banner = accent_card(
        column![
            text("BuildCost").size(28),
            text("Your Digital Construction Assistant").size(13),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    );

    let options = row![
        checkbox(form.remember_me)
            .label("Remember me")
            .on_toggle(Message::RememberMeToggled)
            .text_size(12),
        Space::new().width(Length::Fill),
        button(text("Forgot password?").size(12))
            .on_press(Message::ForgotPassword)
            .padding(0)
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let signup_link = row![
        text("Don't have an account?").size(12).color(MUTED),
        button(text("Sign up").size(12))
            .on_press(Message::ShowSignup)
            .padding(Padding::from([0, 4]))
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let form_card = card(
        column![
            text("Welcome Back").size(20),
            gap(8),
            labeled_input("Email", "engineer@example.com", &form.email, Message::LoginEmailChanged),
            labeled_secret("Password", "Enter your password", &form.password, Message::LoginPasswordChanged),
            options,
            gap(4),
            wide_button("Login", Some(Message::LoginSubmit)),
            signup_link,
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    );

    column![banner, gap(16), form_card]
        .padding(24)
        .width(Length::Fill)
        .into()
}
