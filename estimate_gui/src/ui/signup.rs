//! Signup screen

use iced::widget::{button, checkbox, column, row, text};
use iced::{Alignment, Element, Length, Padding};

use estimate_core::session::SignupForm;

use crate::Message;
use super::shared::widgets::{accent_card, card, gap, labeled_input, labeled_secret, screen_header, wide_button, MUTED};

pub fn view(form: &SignupForm) -> Element<'_, Message> {
    let banner = accent_card(
        column![
            text("Create Account").size(24),
            text("Join BuildCost to start estimating").size(13),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    );

    let login_link = row![
        text("Already have an account?").size(12).color(MUTED),
        button(text("Login").size(12))
            .on_press(Message::ShowLogin)
            .padding(Padding::from([0, 4]))
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let form_card = card(
        column![
            labeled_input("Full Name *", "John Doe", &form.full_name, Message::SignupNameChanged),
            labeled_input("Email *", "engineer@example.com", &form.email, Message::SignupEmailChanged),
            labeled_input("Company", "Optional", &form.company, Message::SignupCompanyChanged),
            labeled_secret("Password *", "Create a strong password", &form.password, Message::SignupPasswordChanged),
            labeled_secret(
                "Confirm Password *",
                "Re-enter your password",
                &form.confirm_password,
                Message::SignupConfirmChanged,
            ),
            checkbox(form.accept_terms)
                .label("I agree to the Terms & Conditions and Privacy Policy")
                .on_toggle(Message::TermsToggled)
                .text_size(12),
            gap(4),
            wide_button("Sign Up", Some(Message::SignupSubmit)),
            login_link,
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    );

    column![
        screen_header("", Some(Message::ShowLogin)),
        banner,
        gap(16),
        form_card,
    ]
    .padding(24)
    .width(Length::Fill)
    .into()
}
