use iced::widget::{Button, Column, Container, PickList, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::HubAppState;
use crate::client::models::entities::StakeholderType;
use crate::client::models::messages::Message;

// Consistent color palette with main_actions and the list views
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26); // Input background
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3); // Green accent
const ERROR_COLOR: Color = Color::from_rgb(0.9, 0.3, 0.3);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(state: &HubAppState) -> Element<Message> {
    let email = &state.email;
    let password = &state.password;
    let is_login = state.is_login;
    let loading = state.loading;
    let show_password = state.show_password;

    // Validation
    let email_valid = email.contains('@') && email.len() >= 5;
    let password_valid = !password.is_empty() && password.len() >= 6;
    let register_valid = is_login
        || (!state.display_name.trim().is_empty() && state.stakeholder_type.is_some());
    let submit_enabled = email_valid && password_valid && register_valid && !loading;

    // Top logger bar
    let logger_bar = if !state.logger.is_empty() {
        Container::new(logger_view(&state.logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
    } else {
        Container::new(Space::new(Length::Fill, Length::Fixed(0.0))).width(Length::Fill)
    };

    // Title
    let title = Text::new("SDG Hub")
        .size(42)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Stakeholder Network Platform")
        .size(16)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    // Tab system
    let login_tab = if is_login {
        Button::new(
            Container::new(
                Text::new("Login")
                    .font(BOLD_FONT)
                    .size(16)
                    .horizontal_alignment(iced::alignment::Horizontal::Center)
                    .style(TEXT_PRIMARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding([12, 16])
    } else {
        Button::new(
            Container::new(
                Text::new("Login")
                    .size(16)
                    .horizontal_alignment(iced::alignment::Horizontal::Center)
                    .style(TEXT_SECONDARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::ToggleLoginRegister)
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding([12, 16])
    };

    let register_tab = if !is_login {
        Button::new(
            Container::new(
                Text::new("Register")
                    .font(BOLD_FONT)
                    .size(16)
                    .horizontal_alignment(iced::alignment::Horizontal::Center)
                    .style(TEXT_PRIMARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding([12, 16])
    } else {
        Button::new(
            Container::new(
                Text::new("Register")
                    .size(16)
                    .horizontal_alignment(iced::alignment::Horizontal::Center)
                    .style(TEXT_SECONDARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::ToggleLoginRegister)
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding([12, 16])
    };

    let tabs = Row::new().spacing(2).push(login_tab).push(register_tab);

    // Input fields with labels
    let email_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("✉️").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new("Email").size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(
                TextInput::new("Enter your email", email)
                    .on_input(Message::EmailChanged)
                    .on_submit(if submit_enabled {
                        Message::SubmitLoginOrRegister
                    } else {
                        Message::NoOp
                    })
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    let password_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🔒").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new("Password").size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(
                Row::new()
                    .align_items(Alignment::Center)
                    .push(
                        TextInput::new("Enter your password", password)
                            .on_input(Message::PasswordChanged)
                            .on_submit(if submit_enabled {
                                Message::SubmitLoginOrRegister
                            } else {
                                Message::NoOp
                            })
                            .secure(!show_password)
                            .width(Length::Fill)
                            .padding(12)
                            .size(14),
                    )
                    .push(
                        Button::new(
                            Text::new(if show_password { "🙈" } else { "👁️" })
                                .font(EMOJI_FONT)
                                .size(16),
                        )
                        .on_press(Message::ToggleShowPassword)
                        .style(iced::theme::Button::Text)
                        .padding([8, 12]),
                    ),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // Registration-only fields
    let register_fields: Element<Message> = if is_login {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    } else {
        Column::new()
            .spacing(24)
            .push(
                Column::new()
                    .spacing(8)
                    .push(
                        Row::new()
                            .spacing(8)
                            .align_items(Alignment::Center)
                            .push(Text::new("👤").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                            .push(Text::new("Display Name").size(14).style(TEXT_SECONDARY)),
                    )
                    .push(
                        Container::new(
                            TextInput::new("Organization or full name", &state.display_name)
                                .on_input(Message::DisplayNameChanged)
                                .width(Length::Fill)
                                .padding(12)
                                .size(14),
                        )
                        .style(iced::theme::Container::Custom(Box::new(input_appearance))),
                    ),
            )
            .push(
                Column::new()
                    .spacing(8)
                    .push(
                        Row::new()
                            .spacing(8)
                            .align_items(Alignment::Center)
                            .push(Text::new("🏛️").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                            .push(Text::new("Stakeholder Type").size(14).style(TEXT_SECONDARY)),
                    )
                    .push(
                        PickList::new(
                            &StakeholderType::ALL[..],
                            state.stakeholder_type,
                            Message::StakeholderPicked,
                        )
                        .placeholder("Select your type")
                        .padding(12)
                        .width(Length::Fill),
                    ),
            )
            .into()
    };

    // Validation indicators
    let validation_indicators = Column::new()
        .spacing(4)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(
                    Text::new(if email_valid { "✅" } else { "❌" })
                        .font(EMOJI_FONT)
                        .size(12),
                )
                .push(
                    Text::new("Email address")
                        .size(12)
                        .style(if email_valid { ACCENT_COLOR } else { TEXT_SECONDARY }),
                ),
        )
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(
                    Text::new(if password_valid { "✅" } else { "❌" })
                        .font(EMOJI_FONT)
                        .size(12),
                )
                .push(
                    Text::new("Password (6+ characters)")
                        .size(12)
                        .style(if password_valid { ACCENT_COLOR } else { TEXT_SECONDARY }),
                ),
        );

    // Server-side failures land here, e.g. wrong password or taken email.
    let error_line: Element<Message> = if let Some(error) = &state.error_message {
        Container::new(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("⚠️").font(EMOJI_FONT).size(14))
                .push(Text::new(error).size(13).style(ERROR_COLOR)),
        )
        .width(Length::Fill)
        .center_x()
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    // Submit button
    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(
                        Text::new(if is_login { "🚀" } else { "✨" })
                            .font(EMOJI_FONT)
                            .size(16),
                    )
                    .push(
                        Text::new(if is_login { "Sign In" } else { "Create Account" })
                            .font(BOLD_FONT)
                            .size(16)
                            .style(TEXT_PRIMARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitLoginOrRegister)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(16)
    } else {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new(if loading {
                            "Signing in..."
                        } else if is_login {
                            "Sign In"
                        } else {
                            "Create Account"
                        })
                        .size(16)
                        .style(TEXT_SECONDARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(16)
    };

    // Loading indicator
    let loading_element: Element<Message> = if loading {
        Container::new(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                .push(
                    Text::new("Contacting the hub...")
                        .size(14)
                        .style(ACCENT_COLOR),
                ),
        )
        .width(Length::Fill)
        .center_x()
        .padding(8)
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    // Main card content
    let card_content = Column::new()
        .width(Length::Fixed(420.0))
        .spacing(24)
        .padding(32)
        .align_items(Alignment::Center)
        .push(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(title)
                .push(subtitle),
        )
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(tabs)
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(email_field)
        .push(password_field)
        .push(register_fields)
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(validation_indicators)
        .push(error_line)
        .push(submit_button)
        .push(loading_element);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .center_x()
        .center_y();

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(logger_bar)
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y(),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
