use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::HubAppState;
use crate::client::models::cards::RequestCard;
use crate::client::models::messages::{ConnectionDecision, Message};

// Color palette consistent with the other views
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

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

fn header_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

fn request_item_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.2, 0.2, 0.3),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

fn empty_state_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
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

fn avatar_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        border: iced::Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn request_item(card: &RequestCard) -> Element<'_, Message> {
    let avatar = Container::new(
        Text::new(&card.initial)
            .font(BOLD_FONT)
            .size(20)
            .style(TEXT_PRIMARY),
    )
    .padding(14)
    .style(iced::theme::Container::Custom(Box::new(avatar_appearance)));

    let info = Column::new()
        .spacing(4)
        .push(
            Text::new(&card.name)
                .font(BOLD_FONT)
                .size(16)
                .style(TEXT_PRIMARY),
        )
        .push(Text::new(&card.headline).size(12).style(TEXT_SECONDARY));

    let reject_state = card.reject.state();
    let mut reject_button = Button::new(
        Container::new(
            Text::new(&reject_state.label)
                .font(BOLD_FONT)
                .size(12),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(iced::theme::Button::Destructive)
    .padding(10)
    .width(Length::Fixed(100.0));
    if reject_state.enabled {
        reject_button = reject_button.on_press(Message::DecideConnection {
            requester_id: card.requester_id.clone(),
            decision: ConnectionDecision::Reject,
        });
    }

    let accept_state = card.accept.state();
    let mut accept_button = Button::new(
        Container::new(
            Text::new(&accept_state.label)
                .font(BOLD_FONT)
                .size(12),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .padding(10)
    .width(Length::Fixed(100.0));
    if accept_state.enabled {
        accept_button = accept_button.on_press(Message::DecideConnection {
            requester_id: card.requester_id.clone(),
            decision: ConnectionDecision::Accept,
        });
    }

    Container::new(
        Row::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(avatar)
            .push(info)
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(Row::new().spacing(8).push(reject_button).push(accept_button)),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        request_item_appearance,
    )))
    .into()
}

pub fn view(state: &HubAppState) -> Element<Message> {
    let logger_bar = if !state.logger.is_empty() {
        Container::new(logger_view(&state.logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
    } else {
        Container::new(Space::new(Length::Fill, Length::Fixed(0.0))).width(Length::Fill)
    };

    let back_button = Button::new(
        Container::new(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("←").font(EMOJI_FONT).size(18))
                .push(Text::new("Back").font(BOLD_FONT).size(14)),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(iced::theme::Button::Secondary)
    .on_press(Message::OpenMainActions)
    .padding(12)
    .width(Length::Fixed(100.0));

    let title_section = Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📨").font(EMOJI_FONT).size(24))
                .push(
                    Text::new("Connection Requests")
                        .font(BOLD_FONT)
                        .size(24)
                        .style(TEXT_PRIMARY),
                ),
        )
        .push(
            Text::new("Accept or ignore members who want to connect")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let header_row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(back_button)
        .push(Container::new(title_section).width(Length::Fill).center_x())
        .push(Space::new(Length::Fixed(100.0), Length::Fixed(0.0))); // Balance space

    let header = Container::new(header_row)
        .padding([20, 24])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(header_appearance)));

    let content = if state.loading_requests {
        Container::new(
            Column::new()
                .spacing(16)
                .align_items(Alignment::Center)
                .push(Text::new("⏳").font(EMOJI_FONT).size(32).style(TEXT_SECONDARY))
                .push(
                    Text::new("Loading connection requests...")
                        .font(BOLD_FONT)
                        .size(16)
                        .style(TEXT_SECONDARY),
                ),
        )
        .width(Length::Fill)
        .center_x()
        .padding(40)
    } else if !state.requests_section_visible {
        // The section collapses once the last card is handled.
        Container::new(
            Column::new()
                .spacing(16)
                .align_items(Alignment::Center)
                .push(Text::new("📨").font(EMOJI_FONT).size(48).style(TEXT_SECONDARY))
                .push(
                    Text::new("No pending requests")
                        .font(BOLD_FONT)
                        .size(20)
                        .style(TEXT_SECONDARY),
                )
                .push(
                    Text::new("When another member asks to connect, the request shows up here.")
                        .size(14)
                        .style(TEXT_SECONDARY),
                ),
        )
        .width(Length::Fill)
        .center_x()
        .padding(40)
        .style(iced::theme::Container::Custom(Box::new(
            empty_state_appearance,
        )))
    } else {
        let mut requests_column = Column::new().spacing(12);
        for card in &state.requests {
            requests_column = requests_column.push(request_item(card));
        }

        Container::new(
            Scrollable::new(requests_column)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0, 24])
    };

    let main_content = Column::new()
        .push(header)
        .push(Space::new(Length::Fill, Length::Fixed(16.0)))
        .push(content)
        .push(Space::new(Length::Fill, Length::Fixed(24.0)))
        .width(Length::Fill)
        .height(Length::Fill);

    let final_content = Column::new()
        .push(logger_bar)
        .push(main_content)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(final_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
