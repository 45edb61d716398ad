use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::HubAppState;
use crate::client::models::cards::{UserCard, SENT_MARKER};
use crate::client::models::messages::Message;

// Color palette consistent with the other views
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3);
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

fn member_item_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
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

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        border: iced::Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn member_item(card: &UserCard) -> Element<'_, Message> {
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
        .push(
            Text::new(&card.stakeholder_label)
                .size(12)
                .style(ACCENT_COLOR),
        )
        .push(
            Text::new(format!("Focus: {}", card.focus))
                .size(12)
                .style(TEXT_SECONDARY),
        );

    let connect_state = card.connect.state();
    // The button settles green once the request went through.
    let button_style = if connect_state.has_marker(SENT_MARKER) {
        iced::theme::Button::Positive
    } else {
        iced::theme::Button::Primary
    };
    let mut connect_button = Button::new(
        Container::new(
            Text::new(&connect_state.label)
                .font(BOLD_FONT)
                .size(12),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(button_style)
    .padding(10)
    .width(Length::Fixed(120.0));
    if connect_state.enabled {
        connect_button = connect_button.on_press(Message::SendConnectRequest {
            member_id: card.member_id.clone(),
        });
    }

    Container::new(
        Row::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(avatar)
            .push(info)
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(connect_button),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        member_item_appearance,
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
                .push(Text::new("👤").font(EMOJI_FONT).size(24))
                .push(
                    Text::new("Members")
                        .font(BOLD_FONT)
                        .size(24)
                        .style(TEXT_PRIMARY),
                ),
        )
        .push(
            Text::new("Browse stakeholders and send connection requests")
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

    let search_field = Container::new(
        TextInput::new("Search by name, type or focus...", &state.members_query)
            .on_input(Message::MembersSearchQueryChanged)
            .padding(12)
            .size(14)
            .width(Length::Fill),
    )
    .padding([0, 24])
    .style(iced::theme::Container::Custom(Box::new(input_appearance)));

    let visible: Vec<&UserCard> = state
        .members
        .iter()
        .filter(|card| card.matches(&state.members_query))
        .collect();

    let content = if state.loading_members {
        Container::new(
            Column::new()
                .spacing(16)
                .align_items(Alignment::Center)
                .push(Text::new("⏳").font(EMOJI_FONT).size(32).style(TEXT_SECONDARY))
                .push(
                    Text::new("Loading members...")
                        .font(BOLD_FONT)
                        .size(16)
                        .style(TEXT_SECONDARY),
                ),
        )
        .width(Length::Fill)
        .center_x()
        .padding(40)
    } else if visible.is_empty() {
        Container::new(
            Column::new()
                .spacing(16)
                .align_items(Alignment::Center)
                .push(Text::new("👤").font(EMOJI_FONT).size(48).style(TEXT_SECONDARY))
                .push(
                    Text::new("No members found")
                        .font(BOLD_FONT)
                        .size(20)
                        .style(TEXT_SECONDARY),
                )
                .push(
                    Text::new("Try a different search or come back later.")
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
        let mut members_column = Column::new().spacing(12);
        for card in visible {
            members_column = members_column.push(member_item(card));
        }

        Container::new(
            Scrollable::new(members_column)
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
        .push(search_field)
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
