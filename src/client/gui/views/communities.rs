use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::HubAppState;
use crate::client::models::cards::CommunityCard;
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

fn community_item_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
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

fn sdg_tag_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(Color::from_rgb(0.1, 0.4, 0.25))),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn community_item(card: &CommunityCard) -> Element<'_, Message> {
    let meta = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Container::new(Text::new(&card.sdg_tag).font(BOLD_FONT).size(11))
                .padding([4, 8])
                .style(iced::theme::Container::Custom(Box::new(sdg_tag_appearance))),
        )
        .push(
            Text::new(&card.members_line)
                .size(12)
                .style(ACCENT_COLOR),
        );

    let info = Column::new()
        .spacing(6)
        .push(
            Text::new(&card.name)
                .font(BOLD_FONT)
                .size(16)
                .style(TEXT_PRIMARY),
        )
        .push(
            Text::new(&card.description)
                .size(12)
                .style(TEXT_SECONDARY),
        )
        .push(meta)
        .width(Length::Fill);

    let join_state = card.join.state();
    let mut join_button = Button::new(
        Container::new(
            Text::new(&join_state.label)
                .font(BOLD_FONT)
                .size(12),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .padding(10)
    .width(Length::Fixed(140.0));
    if join_state.enabled {
        join_button = join_button.on_press(Message::JoinCommunity {
            community_id: card.community_id.clone(),
        });
    }

    Container::new(
        Row::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(info)
            .push(join_button),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        community_item_appearance,
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

    let create_button = Button::new(
        Container::new(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("➕").font(EMOJI_FONT).size(14))
                .push(Text::new("New").font(BOLD_FONT).size(14)),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .on_press(Message::OpenCreateCommunity)
    .padding(12)
    .width(Length::Fixed(100.0));

    let title_section = Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("👥").font(EMOJI_FONT).size(24))
                .push(
                    Text::new("Communities")
                        .font(BOLD_FONT)
                        .size(24)
                        .style(TEXT_PRIMARY),
                ),
        )
        .push(
            Text::new("Join impact communities working on the goals")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let header_row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(back_button)
        .push(Container::new(title_section).width(Length::Fill).center_x())
        .push(create_button);

    let header = Container::new(header_row)
        .padding([20, 24])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(header_appearance)));

    let content = if state.loading_communities {
        Container::new(
            Column::new()
                .spacing(16)
                .align_items(Alignment::Center)
                .push(Text::new("⏳").font(EMOJI_FONT).size(32).style(TEXT_SECONDARY))
                .push(
                    Text::new("Loading communities...")
                        .font(BOLD_FONT)
                        .size(16)
                        .style(TEXT_SECONDARY),
                ),
        )
        .width(Length::Fill)
        .center_x()
        .padding(40)
    } else if state.communities.is_empty() {
        Container::new(
            Column::new()
                .spacing(16)
                .align_items(Alignment::Center)
                .push(Text::new("👥").font(EMOJI_FONT).size(48).style(TEXT_SECONDARY))
                .push(
                    Text::new("No communities yet")
                        .font(BOLD_FONT)
                        .size(20)
                        .style(TEXT_SECONDARY),
                )
                .push(
                    Text::new("Be the first: create a community around a goal you care about.")
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
        let mut communities_column = Column::new().spacing(12);
        for card in &state.communities {
            communities_column = communities_column.push(community_item(card));
        }

        Container::new(
            Scrollable::new(communities_column)
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
