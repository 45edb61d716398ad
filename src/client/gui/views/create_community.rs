use iced::widget::{Button, Column, Container, PickList, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::HubAppState;
use crate::client::models::messages::Message;

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

// The 17 UN Sustainable Development Goals a community can target.
const SDG_GOALS: [u8; 17] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17];

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
        border: iced::Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn labeled_field<'a>(
    icon: &'a str,
    label: &'a str,
    input: Element<'a, Message>,
) -> Column<'a, Message> {
    Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new(icon).font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new(label).size(14).style(TEXT_SECONDARY)),
        )
        .push(input)
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
    .on_press(Message::OpenCommunities)
    .padding(12)
    .width(Length::Fixed(100.0));

    let title_section = Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("➕").font(EMOJI_FONT).size(24))
                .push(
                    Text::new("Create Community")
                        .font(BOLD_FONT)
                        .size(24)
                        .style(TEXT_PRIMARY),
                ),
        )
        .push(
            Text::new("Start a community around one of the goals")
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

    let name_field = labeled_field(
        "🏷️",
        "Community Name",
        Container::new(
            TextInput::new("Enter community name", &state.community_name)
                .on_input(Message::CommunityNameChanged)
                .width(Length::Fill)
                .padding(12)
                .size(14),
        )
        .style(iced::theme::Container::Custom(Box::new(input_appearance)))
        .into(),
    );

    let description_field = labeled_field(
        "📝",
        "Description",
        Container::new(
            TextInput::new("What will this community work on?", &state.community_description)
                .on_input(Message::CommunityDescriptionChanged)
                .width(Length::Fill)
                .padding(12)
                .size(14),
        )
        .style(iced::theme::Container::Custom(Box::new(input_appearance)))
        .into(),
    );

    let sdg_field = labeled_field(
        "🎯",
        "SDG Goal",
        Container::new(
            PickList::new(&SDG_GOALS[..], state.community_sdg, Message::CommunitySdgPicked)
                .placeholder("Pick a goal (1-17)")
                .padding(12)
                .width(Length::Fill),
        )
        .into(),
    );

    let control_state = state.create_control.state();
    let form_valid = !state.community_name.trim().is_empty() && state.community_sdg.is_some();
    let submit_enabled = control_state.enabled && form_valid;

    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("🚀").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new(&control_state.label)
                            .font(BOLD_FONT)
                            .size(16)
                            .style(TEXT_PRIMARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitCreateCommunity)
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
                        Text::new(&control_state.label)
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

    let form_card = Container::new(
        Column::new()
            .spacing(20)
            .padding(24)
            .push(name_field)
            .push(description_field)
            .push(sdg_field)
            .push(submit_button),
    )
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let content = Container::new(
        Scrollable::new(
            Column::new()
                .spacing(0)
                .padding([0, 24])
                .push(form_card),
        )
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

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
