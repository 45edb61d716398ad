use iced::widget::{Button, Column, Container, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn backdrop_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.6, 0.25, 0.25),
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 6.0),
            blur_radius: 16.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        },
    }
}

/// Modal failure notice. Replaces the screen content until dismissed, so the
/// user has to acknowledge the message before acting again. The text shown is
/// exactly what the server (or the transport layer) reported.
pub fn view(message: &str) -> Element<'_, Message> {
    let card = Container::new(
        Column::new()
            .spacing(20)
            .padding(32)
            .align_items(Alignment::Center)
            .width(Length::Fixed(420.0))
            .push(Text::new("⚠️").font(EMOJI_FONT).size(40))
            .push(
                Text::new("Something went wrong")
                    .font(BOLD_FONT)
                    .size(20)
                    .style(TEXT_PRIMARY),
            )
            .push(
                Text::new(message)
                    .size(14)
                    .style(TEXT_SECONDARY)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
            )
            .push(
                Button::new(
                    Container::new(Text::new("Dismiss").font(BOLD_FONT).size(14))
                        .width(Length::Fill)
                        .center_x(),
                )
                .style(iced::theme::Button::Primary)
                .on_press(Message::DismissAlert)
                .padding(12)
                .width(Length::Fixed(140.0)),
            ),
    )
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(backdrop_appearance)))
        .into()
}
