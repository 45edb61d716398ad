use iced::widget::{Container, Row, Text};
use iced::{Element, Font, Length};

use crate::client::models::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Info => "ℹ️",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Success => iced::Color::from_rgb(0.2, 0.7, 0.4),
            LogLevel::Error => iced::Color::from_rgb(0.9, 0.3, 0.3),
            LogLevel::Info => iced::Color::from_rgb(0.2, 0.6, 1.0),
        }
    }
}

/// Notification bar under the screen content. Shows only the latest message;
/// the state machine clears it a couple of seconds after each push.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    if let Some(log) = messages.last() {
        let bg_color = log.color();
        Container::new(
            Row::new()
                .spacing(12)
                .push(
                    Text::new(log.emoji())
                        .font(Font::with_name("Segoe UI Emoji"))
                        .size(18)
                        .style(iced::Color::WHITE),
                )
                .push(Text::new(&log.message).size(16).style(iced::Color::WHITE)),
        )
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            move |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(iced::Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 3.0),
                    blur_radius: 10.0,
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            },
        )))
        .into()
    } else {
        iced::widget::Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}
