use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::config::ClientConfig;
use crate::client::models::app_state::{AppState, HubAppState};
use crate::client::models::messages::Message;
use crate::client::services::api_client::ApiClient;
use crate::client::services::auth_service::AuthService;
use crate::client::utils::session_store::{self, KeyringCredentials};

pub struct HubApp {
    pub state: HubAppState,
    pub api: ApiClient,
}

impl Application for HubApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        let api = ApiClient::new(&config, Arc::new(KeyringCredentials));
        let app = HubApp {
            state: HubAppState::default(),
            api: api.clone(),
        };
        // Try to resume a saved session before falling back to the login screen.
        // The token itself never gets logged.
        let restore = Command::perform(
            async move {
                match session_store::load_session_token() {
                    Some(token) => match AuthService::validate_session(&api).await {
                        Ok(name) => Message::AuthResult {
                            success: true,
                            message: name,
                            token: Some(token),
                        },
                        Err(err) => {
                            log::debug!("saved session was not accepted: {}", err);
                            Message::SessionMissing
                        }
                    },
                    None => Message::SessionMissing,
                }
            },
            |msg| msg,
        );

        (app, restore)
    }

    fn title(&self) -> String {
        "SDG Hub".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.api)
    }

    fn view(&self) -> Element<Message> {
        // A failed action blocks the whole window until the user dismisses it.
        if let Some(alert) = &self.state.active_alert {
            return crate::client::gui::widgets::alert::view(alert);
        }
        match self.state.app_state {
            AppState::CheckingSession => iced::widget::Text::new("Checking session...").into(),
            AppState::Login => crate::client::gui::views::login::view(&self.state),
            AppState::MainActions => crate::client::gui::views::main_actions::view(&self.state),
            AppState::Members => crate::client::gui::views::members::view(&self.state),
            AppState::Communities => crate::client::gui::views::communities::view(&self.state),
            AppState::CreateCommunity => {
                crate::client::gui::views::create_community::view(&self.state)
            }
            AppState::Requests => crate::client::gui::views::requests::view(&self.state),
        }
    }
}
