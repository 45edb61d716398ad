use iced::Command;
use log::warn;

use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::cards::{CommunityCard, RequestCard, UserCard, SENT_MARKER};
use crate::client::models::controls::ActionControl;
use crate::client::models::entities::{NewCommunity, StakeholderType};
use crate::client::models::messages::{ConnectionDecision, Message};
use crate::client::services::api_client::{ActionOutcome, ApiClient};
use crate::client::services::auth_service::AuthService;
use crate::client::services::communities_service::CommunitiesService;
use crate::client::services::users_service::UsersService;
use crate::client::utils::session_store;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppState {
    #[default]
    CheckingSession,
    Login,
    MainActions,
    Members,
    Communities,
    CreateCommunity,
    Requests,
}

/// Schedules the logger bar to clear itself after a short delay.
fn clear_log_later() -> Command<Message> {
    Command::perform(
        async move {
            tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
            Message::ClearLog
        },
        |msg| msg,
    )
}

#[derive(Debug, Clone)]
pub struct HubAppState {
    pub app_state: AppState,
    // Auth screen
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub stakeholder_type: Option<StakeholderType>,
    pub is_login: bool,
    pub show_password: bool,
    pub loading: bool,
    pub error_message: Option<String>,
    pub session_token: Option<String>,
    pub account_name: String,
    // Member directory
    pub members: Vec<UserCard>,
    pub members_query: String,
    pub loading_members: bool,
    // Communities
    pub communities: Vec<CommunityCard>,
    pub loading_communities: bool,
    // Create community form
    pub community_name: String,
    pub community_description: String,
    pub community_sdg: Option<u8>,
    pub create_control: ActionControl,
    // Connection requests
    pub requests: Vec<RequestCard>,
    pub loading_requests: bool,
    pub requests_section_visible: bool,
    // Shell
    pub logger: Vec<LogMessage>,
    pub active_alert: Option<String>,
}

impl Default for HubAppState {
    fn default() -> Self {
        Self {
            app_state: AppState::default(),
            email: String::new(),
            password: String::new(),
            display_name: String::new(),
            stakeholder_type: None,
            is_login: true,
            show_password: false,
            loading: false,
            error_message: None,
            session_token: None,
            account_name: String::new(),
            members: Vec::new(),
            members_query: String::new(),
            loading_members: false,
            communities: Vec::new(),
            loading_communities: false,
            community_name: String::new(),
            community_description: String::new(),
            community_sdg: None,
            create_control: ActionControl::new("Create Community"),
            requests: Vec::new(),
            loading_requests: false,
            requests_section_visible: false,
            logger: Vec::new(),
            active_alert: None,
        }
    }
}

impl HubAppState {
    pub fn update(&mut self, message: Message, api: &ApiClient) -> Command<Message> {
        match message {
            Message::NoOp => {
                return Command::none();
            }
            Message::SessionMissing => {
                self.loading = false;
                self.app_state = AppState::Login;
            }
            Message::AuthResult { success, message, token } => {
                self.loading = false;
                if success {
                    if let Some(token) = token {
                        if let Err(e) = session_store::save_session_token(&token) {
                            // Non-fatal: the session just won't survive a restart.
                            warn!("could not persist session token: {}", e);
                        }
                        self.session_token = Some(token);
                    }
                    self.account_name = message;
                    self.password.clear();
                    self.error_message = None;
                    self.app_state = AppState::MainActions;
                    self.logger.clear();
                    self.logger.push(LogMessage {
                        level: LogLevel::Success,
                        message: format!("Signed in as {}", self.account_name),
                    });
                    return clear_log_later();
                } else {
                    self.error_message = Some(message);
                }
            }
            Message::EmailChanged(email) => {
                self.email = email;
            }
            Message::PasswordChanged(password) => {
                self.password = password;
            }
            Message::DisplayNameChanged(name) => {
                self.display_name = name;
            }
            Message::StakeholderPicked(stakeholder) => {
                self.stakeholder_type = Some(stakeholder);
            }
            Message::ToggleShowPassword => {
                self.show_password = !self.show_password;
            }
            Message::ToggleLoginRegister => {
                self.is_login = !self.is_login;
                self.error_message = None;
            }
            Message::SubmitLoginOrRegister => {
                let email = self.email.trim().to_string();
                let password = self.password.clone();
                if email.is_empty() || password.is_empty() {
                    self.error_message = Some("Email and password are required".to_string());
                    return Command::none();
                }
                if self.is_login {
                    self.loading = true;
                    self.error_message = None;
                    let api = api.clone();
                    return Command::perform(
                        async move {
                            match AuthService::login(&api, &email, &password).await {
                                Ok(session) => Message::AuthResult {
                                    success: true,
                                    message: session.name,
                                    token: Some(session.token),
                                },
                                Err(e) => Message::AuthResult {
                                    success: false,
                                    message: e.to_string(),
                                    token: None,
                                },
                            }
                        },
                        |msg| msg,
                    );
                }
                // Registration additionally needs a display name and a type.
                let name = self.display_name.trim().to_string();
                if name.is_empty() {
                    self.error_message = Some("Display name is required".to_string());
                    return Command::none();
                }
                let stakeholder = match self.stakeholder_type {
                    Some(stakeholder) => stakeholder,
                    None => {
                        self.error_message = Some("Pick a stakeholder type".to_string());
                        return Command::none();
                    }
                };
                self.loading = true;
                self.error_message = None;
                let api = api.clone();
                return Command::perform(
                    async move {
                        match AuthService::register(&api, &email, &password, &name, stakeholder).await
                        {
                            Ok(session) => Message::AuthResult {
                                success: true,
                                message: session.name,
                                token: Some(session.token),
                            },
                            Err(e) => Message::AuthResult {
                                success: false,
                                message: e.to_string(),
                                token: None,
                            },
                        }
                    },
                    |msg| msg,
                );
            }
            Message::Logout => {
                if let Err(e) = session_store::clear_session_token() {
                    warn!("could not clear session token: {}", e);
                }
                let api = api.clone();
                *self = HubAppState::default();
                self.app_state = AppState::Login;
                // Best-effort server-side logout; local state is gone already.
                return Command::perform(
                    async move {
                        let _ = AuthService::logout(&api).await;
                        Message::NoOp
                    },
                    |msg| msg,
                );
            }
            Message::OpenMainActions => {
                self.app_state = AppState::MainActions;
            }
            Message::OpenMembers => {
                self.app_state = AppState::Members;
                self.loading_members = true;
                self.members.clear();
                self.members_query.clear();
                let api = api.clone();
                return Command::perform(
                    async move {
                        match UsersService::list_members(&api).await {
                            Ok(members) => Message::MembersLoaded { result: Ok(members) },
                            Err(e) => Message::MembersLoaded { result: Err(e.to_string()) },
                        }
                    },
                    |msg| msg,
                );
            }
            Message::OpenCommunities => {
                self.app_state = AppState::Communities;
                self.loading_communities = true;
                self.communities.clear();
                let api = api.clone();
                return Command::perform(
                    async move {
                        match CommunitiesService::list_communities(&api).await {
                            Ok(communities) => Message::CommunitiesLoaded {
                                result: Ok(communities),
                            },
                            Err(e) => Message::CommunitiesLoaded {
                                result: Err(e.to_string()),
                            },
                        }
                    },
                    |msg| msg,
                );
            }
            Message::OpenCreateCommunity => {
                self.app_state = AppState::CreateCommunity;
                self.community_name.clear();
                self.community_description.clear();
                self.community_sdg = None;
                self.create_control = ActionControl::new("Create Community");
            }
            Message::OpenRequests => {
                self.app_state = AppState::Requests;
                self.loading_requests = true;
                self.requests.clear();
                let api = api.clone();
                return Command::perform(
                    async move {
                        match UsersService::list_received_requests(&api).await {
                            Ok(requests) => Message::RequestsLoaded { result: Ok(requests) },
                            Err(e) => Message::RequestsLoaded { result: Err(e.to_string()) },
                        }
                    },
                    |msg| msg,
                );
            }
            Message::MembersLoaded { result } => {
                self.loading_members = false;
                match result {
                    Ok(members) => {
                        self.members = members.iter().map(UserCard::from_member).collect();
                    }
                    Err(e) => {
                        self.logger.push(LogMessage {
                            level: LogLevel::Error,
                            message: format!("Could not load members: {}", e),
                        });
                        return clear_log_later();
                    }
                }
            }
            Message::CommunitiesLoaded { result } => {
                self.loading_communities = false;
                match result {
                    Ok(communities) => {
                        self.communities = communities
                            .iter()
                            .map(CommunityCard::from_community)
                            .collect();
                    }
                    Err(e) => {
                        self.logger.push(LogMessage {
                            level: LogLevel::Error,
                            message: format!("Could not load communities: {}", e),
                        });
                        return clear_log_later();
                    }
                }
            }
            Message::RequestsLoaded { result } => {
                self.loading_requests = false;
                match result {
                    Ok(requests) => {
                        self.requests = requests.iter().map(RequestCard::from_request).collect();
                        self.refresh_requests_visibility();
                    }
                    Err(e) => {
                        self.refresh_requests_visibility();
                        self.logger.push(LogMessage {
                            level: LogLevel::Error,
                            message: format!("Could not load requests: {}", e),
                        });
                        return clear_log_later();
                    }
                }
            }
            Message::MembersSearchQueryChanged(query) => {
                self.members_query = query;
            }
            Message::SendConnectRequest { member_id } => {
                let began = self
                    .member_card_mut(&member_id)
                    .map_or(false, |card| card.connect.begin("Sending..."));
                if !began {
                    return Command::none();
                }
                let api = api.clone();
                return Command::perform(
                    async move {
                        let outcome =
                            match UsersService::send_connect_request(&api, &member_id).await {
                                Ok(outcome) => outcome,
                                Err(e) => ActionOutcome::Rejected {
                                    message: e.to_string(),
                                },
                            };
                        Message::ConnectRequestResult { member_id, outcome }
                    },
                    |msg| msg,
                );
            }
            Message::ConnectRequestResult { member_id, outcome } => match outcome {
                ActionOutcome::Accepted { .. } => {
                    if let Some(card) = self.member_card_mut(&member_id) {
                        card.connect.commit("Request Sent", Some(SENT_MARKER));
                    }
                    self.logger.push(LogMessage {
                        level: LogLevel::Success,
                        message: "Connection request sent".to_string(),
                    });
                    return clear_log_later();
                }
                ActionOutcome::Rejected { message } => {
                    if let Some(card) = self.member_card_mut(&member_id) {
                        card.connect.rollback();
                    }
                    warn!("connect request to {} failed: {}", member_id, message);
                    self.active_alert = Some(message);
                }
            },
            Message::JoinCommunity { community_id } => {
                let began = self
                    .community_card_mut(&community_id)
                    .map_or(false, |card| card.join.begin("Joining..."));
                if !began {
                    return Command::none();
                }
                let api = api.clone();
                return Command::perform(
                    async move {
                        let outcome =
                            match CommunitiesService::join_community(&api, &community_id).await {
                                Ok(outcome) => outcome,
                                Err(e) => ActionOutcome::Rejected {
                                    message: e.to_string(),
                                },
                            };
                        Message::JoinCommunityResult {
                            community_id,
                            outcome,
                        }
                    },
                    |msg| msg,
                );
            }
            Message::JoinCommunityResult {
                community_id,
                outcome,
            } => match outcome {
                ActionOutcome::Accepted { .. } => {
                    let name = self
                        .community_card_mut(&community_id)
                        .map(|card| card.name.clone());
                    self.communities
                        .retain(|card| card.community_id != community_id);
                    self.logger.push(LogMessage {
                        level: LogLevel::Success,
                        message: match name {
                            Some(name) => format!("Joined {}", name),
                            None => "Joined community".to_string(),
                        },
                    });
                    return clear_log_later();
                }
                ActionOutcome::Rejected { message } => {
                    if let Some(card) = self.community_card_mut(&community_id) {
                        card.join.rollback();
                    }
                    warn!("join of community {} failed: {}", community_id, message);
                    self.active_alert = Some(message);
                }
            },
            Message::DecideConnection {
                requester_id,
                decision,
            } => {
                let pending_label = match decision {
                    ConnectionDecision::Accept => "Accepting...",
                    ConnectionDecision::Reject => "Ignoring...",
                };
                let began = self
                    .request_card_mut(&requester_id)
                    .map_or(false, |card| match decision {
                        ConnectionDecision::Accept => card.accept.begin(pending_label),
                        ConnectionDecision::Reject => card.reject.begin(pending_label),
                    });
                if !began {
                    return Command::none();
                }
                let api = api.clone();
                return Command::perform(
                    async move {
                        let sent = match decision {
                            ConnectionDecision::Accept => {
                                UsersService::accept_connection(&api, &requester_id).await
                            }
                            ConnectionDecision::Reject => {
                                UsersService::reject_connection(&api, &requester_id).await
                            }
                        };
                        let outcome = match sent {
                            Ok(outcome) => outcome,
                            Err(e) => ActionOutcome::Rejected {
                                message: e.to_string(),
                            },
                        };
                        Message::ConnectionDecisionResult {
                            requester_id,
                            decision,
                            outcome,
                        }
                    },
                    |msg| msg,
                );
            }
            Message::ConnectionDecisionResult {
                requester_id,
                decision,
                outcome,
            } => match outcome {
                ActionOutcome::Accepted { .. } => {
                    self.requests.retain(|card| card.requester_id != requester_id);
                    self.refresh_requests_visibility();
                    self.logger.push(LogMessage {
                        level: LogLevel::Success,
                        message: match decision {
                            ConnectionDecision::Accept => "Connection accepted".to_string(),
                            ConnectionDecision::Reject => "Request ignored".to_string(),
                        },
                    });
                    return clear_log_later();
                }
                ActionOutcome::Rejected { message } => {
                    if let Some(card) = self.request_card_mut(&requester_id) {
                        match decision {
                            ConnectionDecision::Accept => card.accept.rollback(),
                            ConnectionDecision::Reject => card.reject.rollback(),
                        }
                    }
                    warn!(
                        "connection decision for {} failed: {}",
                        requester_id, message
                    );
                    self.active_alert = Some(message);
                }
            },
            Message::CommunityNameChanged(name) => {
                self.community_name = name;
            }
            Message::CommunityDescriptionChanged(description) => {
                self.community_description = description;
            }
            Message::CommunitySdgPicked(sdg) => {
                self.community_sdg = Some(sdg);
            }
            Message::SubmitCreateCommunity => {
                let name = self.community_name.trim().to_string();
                let sdg = match self.community_sdg {
                    Some(sdg) if !name.is_empty() => sdg,
                    _ => {
                        self.logger.push(LogMessage {
                            level: LogLevel::Error,
                            message: "A name and an SDG goal are required".to_string(),
                        });
                        return clear_log_later();
                    }
                };
                if !self.create_control.begin("Creating...") {
                    return Command::none();
                }
                let community = NewCommunity {
                    name,
                    description: self.community_description.trim().to_string(),
                    sdg,
                };
                let api = api.clone();
                return Command::perform(
                    async move {
                        let outcome =
                            match CommunitiesService::create_community(&api, &community).await {
                                Ok(outcome) => outcome,
                                Err(e) => ActionOutcome::Rejected {
                                    message: e.to_string(),
                                },
                            };
                        Message::CreateCommunityResult { outcome }
                    },
                    |msg| msg,
                );
            }
            Message::CreateCommunityResult { outcome } => match outcome {
                ActionOutcome::Accepted { .. } => {
                    self.create_control.rollback();
                    let name = std::mem::take(&mut self.community_name);
                    self.community_description.clear();
                    self.community_sdg = None;
                    self.logger.push(LogMessage {
                        level: LogLevel::Success,
                        message: format!("Community {} created", name.trim()),
                    });
                    return Command::batch([
                        clear_log_later(),
                        Command::perform(async move { Message::OpenCommunities }, |msg| msg),
                    ]);
                }
                ActionOutcome::Rejected { message } => {
                    self.create_control.rollback();
                    warn!("create community failed: {}", message);
                    self.active_alert = Some(message);
                }
            },
            Message::DismissAlert => {
                self.active_alert = None;
            }
            Message::ClearLog => {
                self.logger.clear();
            }
        }
        Command::none()
    }

    /// Requests section shows only while it has cards; removal of the last
    /// card hides it and a later reload can bring it back.
    fn refresh_requests_visibility(&mut self) {
        self.requests_section_visible = !self.requests.is_empty();
    }

    fn member_card_mut(&mut self, member_id: &str) -> Option<&mut UserCard> {
        self.members
            .iter_mut()
            .find(|card| card.member_id == member_id)
    }

    fn community_card_mut(&mut self, community_id: &str) -> Option<&mut CommunityCard> {
        self.communities
            .iter_mut()
            .find(|card| card.community_id == community_id)
    }

    fn request_card_mut(&mut self, requester_id: &str) -> Option<&mut RequestCard> {
        self.requests
            .iter_mut()
            .find(|card| card.requester_id == requester_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::config::ClientConfig;
    use crate::client::models::controls::ControlPhase;
    use crate::client::models::entities::{Community, ConnectionRequest, Member};
    use crate::client::services::api_client::CredentialProvider;
    use serde_json::json;
    use std::sync::Arc;

    struct NoCredentials;

    impl CredentialProvider for NoCredentials {
        fn current_token(&self) -> Option<String> {
            None
        }
    }

    // Commands returned by update are dropped unexecuted, so the address is
    // never contacted.
    fn test_api() -> ApiClient {
        let config = ClientConfig {
            server_url: "http://127.0.0.1:9".to_string(),
        };
        ApiClient::new(&config, Arc::new(NoCredentials))
    }

    fn member(id: &str) -> Member {
        Member {
            id: id.to_string(),
            ..Member::default()
        }
    }

    fn community(id: &str, name: &str) -> Community {
        Community {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            sdg: 6,
            member_count: 1,
        }
    }

    fn accepted() -> ActionOutcome {
        ActionOutcome::Accepted {
            payload: json!({ "success": true }),
        }
    }

    fn rejected(message: &str) -> ActionOutcome {
        ActionOutcome::Rejected {
            message: message.to_string(),
        }
    }

    fn state_with_members(ids: &[&str]) -> HubAppState {
        let mut state = HubAppState::default();
        let api = test_api();
        let members = ids.iter().map(|id| member(id)).collect();
        let _ = state.update(
            Message::MembersLoaded {
                result: Ok(members),
            },
            &api,
        );
        state
    }

    fn state_with_requests(ids: &[&str]) -> HubAppState {
        let mut state = HubAppState::default();
        let api = test_api();
        let requests = ids
            .iter()
            .map(|id| ConnectionRequest {
                requester: member(id),
            })
            .collect();
        let _ = state.update(
            Message::RequestsLoaded {
                result: Ok(requests),
            },
            &api,
        );
        state
    }

    #[test]
    fn pressing_connect_locks_the_card_immediately() {
        let mut state = state_with_members(&["u1"]);
        let api = test_api();

        let _ = state.update(
            Message::SendConnectRequest {
                member_id: "u1".to_string(),
            },
            &api,
        );

        let control = &state.members[0].connect;
        assert_eq!(control.phase(), ControlPhase::Pending);
        assert!(!control.state().enabled);
        assert_eq!(control.state().label, "Sending...");
    }

    #[test]
    fn second_press_while_pending_changes_nothing() {
        let mut state = state_with_members(&["u1"]);
        let api = test_api();

        let _ = state.update(
            Message::SendConnectRequest {
                member_id: "u1".to_string(),
            },
            &api,
        );
        let _ = state.update(
            Message::SendConnectRequest {
                member_id: "u1".to_string(),
            },
            &api,
        );

        let control = &state.members[0].connect;
        assert_eq!(control.phase(), ControlPhase::Pending);
        assert_eq!(control.state().label, "Sending...");
    }

    #[test]
    fn accepted_connect_settles_as_request_sent() {
        let mut state = state_with_members(&["u1"]);
        let api = test_api();
        let _ = state.update(
            Message::SendConnectRequest {
                member_id: "u1".to_string(),
            },
            &api,
        );

        let _ = state.update(
            Message::ConnectRequestResult {
                member_id: "u1".to_string(),
                outcome: accepted(),
            },
            &api,
        );

        let control = &state.members[0].connect;
        assert_eq!(control.phase(), ControlPhase::Committed);
        assert!(!control.state().enabled);
        assert_eq!(control.state().label, "Request Sent");
        assert!(control.state().has_marker(SENT_MARKER));
        assert!(state.active_alert.is_none());
    }

    #[test]
    fn rejected_connect_rolls_back_and_raises_the_servers_message() {
        let mut state = state_with_members(&["u1"]);
        let api = test_api();
        let before = state.members[0].connect.clone();
        let _ = state.update(
            Message::SendConnectRequest {
                member_id: "u1".to_string(),
            },
            &api,
        );

        let _ = state.update(
            Message::ConnectRequestResult {
                member_id: "u1".to_string(),
                outcome: rejected("Already connected"),
            },
            &api,
        );

        assert_eq!(state.active_alert.as_deref(), Some("Already connected"));
        assert_eq!(&state.members[0].connect, &before);
        assert!(state.members[0].connect.state().enabled);
        assert_eq!(state.members[0].connect.state().label, "Connect");
    }

    #[test]
    fn dismissing_the_alert_clears_it() {
        let mut state = state_with_members(&["u1"]);
        let api = test_api();
        let _ = state.update(
            Message::ConnectRequestResult {
                member_id: "u1".to_string(),
                outcome: rejected("Already connected"),
            },
            &api,
        );

        let _ = state.update(Message::DismissAlert, &api);

        assert!(state.active_alert.is_none());
    }

    #[test]
    fn accepted_join_removes_the_community_card() {
        let mut state = HubAppState::default();
        let api = test_api();
        let _ = state.update(
            Message::CommunitiesLoaded {
                result: Ok(vec![community("c1", "Clean Water Guild"), community("c2", "Solar")]),
            },
            &api,
        );
        let _ = state.update(
            Message::JoinCommunity {
                community_id: "c1".to_string(),
            },
            &api,
        );

        let _ = state.update(
            Message::JoinCommunityResult {
                community_id: "c1".to_string(),
                outcome: accepted(),
            },
            &api,
        );

        assert_eq!(state.communities.len(), 1);
        assert_eq!(state.communities[0].community_id, "c2");
    }

    #[test]
    fn rejected_join_rolls_back_and_keeps_the_card() {
        let mut state = HubAppState::default();
        let api = test_api();
        let _ = state.update(
            Message::CommunitiesLoaded {
                result: Ok(vec![community("c1", "Clean Water Guild")]),
            },
            &api,
        );
        let _ = state.update(
            Message::JoinCommunity {
                community_id: "c1".to_string(),
            },
            &api,
        );

        let _ = state.update(
            Message::JoinCommunityResult {
                community_id: "c1".to_string(),
                outcome: rejected("Community is full"),
            },
            &api,
        );

        assert_eq!(state.communities.len(), 1);
        assert_eq!(state.active_alert.as_deref(), Some("Community is full"));
        let control = &state.communities[0].join;
        assert_eq!(control.phase(), ControlPhase::Idle);
        assert!(control.state().enabled);
        assert_eq!(control.state().label, "Join Community");
    }

    #[test]
    fn accepting_a_request_removes_its_card_and_keeps_the_section() {
        let mut state = state_with_requests(&["u1", "u2"]);
        let api = test_api();
        let _ = state.update(
            Message::DecideConnection {
                requester_id: "u1".to_string(),
                decision: ConnectionDecision::Accept,
            },
            &api,
        );

        let _ = state.update(
            Message::ConnectionDecisionResult {
                requester_id: "u1".to_string(),
                decision: ConnectionDecision::Accept,
                outcome: accepted(),
            },
            &api,
        );

        assert_eq!(state.requests.len(), 1);
        assert_eq!(state.requests[0].requester_id, "u2");
        assert!(state.requests_section_visible);
    }

    #[test]
    fn removing_the_last_request_hides_the_section() {
        let mut state = state_with_requests(&["u1"]);
        let api = test_api();
        assert!(state.requests_section_visible);

        let _ = state.update(
            Message::ConnectionDecisionResult {
                requester_id: "u1".to_string(),
                decision: ConnectionDecision::Reject,
                outcome: accepted(),
            },
            &api,
        );

        assert!(state.requests.is_empty());
        assert!(!state.requests_section_visible);
    }

    #[test]
    fn loading_zero_requests_keeps_the_section_hidden() {
        let state = state_with_requests(&[]);
        assert!(!state.requests_section_visible);
    }

    #[test]
    fn rejected_decision_rolls_back_only_the_pressed_button() {
        let mut state = state_with_requests(&["u1"]);
        let api = test_api();
        let _ = state.update(
            Message::DecideConnection {
                requester_id: "u1".to_string(),
                decision: ConnectionDecision::Reject,
            },
            &api,
        );

        let _ = state.update(
            Message::ConnectionDecisionResult {
                requester_id: "u1".to_string(),
                decision: ConnectionDecision::Reject,
                outcome: rejected("Request no longer exists"),
            },
            &api,
        );

        assert_eq!(state.requests.len(), 1);
        assert_eq!(
            state.active_alert.as_deref(),
            Some("Request no longer exists")
        );
        let card = &state.requests[0];
        assert_eq!(card.reject.phase(), ControlPhase::Idle);
        assert_eq!(card.reject.state().label, "Ignore");
        assert_eq!(card.accept.phase(), ControlPhase::Idle);
        assert_eq!(card.accept.state().label, "Accept");
    }

    #[test]
    fn result_for_a_vanished_card_changes_nothing() {
        let mut state = state_with_members(&["u1"]);
        let api = test_api();

        let _ = state.update(
            Message::ConnectRequestResult {
                member_id: "ghost".to_string(),
                outcome: accepted(),
            },
            &api,
        );

        assert_eq!(state.members.len(), 1);
        assert_eq!(state.members[0].connect.phase(), ControlPhase::Idle);
    }

    #[test]
    fn members_load_builds_one_card_per_member() {
        let state = state_with_members(&["u1", "u2", "u3"]);
        assert_eq!(state.members.len(), 3);
        assert!(!state.loading_members);
    }

    #[test]
    fn failed_members_load_logs_instead_of_alerting() {
        let mut state = HubAppState::default();
        let api = test_api();

        let _ = state.update(
            Message::MembersLoaded {
                result: Err("could not reach the server".to_string()),
            },
            &api,
        );

        assert!(state.active_alert.is_none());
        assert_eq!(state.logger.len(), 1);
        assert_eq!(state.logger[0].level, LogLevel::Error);
    }

    #[test]
    fn accepted_create_resets_the_form_and_submit_button() {
        let mut state = HubAppState::default();
        let api = test_api();
        state.community_name = "Clean Water Guild".to_string();
        state.community_description = "Wells".to_string();
        state.community_sdg = Some(6);
        let _ = state.update(Message::SubmitCreateCommunity, &api);
        assert_eq!(state.create_control.phase(), ControlPhase::Pending);

        let _ = state.update(
            Message::CreateCommunityResult { outcome: accepted() },
            &api,
        );

        assert!(state.community_name.is_empty());
        assert!(state.community_sdg.is_none());
        assert_eq!(state.create_control.phase(), ControlPhase::Idle);
        assert!(state.create_control.state().enabled);
        assert_eq!(state.create_control.state().label, "Create Community");
    }

    #[test]
    fn rejected_create_keeps_the_form_and_raises_an_alert() {
        let mut state = HubAppState::default();
        let api = test_api();
        state.community_name = "Clean Water Guild".to_string();
        state.community_sdg = Some(6);
        let _ = state.update(Message::SubmitCreateCommunity, &api);

        let _ = state.update(
            Message::CreateCommunityResult {
                outcome: rejected("Name already taken"),
            },
            &api,
        );

        assert_eq!(state.community_name, "Clean Water Guild");
        assert_eq!(state.active_alert.as_deref(), Some("Name already taken"));
        assert_eq!(state.create_control.phase(), ControlPhase::Idle);
        assert!(state.create_control.state().enabled);
    }

    #[test]
    fn submit_without_sdg_goal_never_locks_the_button() {
        let mut state = HubAppState::default();
        let api = test_api();
        state.community_name = "Clean Water Guild".to_string();

        let _ = state.update(Message::SubmitCreateCommunity, &api);

        assert_eq!(state.create_control.phase(), ControlPhase::Idle);
        assert_eq!(state.logger.len(), 1);
        assert_eq!(state.logger[0].level, LogLevel::Error);
    }

    #[test]
    fn auth_failure_shows_the_error_on_the_login_screen() {
        let mut state = HubAppState::default();
        let api = test_api();
        state.app_state = AppState::Login;

        let _ = state.update(
            Message::AuthResult {
                success: false,
                message: "Invalid credentials".to_string(),
                token: None,
            },
            &api,
        );

        assert_eq!(state.app_state, AppState::Login);
        assert_eq!(state.error_message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn restored_session_enters_main_actions_without_a_new_token() {
        let mut state = HubAppState::default();
        let api = test_api();

        let _ = state.update(
            Message::AuthResult {
                success: true,
                message: "Asha Rao".to_string(),
                token: None,
            },
            &api,
        );

        assert_eq!(state.app_state, AppState::MainActions);
        assert_eq!(state.account_name, "Asha Rao");
    }

    #[test]
    fn missing_session_lands_on_the_login_screen() {
        let mut state = HubAppState::default();
        let api = test_api();

        let _ = state.update(Message::SessionMissing, &api);

        assert_eq!(state.app_state, AppState::Login);
    }

    #[test]
    fn submit_with_empty_credentials_is_refused_locally() {
        let mut state = HubAppState::default();
        let api = test_api();
        state.app_state = AppState::Login;

        let _ = state.update(Message::SubmitLoginOrRegister, &api);

        assert!(!state.loading);
        assert!(state.error_message.is_some());
    }
}
