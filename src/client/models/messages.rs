use crate::client::models::entities::{Community, ConnectionRequest, Member, StakeholderType};
use crate::client::services::api_client::ActionOutcome;

/// Which button on a request card was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionDecision {
    Accept,
    Reject,
}

#[derive(Debug, Clone)]
pub enum Message {
    NoOp, // used when a command must return a message but nothing should happen
    // Session and auth
    SessionMissing,
    AuthResult { success: bool, message: String, token: Option<String> },
    EmailChanged(String),
    PasswordChanged(String),
    DisplayNameChanged(String),
    StakeholderPicked(StakeholderType),
    ToggleShowPassword,
    ToggleLoginRegister,
    SubmitLoginOrRegister,
    Logout,
    // Navigation
    OpenMainActions,
    OpenMembers,
    OpenCommunities,
    OpenCreateCommunity,
    OpenRequests,
    // Data loads
    MembersLoaded { result: Result<Vec<Member>, String> },
    CommunitiesLoaded { result: Result<Vec<Community>, String> },
    RequestsLoaded { result: Result<Vec<ConnectionRequest>, String> },
    MembersSearchQueryChanged(String),
    // Optimistic card actions
    SendConnectRequest { member_id: String },
    ConnectRequestResult { member_id: String, outcome: ActionOutcome },
    JoinCommunity { community_id: String },
    JoinCommunityResult { community_id: String, outcome: ActionOutcome },
    DecideConnection { requester_id: String, decision: ConnectionDecision },
    ConnectionDecisionResult {
        requester_id: String,
        decision: ConnectionDecision,
        outcome: ActionOutcome,
    },
    // Create community form
    CommunityNameChanged(String),
    CommunityDescriptionChanged(String),
    CommunitySdgPicked(u8),
    SubmitCreateCommunity,
    CreateCommunityResult { outcome: ActionOutcome },
    // Alert and logger
    DismissAlert,
    ClearLog,
}
