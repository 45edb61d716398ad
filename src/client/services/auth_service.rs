use anyhow::Context;
use serde_json::Value;

use crate::client::models::entities::StakeholderType;
use crate::client::services::api_client::{ActionOutcome, ApiClient, ApiError, Method};

/// What a successful login or registration hands back to the GUI.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self {}
    }

    /// Sign in with email and password.
    pub async fn login(api: &ApiClient, email: &str, password: &str) -> anyhow::Result<Session> {
        let body = serde_json::json!({ "email": email, "password": password });
        match api.send("/auth/login", Method::Post, Some(&body)).await? {
            ActionOutcome::Accepted { payload } => session_from(&payload),
            ActionOutcome::Rejected { message } => Err(anyhow::anyhow!(message)),
        }
    }

    /// Register a new account and sign it in.
    pub async fn register(
        api: &ApiClient,
        email: &str,
        password: &str,
        name: &str,
        stakeholder_type: StakeholderType,
    ) -> anyhow::Result<Session> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "name": name,
            "stakeholderType": stakeholder_type,
        });
        match api.send("/auth/register", Method::Post, Some(&body)).await? {
            ActionOutcome::Accepted { payload } => session_from(&payload),
            ActionOutcome::Rejected { message } => Err(anyhow::anyhow!(message)),
        }
    }

    /// Check whether the stored token still names a live session. Returns the
    /// account's display name.
    pub async fn validate_session(api: &ApiClient) -> anyhow::Result<String> {
        match api.send("/auth/session", Method::Get, None).await? {
            ActionOutcome::Accepted { payload } => Ok(display_name_from(&payload)),
            ActionOutcome::Rejected { message } => Err(anyhow::anyhow!(message)),
        }
    }

    /// Tell the server to drop the session. Best effort; the caller clears
    /// local state either way.
    pub async fn logout(api: &ApiClient) -> Result<ActionOutcome, ApiError> {
        api.send("/auth/logout", Method::Post, None).await
    }
}

fn session_from(payload: &Value) -> anyhow::Result<Session> {
    let token = payload
        .get("token")
        .and_then(Value::as_str)
        .context("the server accepted the login but sent no session token")?;
    Ok(Session {
        token: token.to_string(),
        name: display_name_from(payload),
    })
}

fn display_name_from(payload: &Value) -> String {
    payload
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or("SDG Member")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_reads_token_and_name() {
        let payload = json!({ "success": true, "token": "t1", "name": "Asha Rao" });
        let session = session_from(&payload).expect("session");
        assert_eq!(session.token, "t1");
        assert_eq!(session.name, "Asha Rao");
    }

    #[test]
    fn accepted_login_without_token_is_an_error() {
        let payload = json!({ "success": true });
        assert!(session_from(&payload).is_err());
    }

    #[test]
    fn missing_name_falls_back_to_generic_member() {
        let payload = json!({ "success": true, "token": "t1" });
        let session = session_from(&payload).expect("session");
        assert_eq!(session.name, "SDG Member");
    }
}
