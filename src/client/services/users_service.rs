use serde_json::Value;

use crate::client::models::entities::{ConnectionRequest, Member};
use crate::client::services::api_client::{ActionOutcome, ApiClient, ApiError, Method};

#[derive(Debug, Default)]
pub struct UsersService;

impl UsersService {
    pub fn new() -> Self {
        Self {}
    }

    /// List every registered member. Returns the `users` array on success.
    pub async fn list_members(api: &ApiClient) -> anyhow::Result<Vec<Member>> {
        match api.send("/users", Method::Get, None).await? {
            ActionOutcome::Accepted { payload } => list_from(&payload, "users"),
            ActionOutcome::Rejected { message } => Err(anyhow::anyhow!(message)),
        }
    }

    /// List connection requests waiting on the signed-in member.
    pub async fn list_received_requests(api: &ApiClient) -> anyhow::Result<Vec<ConnectionRequest>> {
        match api.send("/users/requests", Method::Get, None).await? {
            ActionOutcome::Accepted { payload } => list_from(&payload, "requests"),
            ActionOutcome::Rejected { message } => Err(anyhow::anyhow!(message)),
        }
    }

    /// Ask another member to connect. The outcome carries the server's
    /// decision; transport problems surface as the error variant.
    pub async fn send_connect_request(
        api: &ApiClient,
        user_id: &str,
    ) -> Result<ActionOutcome, ApiError> {
        api.send(&connect_endpoint(user_id), Method::Post, None).await
    }

    /// Accept a request this member received.
    pub async fn accept_connection(
        api: &ApiClient,
        user_id: &str,
    ) -> Result<ActionOutcome, ApiError> {
        api.send(&accept_endpoint(user_id), Method::Put, None).await
    }

    /// Ignore a request this member received.
    pub async fn reject_connection(
        api: &ApiClient,
        user_id: &str,
    ) -> Result<ActionOutcome, ApiError> {
        api.send(&reject_endpoint(user_id), Method::Put, None).await
    }
}

pub fn connect_endpoint(user_id: &str) -> String {
    format!("/users/connect/{}", user_id)
}

pub fn accept_endpoint(user_id: &str) -> String {
    format!("/users/connect/accept/{}", user_id)
}

pub fn reject_endpoint(user_id: &str) -> String {
    format!("/users/connect/reject/{}", user_id)
}

fn list_from<T: serde::de::DeserializeOwned>(payload: &Value, key: &str) -> anyhow::Result<Vec<T>> {
    match payload.get(key) {
        Some(items) => Ok(serde_json::from_value(items.clone())?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn connect_endpoints_interpolate_the_user_id() {
        assert_eq!(connect_endpoint("abc123"), "/users/connect/abc123");
        assert_eq!(accept_endpoint("abc123"), "/users/connect/accept/abc123");
        assert_eq!(reject_endpoint("abc123"), "/users/connect/reject/abc123");
    }

    #[test]
    fn list_from_reads_the_named_array() {
        let payload = json!({ "success": true, "users": [{ "_id": "u1" }] });
        let members: Vec<Member> = list_from(&payload, "users").expect("members");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "u1");
    }

    #[test]
    fn list_from_tolerates_a_missing_array() {
        let payload = json!({ "success": true });
        let members: Vec<Member> = list_from(&payload, "users").expect("members");
        assert!(members.is_empty());
    }

    #[test]
    fn list_from_rejects_a_non_array_value() {
        let payload = json!({ "success": true, "users": "nope" });
        let members: anyhow::Result<Vec<Member>> = list_from(&payload, "users");
        assert!(members.is_err());
    }
}
