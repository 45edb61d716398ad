use crate::client::models::entities::{Community, NewCommunity};
use crate::client::services::api_client::{ActionOutcome, ApiClient, ApiError, Method};

#[derive(Debug, Default)]
pub struct CommunitiesService;

impl CommunitiesService {
    pub fn new() -> Self {
        Self {}
    }

    /// List every community. Returns the `communities` array on success.
    pub async fn list_communities(api: &ApiClient) -> anyhow::Result<Vec<Community>> {
        match api.send("/communities", Method::Get, None).await? {
            ActionOutcome::Accepted { payload } => match payload.get("communities") {
                Some(items) => Ok(serde_json::from_value(items.clone())?),
                None => Ok(Vec::new()),
            },
            ActionOutcome::Rejected { message } => Err(anyhow::anyhow!(message)),
        }
    }

    /// Join a community as the signed-in member.
    pub async fn join_community(
        api: &ApiClient,
        community_id: &str,
    ) -> Result<ActionOutcome, ApiError> {
        api.send(&join_endpoint(community_id), Method::Post, None).await
    }

    /// Create a community owned by the signed-in member.
    pub async fn create_community(
        api: &ApiClient,
        community: &NewCommunity,
    ) -> Result<ActionOutcome, ApiError> {
        api.send("/communities", Method::Post, Some(&community.to_body()))
            .await
    }
}

pub fn join_endpoint(community_id: &str) -> String {
    format!("/communities/{}/join", community_id)
}
