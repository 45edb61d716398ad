use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            server_url: env::var("SDGHUB_SERVER_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
        }
    }
}
