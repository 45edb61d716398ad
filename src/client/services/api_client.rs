use std::sync::Arc;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::client::config::ClientConfig;

/// Every endpoint the client talks to lives under this prefix on the server.
pub const API_PREFIX: &str = "/api";

/// Shown when the server rejects a request without saying why.
pub const GENERIC_REJECTION: &str = "The server rejected the request.";

/// Read-only source for the session token. The GUI injects a keyring-backed
/// implementation; tests inject fixed values.
pub trait CredentialProvider: Send + Sync {
    fn current_token(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("the server returned a response that is not valid JSON")]
    MalformedResponse(#[source] serde_json::Error),
}

/// What the server decided, as a discriminated value instead of a raw body.
///
/// The backend wraps every answer in an envelope with a `success` flag and an
/// optional `error` string. A missing or non-boolean flag counts as a
/// rejection, and a rejection without an `error` string gets a generic
/// message, so callers never have to inspect the payload defensively.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Accepted { payload: Value },
    Rejected { message: String },
}

/// HTTP client for the hub backend. Cheap to clone; every request re-reads
/// the credential provider so a login or logout mid-session takes effect on
/// the next call without rebuilding the client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}{}", config.server_url.trim_end_matches('/'), API_PREFIX),
            credentials,
        }
    }

    /// Sends one request and decodes the envelope. `endpoint` is the path
    /// after the `/api` prefix, e.g. `/users/connect/42`.
    pub async fn send(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<ActionOutcome, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("{:?} {}", method, url);

        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
        };
        request = request.headers(request_headers(self.credentials.current_token().as_deref()));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let text = response.text().await?;
        decode_outcome(&text)
    }
}

/// Default headers for every request: JSON content type always, and a bearer
/// token only when a session exists. A token that is not a valid header value
/// is treated the same as no token.
fn request_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
            headers.insert(AUTHORIZATION, value);
        }
    }
    headers
}

fn decode_outcome(body: &str) -> Result<ActionOutcome, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(ApiError::MalformedResponse)?;
    Ok(outcome_from_value(value))
}

fn outcome_from_value(value: Value) -> ActionOutcome {
    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if success {
        ActionOutcome::Accepted { payload: value }
    } else {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_REJECTION)
            .to_string();
        ActionOutcome::Rejected { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    struct FixedToken(Option<&'static str>);

    impl CredentialProvider for FixedToken {
        fn current_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn client_for(base: &str, token: Option<&'static str>) -> ApiClient {
        let config = ClientConfig {
            server_url: base.to_string(),
        };
        ApiClient::new(&config, Arc::new(FixedToken(token)))
    }

    /// Reads one full HTTP/1.1 request (headers plus `Content-Length` body)
    /// off the socket and returns it as text.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
            if let Some(header_end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    /// One-shot server: accepts `hits` connections, answers each with `body`
    /// as JSON, and resolves to the captured request texts.
    async fn spawn_stub(
        body: &'static str,
        hits: usize,
    ) -> (String, tokio::task::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for _ in 0..hits {
                let (mut socket, _) = listener.accept().await.expect("accept");
                requests.push(read_request(&mut socket).await);
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                socket
                    .write_all(response.as_bytes())
                    .await
                    .expect("write response");
            }
            requests
        });
        (format!("http://{}", addr), handle)
    }

    fn header_value<'a>(request: &'a str, name: &str) -> Option<&'a str> {
        request.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.eq_ignore_ascii_case(name) {
                Some(value.trim())
            } else {
                None
            }
        })
    }

    #[tokio::test]
    async fn sends_bearer_header_when_token_present() {
        let (base, stub) = spawn_stub(r#"{"success":true}"#, 1).await;
        let client = client_for(&base, Some("tok_123"));

        let outcome = client.send("/users", Method::Get, None).await.expect("send");
        assert!(matches!(outcome, ActionOutcome::Accepted { .. }));

        let requests = stub.await.expect("stub");
        assert_eq!(
            header_value(&requests[0], "authorization"),
            Some("Bearer tok_123")
        );
    }

    #[tokio::test]
    async fn omits_authorization_header_without_token() {
        let (base, stub) = spawn_stub(r#"{"success":true}"#, 1).await;
        let client = client_for(&base, None);

        client.send("/users", Method::Get, None).await.expect("send");

        let requests = stub.await.expect("stub");
        assert_eq!(header_value(&requests[0], "authorization"), None);
    }

    #[tokio::test]
    async fn always_sends_json_content_type() {
        let (base, stub) = spawn_stub(r#"{"success":true}"#, 1).await;
        let client = client_for(&base, None);

        client.send("/users", Method::Get, None).await.expect("send");

        let requests = stub.await.expect("stub");
        assert_eq!(
            header_value(&requests[0], "content-type"),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn prefixes_every_endpoint_with_api() {
        let (base, stub) = spawn_stub(r#"{"success":true}"#, 1).await;
        let client = client_for(&base, None);

        client
            .send("/users/connect/42", Method::Post, None)
            .await
            .expect("send");

        let requests = stub.await.expect("stub");
        assert!(requests[0].starts_with("POST /api/users/connect/42 HTTP/1.1"));
    }

    #[tokio::test]
    async fn serializes_body_as_json_text() {
        let (base, stub) = spawn_stub(r#"{"success":true}"#, 1).await;
        let client = client_for(&base, None);

        let body = json!({ "name": "Clean Water Guild" });
        client
            .send("/communities", Method::Post, Some(&body))
            .await
            .expect("send");

        let requests = stub.await.expect("stub");
        assert!(requests[0].contains(r#""name":"Clean Water Guild""#));
    }

    #[tokio::test]
    async fn repeated_sends_issue_independent_requests() {
        let (base, stub) = spawn_stub(r#"{"success":true}"#, 2).await;
        let client = client_for(&base, Some("tok_123"));

        client
            .send("/users/connect/1", Method::Post, None)
            .await
            .expect("first send");
        client
            .send("/users/connect/1", Method::Post, None)
            .await
            .expect("second send");

        let requests = stub.await.expect("stub");
        assert_eq!(requests.len(), 2);
        for request in &requests {
            assert!(request.starts_with("POST /api/users/connect/1 HTTP/1.1"));
        }
    }

    #[tokio::test]
    async fn non_json_body_is_a_malformed_response() {
        let (base, _stub) = spawn_stub("<html>502 Bad Gateway</html>", 1).await;
        let client = client_for(&base, None);

        let err = client
            .send("/users", Method::Get, None)
            .await
            .expect_err("html body must not decode");
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Bind and drop to get a local port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let base = format!("http://{}", listener.local_addr().expect("addr"));
        drop(listener);

        let client = client_for(&base, None);
        let err = client
            .send("/users", Method::Get, None)
            .await
            .expect_err("closed port must not connect");
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn success_flag_splits_accepted_from_rejected() {
        let accepted = outcome_from_value(json!({ "success": true, "users": [] }));
        assert!(matches!(accepted, ActionOutcome::Accepted { .. }));

        let rejected = outcome_from_value(json!({ "success": false, "error": "Already connected" }));
        assert_eq!(
            rejected,
            ActionOutcome::Rejected {
                message: "Already connected".to_string()
            }
        );
    }

    #[test]
    fn missing_success_flag_counts_as_rejection() {
        let outcome = outcome_from_value(json!({ "users": [] }));
        assert!(matches!(outcome, ActionOutcome::Rejected { .. }));
    }

    #[test]
    fn non_boolean_success_counts_as_rejection() {
        let outcome = outcome_from_value(json!({ "success": "yes" }));
        assert!(matches!(outcome, ActionOutcome::Rejected { .. }));
    }

    #[test]
    fn non_object_body_counts_as_rejection() {
        let outcome = outcome_from_value(json!([1, 2, 3]));
        assert_eq!(
            outcome,
            ActionOutcome::Rejected {
                message: GENERIC_REJECTION.to_string()
            }
        );
    }

    #[test]
    fn rejection_without_error_text_gets_generic_message() {
        let outcome = outcome_from_value(json!({ "success": false }));
        assert_eq!(
            outcome,
            ActionOutcome::Rejected {
                message: GENERIC_REJECTION.to_string()
            }
        );
    }

    #[test]
    fn accepted_payload_carries_the_whole_envelope() {
        let outcome = outcome_from_value(json!({ "success": true, "token": "t1" }));
        match outcome {
            ActionOutcome::Accepted { payload } => {
                assert_eq!(payload.get("token").and_then(Value::as_str), Some("t1"));
            }
            ActionOutcome::Rejected { .. } => panic!("expected acceptance"),
        }
    }
}
