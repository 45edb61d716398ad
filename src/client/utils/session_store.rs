use keyring::Entry;
use log::warn;
use std::path::PathBuf;

use crate::client::services::api_client::CredentialProvider;

const SERVICE: &str = "sdghub";
const USER: &str = "sdghub_session";

fn fallback_enabled() -> bool {
    std::env::var("KEYRING_FALLBACK").unwrap_or_default() == "true"
}

fn fallback_path() -> PathBuf {
    std::path::Path::new("data").join("session_token.txt")
}

pub fn save_session_token(token: &str) -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE, USER);
    match entry.set_password(token) {
        Ok(()) => Ok(()),
        Err(_e) => {
            // Keyring failed. Persist to a local file only when explicitly
            // allowed; otherwise let the caller decide what to do.
            if fallback_enabled() {
                let path = fallback_path();
                if let Some(parent) = path.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }
                std::fs::write(&path, token)?;
                warn!("keyring unavailable, persisted session token to fallback file");
                Ok(())
            } else {
                Err(anyhow::anyhow!("keyring unavailable and file fallback disabled"))
            }
        }
    }
}

pub fn load_session_token() -> Option<String> {
    let entry = Entry::new(SERVICE, USER);
    match entry.get_password() {
        Ok(token) => {
            if token.trim().is_empty() {
                None
            } else {
                Some(token)
            }
        }
        Err(_e) => {
            if fallback_enabled() {
                if let Ok(contents) = std::fs::read_to_string(fallback_path()) {
                    let token = contents.trim().to_string();
                    if !token.is_empty() {
                        return Some(token);
                    }
                }
            }
            None
        }
    }
}

pub fn clear_session_token() -> anyhow::Result<()> {
    let entry = Entry::new(SERVICE, USER);
    let _ = entry.delete_password();
    if fallback_enabled() {
        let path = fallback_path();
        if path.exists() {
            let _ = std::fs::remove_file(&path);
        }
    }
    Ok(())
}

/// Credential source backed by the session store. Reads on every request, so
/// the client picks up logins and logouts without being rebuilt.
pub struct KeyringCredentials;

impl CredentialProvider for KeyringCredentials {
    fn current_token(&self) -> Option<String> {
        load_session_token()
    }
}
