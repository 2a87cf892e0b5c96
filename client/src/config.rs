//! # Client Configuration
//!
//! Configuration is resolved once at startup from environment variables
//! (the binary loads a `.env` file first with `dotenvy`).
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `SUPERAPP_API_URL` | `http://127.0.0.1:5000` | Backend origin every path is joined to |
//! | `SUPERAPP_SESSION_FILE` | `data/session.json` | Durable session token file |
//! | `SUPERAPP_HTTP_TIMEOUT_SECS` | unset (no timeout) | Optional per-request timeout |
//! | `SUPERAPP_AUTH_ERROR_MESSAGES` | built-in list | Comma-separated fragments marking an expired session |

use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::services::api::AuthFailurePolicy;
use crate::utils::envs::{get_env_list, get_env_or, get_env_parse_opt};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SESSION_FILE: &str = "data/session.json";

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://api.example.in`
    pub api_url: String,
    /// Where the session token is persisted
    pub session_file: PathBuf,
    /// Per-request timeout; `None` leaves requests unbounded
    pub http_timeout: Option<Duration>,
    /// Message fragments that mark an error envelope as an expired session.
    /// `None` keeps the built-in list.
    pub auth_error_messages: Option<Vec<String>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            http_timeout: None,
            auth_error_messages: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = get_env_or("SUPERAPP_API_URL", DEFAULT_API_URL);
        let session_file = PathBuf::from(get_env_or("SUPERAPP_SESSION_FILE", DEFAULT_SESSION_FILE));
        let http_timeout = get_env_parse_opt::<u64>("SUPERAPP_HTTP_TIMEOUT_SECS")?
            .map(Duration::from_secs);
        let auth_error_messages = get_env_list("SUPERAPP_AUTH_ERROR_MESSAGES");

        let config = Self {
            api_url,
            session_file,
            http_timeout,
            auth_error_messages,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values, failing fast on startup.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        let Some(rest) = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
        else {
            return Err(AppError::Config(format!(
                "SUPERAPP_API_URL must start with http:// or https:// (got {:?})",
                self.api_url
            )));
        };

        if rest.trim_start_matches('/').is_empty() || rest.starts_with('/') {
            return Err(AppError::Config("SUPERAPP_API_URL has no host".to_string()));
        }

        if self.session_file.as_os_str().is_empty() {
            return Err(AppError::Config("SUPERAPP_SESSION_FILE must not be empty".to_string()));
        }

        if self.http_timeout == Some(Duration::ZERO) {
            return Err(AppError::Config(
                "SUPERAPP_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        if matches!(&self.auth_error_messages, Some(list) if list.is_empty()) {
            return Err(AppError::Config(
                "SUPERAPP_AUTH_ERROR_MESSAGES must list at least one message".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the authorization failure policy for the API client.
    pub fn auth_policy(&self) -> AuthFailurePolicy {
        match &self.auth_error_messages {
            Some(messages) => AuthFailurePolicy::default().with_messages(messages.iter().cloned()),
            None => AuthFailurePolicy::default(),
        }
    }
}
