//! # Common Error Types
//!
//! Consolidated error handling for the super-app client.
//!
//! ## Error Categories
//!
//! - **Transport**: network unreachable, timeout, body that is not a JSON
//!   envelope. Never reaches the `status` check.
//! - **Application**: a well-formed envelope with `status: "error"`.
//! - **Authorization**: an application error the auth failure policy
//!   recognises as a dead session. Screens clear the session and send the
//!   user back to login.
//! - **Validation**: input rejected before any request was issued.
//! - **Config** / **Storage**: startup configuration and durable session
//!   storage problems.
//!
//! ## User-facing text
//!
//! [`AppError::user_message`] is what a screen shows: the backend message
//! verbatim when there is one, a generic fallback otherwise.
//!
//! ```rust
//! use client::core::error::{AppError, GENERIC_FAILURE_MESSAGE};
//!
//! let err = AppError::Application { message: Some("Shop is closed".to_string()) };
//! assert_eq!(err.user_message(), "Shop is closed");
//!
//! let err = AppError::Transport("connection refused".to_string());
//! assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
//! ```

use std::fmt;

use thiserror::Error;

/// Shown when the failure carries no message fit for the user.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client-wide error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Network failure, timeout, or a response body that is not a JSON envelope.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered `status: "error"`.
    #[error("Application error: {}", .message.as_deref().unwrap_or("<no message>"))]
    Application { message: Option<String> },

    /// The backend rejected the session token. `token` is the one the
    /// request carried, so a newer session is not torn down by a late reply.
    #[error("Authorization error: {}", .message.as_deref().unwrap_or("<no message>"))]
    Authorization {
        message: Option<String>,
        token: Option<SentToken>,
    },

    /// Input rejected on the client before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    /// Durable session storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Token a request was sent with. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SentToken(String);

impl SentToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SentToken(..)")
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Text to show the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Application { message } | AppError::Authorization { message, .. } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string(),
            AppError::Validation(message) => message.clone(),
            AppError::Transport(_) | AppError::Config(_) | AppError::Storage(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, AppError::Authorization { .. })
    }

    /// Token carried by the request that hit an authorization failure.
    pub fn rejected_token(&self) -> Option<&SentToken> {
        match self {
            AppError::Authorization { token, .. } => token.as_ref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transport(format!("Failed to parse response: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<crate::utils::envs::Error> for AppError {
    fn from(err: crate::utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
