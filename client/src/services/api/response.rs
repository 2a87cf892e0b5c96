//! # API Responses
//!
//! [`ApiResponse`] is the client-side view of an envelope: the success
//! payload, or a failure already classified as an ordinary application error
//! or a dead session.
//!
//! How the backend reports an expired session is configurable through
//! [`AuthFailurePolicy`]: a set of HTTP statuses and a list of message
//! fragments matched case-insensitively. The defaults only cover HTTP 401
//! and the backend's "Invalid or expired token"; anything broader comes from
//! configuration.

use crate::core::error::{AppError, Result, SentToken};

/// Kind of an error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A business-level refusal ("Out of stock", "Insufficient balance").
    Application,
    /// The session token was rejected.
    Authorization,
}

/// A `status: "error"` envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub message: Option<String>,
    pub http_status: u16,
    /// Token the failed request carried, if any.
    pub sent_token: Option<SentToken>,
}

impl ApiFailure {
    pub fn into_error(self) -> AppError {
        match self.kind {
            FailureKind::Application => AppError::Application {
                message: self.message,
            },
            FailureKind::Authorization => AppError::Authorization {
                message: self.message,
                token: self.sent_token,
            },
        }
    }
}

/// Result of a request whose body parsed as an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Turn a failure envelope into the matching [`AppError`].
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success(payload) => Ok(payload),
            ApiResponse::Failure(failure) => Err(failure.into_error()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(payload) => ApiResponse::Success(f(payload)),
            ApiResponse::Failure(failure) => ApiResponse::Failure(failure),
        }
    }
}

/// Decides which error envelopes mean "your session is dead".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFailurePolicy {
    statuses: Vec<u16>,
    message_fragments: Vec<String>,
}

impl Default for AuthFailurePolicy {
    fn default() -> Self {
        Self {
            statuses: vec![401],
            message_fragments: vec!["invalid or expired token".to_string()],
        }
    }
}

impl AuthFailurePolicy {
    pub fn new(
        statuses: impl IntoIterator<Item = u16>,
        message_fragments: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
            message_fragments: Vec::new(),
        }
        .with_messages(message_fragments)
    }

    /// Replace the message fragments, keeping the statuses.
    pub fn with_messages(mut self, message_fragments: impl IntoIterator<Item = String>) -> Self {
        self.message_fragments = message_fragments
            .into_iter()
            .map(|fragment| fragment.trim().to_lowercase())
            .filter(|fragment| !fragment.is_empty())
            .collect();
        self
    }

    pub fn is_auth_failure(&self, http_status: u16, message: Option<&str>) -> bool {
        if self.statuses.contains(&http_status) {
            return true;
        }

        let Some(message) = message else {
            return false;
        };
        let message = message.to_lowercase();
        self.message_fragments
            .iter()
            .any(|fragment| message.contains(fragment.as_str()))
    }

    pub fn classify(&self, http_status: u16, message: Option<&str>) -> FailureKind {
        if self.is_auth_failure(http_status, message) {
            FailureKind::Authorization
        } else {
            FailureKind::Application
        }
    }
}
