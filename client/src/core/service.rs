//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! - [`HttpTransport`]: moves one fully built request over the wire and
//!   hands back the parsed JSON body with its HTTP status.
//! - [`TokenStorage`]: durable home of the session token.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::error::Result;

/// HTTP methods the backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to be sent: absolute URL, resolved `Authorization`
/// value and JSON body.
#[derive(Clone, PartialEq)]
pub struct OutgoingRequest {
    pub request_id: Uuid,
    pub method: HttpMethod,
    /// Absolute URL (configured origin + path)
    pub url: String,
    /// Path relative to the origin, as the caller passed it
    pub path: String,
    /// Raw session token, without any scheme prefix
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

// Tokens must never end up in logs.
impl fmt::Debug for OutgoingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutgoingRequest")
            .field("request_id", &self.request_id)
            .field("method", &self.method)
            .field("url", &self.url)
            .field("path", &self.path)
            .field(
                "authorization",
                &self.authorization.as_ref().map(|_| "<redacted>"),
            )
            .field("body", &self.body)
            .finish()
    }
}

/// The parsed JSON body of a response together with its HTTP status.
///
/// The status is informational: the backend signals failure through the
/// envelope's `status` field.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub http_status: u16,
    pub body: Value,
}

impl RawResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            http_status: 200,
            body,
        }
    }
}

/// Sends requests to the backend.
///
/// Implementations must return [`AppError::Transport`](super::AppError::Transport)
/// for network failures and for bodies that are not valid JSON, and must not
/// retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse>;
}

/// Durable storage for the session token, keyed by a fixed key.
pub trait TokenStorage: Send + Sync {
    /// Read the stored token, `None` when there is none.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored token.
    fn store(&self, token: &str) -> Result<()>;

    /// Delete the stored token. Deleting a missing token is not an error.
    fn remove(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_authorization() {
        let request = OutgoingRequest {
            request_id: Uuid::nil(),
            method: HttpMethod::Get,
            url: "http://localhost/cart/view".to_string(),
            path: "/cart/view".to_string(),
            authorization: Some("abc123".to_string()),
            body: None,
        };

        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("abc123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }
}
