//! # API Client
//!
//! The sole channel between the application and the backend.
//!
//! - Paths are joined to one origin resolved at startup.
//! - Bodies are JSON; `Content-Type: application/json` is always sent.
//! - When a request requires auth and the session holds a token, the token is
//!   sent verbatim as `Authorization` (no `Bearer` prefix). Without a token
//!   the header is omitted.
//! - The body is decoded as an envelope whatever the HTTP status was.

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::dto::envelope::Envelope;
use uuid::Uuid;

use super::response::{ApiFailure, ApiResponse, AuthFailurePolicy};
use super::transport::ReqwestTransport;
use crate::config::ClientConfig;
use crate::core::error::{AppError, Result, SentToken};
use crate::core::service::{HttpMethod, HttpTransport, OutgoingRequest};
use crate::services::session::SessionStore;

/// Per-call options for [`ApiClient::request`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<Value>,
    /// Attach the session token (default `true`)
    pub requires_auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            body: None,
            requires_auth: true,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Option<Value>) -> Self {
        Self {
            method: HttpMethod::Post,
            body,
            ..Self::default()
        }
    }

    /// Send without the `Authorization` header.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

/// HTTP client for the backend API.
///
/// Cheap to clone; clones share the transport and the session.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
    auth_policy: Arc<AuthFailurePolicy>,
}

impl ApiClient {
    pub fn new(
        base_url: impl AsRef<str>,
        transport: Arc<dyn HttpTransport>,
        session: SessionStore,
    ) -> Self {
        Self {
            base_url: Arc::from(base_url.as_ref().trim().trim_end_matches('/')),
            transport,
            session,
            auth_policy: Arc::new(AuthFailurePolicy::default()),
        }
    }

    /// Build a client with the reqwest transport from configuration.
    pub fn from_config(config: &ClientConfig, session: SessionStore) -> Result<Self> {
        let transport = ReqwestTransport::new(config.http_timeout)?;
        Ok(Self::new(&config.api_url, Arc::new(transport), session)
            .with_auth_policy(config.auth_policy()))
    }

    pub fn with_auth_policy(mut self, policy: AuthFailurePolicy) -> Self {
        self.auth_policy = Arc::new(policy);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Absolute URL for a path relative to the origin.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue one request and decode the envelope.
    ///
    /// `Err` means a transport failure (network, timeout, body that is not an
    /// envelope). A backend `status: "error"` comes back as
    /// `Ok(ApiResponse::Failure(..))`.
    #[tracing::instrument(
        name = "api_request",
        skip(self, path, options),
        fields(method = %options.method, path = %path, request_id = tracing::field::Empty)
    )]
    pub async fn request<T>(&self, path: &str, options: RequestOptions) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        let request_id = Uuid::new_v4();
        tracing::Span::current().record("request_id", tracing::field::display(&request_id));

        let authorization = if options.requires_auth {
            self.session.get()
        } else {
            None
        };
        if options.requires_auth && authorization.is_none() {
            tracing::debug!("No session token, sending without Authorization");
        }

        let sent_token = authorization.clone().map(SentToken::new);
        let request = OutgoingRequest {
            request_id,
            method: options.method,
            url: self.url_for(path),
            path: path.to_string(),
            authorization,
            body: options.body,
        };

        let start = Instant::now();
        let raw = self.transport.send(request).await.map_err(|e| {
            tracing::error!(error = %e, duration_ms = start.elapsed().as_millis(), "Request failed");
            e
        })?;
        let duration_ms = start.elapsed().as_millis();

        let envelope = Envelope::<T>::from_value(raw.body).map_err(|e| {
            tracing::error!(
                error = %e,
                http_status = raw.http_status,
                duration_ms,
                "Response is not a valid envelope"
            );
            AppError::Transport(format!("Failed to parse response: {}", e))
        })?;

        match envelope {
            Envelope::Success(payload) => {
                tracing::info!(http_status = raw.http_status, duration_ms, "Request succeeded");
                Ok(ApiResponse::Success(payload))
            }
            Envelope::Error { message } => {
                let kind = self
                    .auth_policy
                    .classify(raw.http_status, message.as_deref());
                tracing::warn!(
                    http_status = raw.http_status,
                    kind = ?kind,
                    message = message.as_deref().unwrap_or(""),
                    duration_ms,
                    "Backend returned an error envelope"
                );
                Ok(ApiResponse::Failure(ApiFailure {
                    kind,
                    message,
                    http_status: raw.http_status,
                    sent_token,
                }))
            }
        }
    }

    /// `GET` an authorized resource.
    pub async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.request(path, RequestOptions::get()).await
    }

    /// `POST` a JSON body with the session token.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + ?Sized,
    {
        let body = to_body(body)?;
        self.request(path, RequestOptions::post(Some(body))).await
    }

    /// `POST` a JSON body without the session token (OTP endpoints).
    pub async fn post_public<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + ?Sized,
    {
        let body = to_body(body)?;
        self.request(path, RequestOptions::post(Some(body)).public())
            .await
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body)
        .map_err(|e| AppError::Validation(format!("Request body is not serializable: {}", e)))
}
