//! # Authentication Endpoints
//!
//! OTP login (`/send-otp`, `/verify-otp`) and logout.
//!
//! Both OTP calls are public: they never carry the session token. Storing the
//! token returned by `/verify-otp` is the caller's job, so the login screen
//! decides what happens when it was closed mid-request.

use shared::dto::auth::{SendOtpRequest, VerifyOtpRequest, VerifyOtpResponse};
use shared::dto::envelope::Ack;
use shared::utils::mask_phone;

use super::client::{ApiClient, RequestOptions};
use super::response::ApiResponse;
use crate::core::error::Result;
use crate::utils::validation::{validate_otp, validate_phone};

/// Ask the backend to text a one-time password to `phone`.
#[tracing::instrument(skip(client, phone), fields(phone = %mask_phone(phone)))]
pub async fn send_otp(client: &ApiClient, phone: &str) -> Result<ApiResponse<Ack>> {
    validate_phone(phone).into_result()?;
    tracing::info!("Requesting OTP");

    let request = SendOtpRequest {
        phone: phone.to_string(),
    };
    client.post_public("/send-otp", &request).await
}

/// Exchange phone + OTP for a session token.
#[tracing::instrument(skip(client, phone, otp), fields(phone = %mask_phone(phone)))]
pub async fn verify_otp(
    client: &ApiClient,
    phone: &str,
    otp: &str,
) -> Result<ApiResponse<VerifyOtpResponse>> {
    validate_phone(phone).into_result()?;
    validate_otp(otp).into_result()?;
    tracing::info!("Verifying OTP");

    let request = VerifyOtpRequest {
        phone: phone.to_string(),
        otp: otp.to_string(),
    };
    client.post_public("/verify-otp", &request).await
}

/// Invalidate the token on the backend.
pub async fn logout(client: &ApiClient) -> Result<ApiResponse<Ack>> {
    client.request("/logout", RequestOptions::post(None)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::core::service::HttpMethod;
    use crate::test_support::{api_with, respond, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_verify_otp_returns_token() {
        let transport = MockTransport::new(|_| {
            respond(json!({ "status": "success", "auth_token": "abc123" }))
        });
        let api = api_with(transport.clone(), None);

        let response = verify_otp(&api, "+919876543210", "123456").await.unwrap();
        let payload = response.into_result().unwrap();
        assert_eq!(payload.auth_token, "abc123");
        assert!(!payload.is_new_user);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path, "/verify-otp");
        assert_eq!(
            sent.body,
            Some(json!({ "phone": "+919876543210", "otp": "123456" }))
        );
        assert_eq!(sent.authorization, None);
    }

    #[tokio::test]
    async fn test_invalid_phone_is_rejected_without_request() {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let api = api_with(transport.clone(), None);

        let err = send_otp(&api, "98765").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_short_otp_is_rejected_without_request() {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let api = api_with(transport.clone(), None);

        let err = verify_otp(&api, "+919876543210", "123").await.unwrap_err();
        assert_eq!(err, AppError::Validation("OTP must be 6 digits".to_string()));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_logout_posts_with_token() {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let api = api_with(transport.clone(), Some("abc123"));

        assert!(logout(&api).await.unwrap().is_success());

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.path, "/logout");
        assert_eq!(sent.authorization.as_deref(), Some("abc123"));
        assert_eq!(sent.body, None);
    }
}
