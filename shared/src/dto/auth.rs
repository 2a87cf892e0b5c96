use serde::{Deserialize, Serialize};

/// `POST /send-otp`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendOtpRequest {
    pub phone: String,
}

/// `POST /verify-otp`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub otp: String,
}

/// Success payload of `/verify-otp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpResponse {
    /// Opaque session token, sent back verbatim as the `Authorization` header.
    pub auth_token: String,
    #[serde(default)]
    pub is_new_user: bool,
}
