//! # Response Envelope
//!
//! Every backend endpoint answers with a JSON object carrying a mandatory
//! `status` discriminator, an optional human-readable `message`, and the
//! endpoint-specific payload fields next to them:
//!
//! ```text
//! { "status": "success", "cart": [...], "total_price": 250 }
//! { "status": "error", "message": "Invalid or expired token" }
//! ```
//!
//! [`Envelope`] turns that duck-typed object into a tagged union so callers
//! cannot read payload fields without first matching on the status.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// A parsed backend response.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// `status: "success"`; `T` is decoded from the whole object.
    Success(T),
    /// `status: "error"`; the payload is not trusted and not decoded.
    Error { message: Option<String> },
}

#[derive(Deserialize)]
struct EnvelopeHeader {
    status: ResponseStatus,
    #[serde(default)]
    message: Option<String>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an envelope from an already parsed JSON value.
    ///
    /// Fails when the value is not an object, has no valid `status`, or when a
    /// success payload does not match `T`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde_json::Error::custom("response body is not a JSON object"));
        }

        let header = EnvelopeHeader::deserialize(&value)?;
        match header.status {
            ResponseStatus::Success => serde_json::from_value(value).map(Envelope::Success),
            ResponseStatus::Error => Ok(Envelope::Error {
                message: header.message,
            }),
        }
    }

    /// Decode an envelope straight from response bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }
}

impl<T> Envelope<T> {
    pub fn status(&self) -> ResponseStatus {
        match self {
            Envelope::Success(_) => ResponseStatus::Success,
            Envelope::Error { .. } => ResponseStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// Map the success payload, keeping error envelopes as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        match self {
            Envelope::Success(payload) => Envelope::Success(f(payload)),
            Envelope::Error { message } => Envelope::Error { message },
        }
    }
}

/// Payload of endpoints that only acknowledge a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Balance {
        balance: f64,
    }

    #[test]
    fn test_success_decodes_payload_next_to_status() {
        let envelope = Envelope::<Balance>::from_value(json!({
            "status": "success",
            "balance": 120.5
        }))
        .unwrap();

        assert_eq!(envelope, Envelope::Success(Balance { balance: 120.5 }));
        assert_eq!(envelope.status(), ResponseStatus::Success);
    }

    #[test]
    fn test_error_keeps_message_and_skips_payload() {
        // Payload fields of an error envelope are not decoded, so a
        // mismatching shape does not fail.
        let envelope = Envelope::<Balance>::from_value(json!({
            "status": "error",
            "message": "Insufficient balance",
            "balance": "n/a"
        }))
        .unwrap();

        assert_eq!(
            envelope,
            Envelope::Error {
                message: Some("Insufficient balance".to_string())
            }
        );
    }

    #[test]
    fn test_error_without_message() {
        let envelope = Envelope::<Ack>::from_value(json!({ "status": "error" })).unwrap();
        assert_eq!(envelope, Envelope::Error { message: None });
    }

    #[test]
    fn test_missing_status_is_rejected() {
        assert!(Envelope::<Ack>::from_value(json!({ "message": "hi" })).is_err());
        assert!(Envelope::<Ack>::from_value(json!({ "status": "pending" })).is_err());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(Envelope::<Ack>::from_value(json!([1, 2, 3])).is_err());
        assert!(Envelope::<Ack>::from_slice(b"<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_ack_accepts_bare_success() {
        let envelope = Envelope::<Ack>::from_slice(br#"{"status":"success"}"#).unwrap();
        assert_eq!(envelope, Envelope::Success(Ack::default()));
    }

    #[test]
    fn test_success_payload_shape_mismatch_is_an_error() {
        let result = Envelope::<Balance>::from_value(json!({ "status": "success" }));
        assert!(result.is_err());
    }
}
