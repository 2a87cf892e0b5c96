//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the super-app client and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{status, message?, ...payload}` response envelope
//!   - **[`dto::auth`]**: OTP login DTOs
//!   - **[`dto::profile`]**, **[`dto::shop`]**, **[`dto::cart`]**,
//!     **[`dto::order`]**, **[`dto::wallet`]**: per-domain payloads
//! - **[`utils`]**: Display helpers
//!   - **[`utils::format_price`]**: Render an amount in rupees
//!   - **[`utils::mask_phone`]**: Hide the middle digits of a phone number
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** on both sides
//! - Optional request fields are omitted when `None`
//! - Every response is an object with a mandatory `status` field; the payload
//!   fields sit next to it rather than under a `data` key
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::envelope::Envelope;
//! use shared::dto::cart::CartView;
//!
//! let body = serde_json::json!({
//!     "status": "success",
//!     "cart": [],
//!     "total_price": 250
//! });
//!
//! match Envelope::<CartView>::from_value(body).unwrap() {
//!     Envelope::Success(view) => assert_eq!(view.total_price, 250.0),
//!     Envelope::Error { .. } => unreachable!(),
//! }
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
