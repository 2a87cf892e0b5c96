//! # Data Transfer Objects (DTOs)
//!
//! Request bodies and response payloads for the super-app backend.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response envelope and status discriminator
//! - [`auth`] - OTP send/verify
//! - [`profile`] - Current user profile
//! - [`shop`] - Shop listing and shop detail with products
//! - [`cart`] - Cart view and cart mutations
//! - [`order`] - Checkout, order list, order detail, cancellation
//! - [`wallet`] - Balance, top-up, wallet transactions
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /cart/update
//! Content-Type: application/json
//! Authorization: abc123
//!
//! { "item_id": 7, "quantity": 3 }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "status": "success" }
//! ```

pub mod auth;
pub mod cart;
pub mod envelope;
pub mod order;
pub mod profile;
pub mod shop;
pub mod wallet;

pub use auth::*;
pub use cart::*;
pub use envelope::*;
pub use order::*;
pub use profile::*;
pub use shop::*;
pub use wallet::*;
