//! # Backend API Client Module
//!
//! HTTP client for the super-app backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient: URL joining, Authorization header, envelope decoding
//! ├── transport.rs  - reqwest implementation of HttpTransport
//! ├── response.rs   - ApiResponse tagged union and AuthFailurePolicy
//! ├── auth.rs       - OTP login and logout
//! ├── profile.rs    - Profile view/update
//! ├── shops.rs      - Shop listing and detail
//! ├── cart.rs       - Cart view and mutations
//! ├── orders.rs     - Checkout, order history, cancellation
//! └── wallet.rs     - Balance, top-up, transactions
//! ```
//!
//! Every endpoint function returns `Result<ApiResponse<T>>`: the outer
//! `Result` carries transport failures, the inner [`ApiResponse`] the
//! backend's own success/error verdict.

pub mod auth;
pub mod cart;
pub mod client;
pub mod orders;
pub mod profile;
pub mod response;
pub mod shops;
pub mod transport;
pub mod wallet;

pub use client::{ApiClient, RequestOptions};
pub use response::{ApiFailure, ApiResponse, AuthFailurePolicy, FailureKind};
pub use transport::ReqwestTransport;
