//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Seams to the outside world (`HttpTransport`, `TokenStorage`)
//!
//! ## Error Handling
//!
//! All errors in the client use the centralized [`AppError`] type:
//!
//! ```rust
//! use client::core::error::{AppError, Result};
//!
//! fn require_address(address: &str) -> Result<&str> {
//!     if address.trim().is_empty() {
//!         return Err(AppError::Validation("Delivery address is required".to_string()));
//!     }
//!     Ok(address)
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! The API client talks to the network only through [`HttpTransport`] and the
//! session store persists only through [`TokenStorage`]:
//!
//! ```rust,ignore
//! // In production: reqwest and a JSON file
//! let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(None)?);
//! let storage: Arc<dyn TokenStorage> = Arc::new(FileTokenStorage::new("data/session.json"));
//!
//! // In tests: scripted responses and memory
//! let transport: Arc<dyn HttpTransport> = Arc::new(MockTransport::new(handler));
//! let storage: Arc<dyn TokenStorage> = Arc::new(MemoryTokenStorage::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result, SentToken, GENERIC_FAILURE_MESSAGE};
pub use service::{HttpMethod, HttpTransport, OutgoingRequest, RawResponse, TokenStorage};
