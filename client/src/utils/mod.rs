//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`envs`]**: Reading and parsing environment variables
//! - **[`validation`]**: Input validation (phone, OTP, quantities, amounts)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Display helpers (prices, masked phone numbers)
//! - [`crate::core`]: Core abstractions and error types

pub mod envs;
pub mod validation;
