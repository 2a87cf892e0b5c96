//! # Super App Client - Library Root
//!
//! The client-side layer of a hyperlocal commerce app: OTP login, nearby
//! shops, cart, checkout, order tracking, wallet and profile. The backend
//! owns every business rule; this crate moves requests and shows snapshots
//! of what the backend says.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              client (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - screens, resources, navigation guard      │
//! │  services  - session store, API client, endpoints      │
//! │  core      - AppError, transport/storage traits        │
//! │  config    - environment configuration                 │
//! │  logging   - tracing subscriber with rolling file      │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (reqwest, JSON envelopes)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Dependency Graph
//!
//! ```text
//! app::screens ─▶ app::resource ─▶ services::api ─▶ services::session
//!      │                                 │                 │
//!      └─▶ app::context ─▶ app::navigation                 ▼
//!                                              core::service::TokenStorage
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use client::app::{App, Route, Screen};
//! use client::config::ClientConfig;
//!
//! # async fn run() -> client::core::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let app = App::new(&config)?;
//!
//! let screen = app.screen(Route::Cart);
//! if screen.activate().await.is_allowed() {
//!     println!("{}", screen.summary());
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
