//! # Services Module
//!
//! Integrations with the world outside the process.
//!
//! ```text
//! services/
//! ├── storage.rs   - Durable token storage (JSON file, memory)
//! ├── session.rs   - Session Store: the single source of truth for the token
//! └── api/         - Backend HTTP API client and per-domain endpoints
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Screens (app::screens)                │
//! │                                                          │
//! │  ┌──────────────────┐         ┌──────────────────────┐   │
//! │  │  ApiClient       │────────▶│  SessionStore        │   │
//! │  │  (api/client.rs) │  token  │  (session.rs)        │   │
//! │  └────────┬─────────┘         └──────────┬───────────┘   │
//! └───────────┼──────────────────────────────┼───────────────┘
//!             │ HttpTransport                │ TokenStorage
//!             ▼                              ▼
//! ┌─────────────────────┐        ┌──────────────────────────┐
//! │  Backend REST API   │        │  data/session.json       │
//! │  (reqwest)          │        │  { "auth_token": ... }   │
//! └─────────────────────┘        └──────────────────────────┘
//! ```

pub mod api;
pub mod session;
pub mod storage;

pub use api::ApiClient;
pub use session::SessionStore;
pub use storage::{FileTokenStorage, MemoryTokenStorage};
