//! # Logging
//!
//! File-based structured logging for the client.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and keep the guard alive until exit
//! let _guard = client::logging::init();
//!
//! tracing::info!(path = "/cart/view", duration_ms = 42, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `client=info,warn`)
//! - `SUPERAPP_LOG_DIR`: Directory for the daily-rotated `superapp.log` (default `logs`)
//! - `SUPERAPP_LOG_STDERR`: Also log to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init_with;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment.
///
/// Returns the file writer guard; dropping it flushes and stops file logging.
pub fn init() -> Option<WorkerGuard> {
    init_with(&LogConfig::from_env())
}
