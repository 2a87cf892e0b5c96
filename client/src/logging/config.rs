//! Logging configuration from environment variables

use std::path::PathBuf;

use crate::utils::envs::{get_env_opt, get_env_or};

pub const DEFAULT_LOG_FILTER: &str = "client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`
    pub log_file_name: String,
    /// Log level filter (e.g., "client=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "superapp.log".to_string(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_dir: PathBuf::from(get_env_or("SUPERAPP_LOG_DIR", "logs")),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_FILTER),
            log_to_stderr: get_env_opt("SUPERAPP_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(false),
            ..Self::default()
        }
    }

    /// Full path of the current log file (before rotation suffixes)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }
}
