//! # Token Storage
//!
//! Durable backends for the session token.
//!
//! The file backend writes a small JSON document whose fixed key is
//! [`SESSION_TOKEN_KEY`]:
//!
//! ```text
//! { "auth_token": "abc123", "saved_at": "2026-10-17T09:30:00Z" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};
use crate::core::service::TokenStorage;

/// Key the token is stored under.
pub const SESSION_TOKEN_KEY: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    auth_token: String,
    saved_at: DateTime<Utc>,
}

/// Stores the token in a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let file: SessionFile = serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!("Malformed session file {}: {}", self.path.display(), e))
        })?;

        if file.auth_token.is_empty() {
            return Ok(None);
        }
        Ok(Some(file.auth_token))
    }

    fn store(&self, token: &str) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = SessionFile {
            auth_token: token.to_string(),
            saved_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        // Write then rename so a crash never leaves a half-written token.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the token in memory only; for tests and hosts without a disk.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.read().clone())
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}
