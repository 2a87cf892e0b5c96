//! # Session Store
//!
//! Single source of truth for the bearer token.
//!
//! The store is opened once per process: it reads the durable copy, then
//! serves `get()` from memory. `set()`, `clear()` and `clear_if()` hold the
//! write lock while they update memory and storage, so the two never
//! disagree after concurrent calls. Storage failures are logged and never
//! surface to callers; the in-memory value stays authoritative for the
//! process.
//!
//! ```rust
//! use client::services::SessionStore;
//!
//! let session = SessionStore::in_memory();
//! session.set("abc123");
//! assert_eq!(session.get().as_deref(), Some("abc123"));
//!
//! session.clear();
//! assert_eq!(session.get(), None);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::service::TokenStorage;
use crate::services::storage::MemoryTokenStorage;

/// Cloneable handle to the process-wide session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Open the store, restoring any token persisted by a previous run.
    pub fn open(storage: Arc<dyn TokenStorage>) -> Self {
        let token = match storage.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore session, starting signed out");
                None
            }
        };

        tracing::info!(restored = token.is_some(), "Session store opened");

        Self {
            storage,
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// A store backed by memory only.
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryTokenStorage::default()))
    }

    /// Current token, if any.
    pub fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Replace the token and persist it.
    pub fn set(&self, token: impl Into<String>) {
        let token = token.into();
        let mut current = self.token.write();
        if let Err(e) = self.storage.store(&token) {
            tracing::warn!(error = %e, "Failed to persist session token");
        }
        *current = Some(token);
        tracing::info!("Session token set");
    }

    /// Remove the token from memory and storage.
    pub fn clear(&self) {
        let mut current = self.token.write();
        let had_token = current.take().is_some();
        self.remove_persisted();
        tracing::info!(had_token, "Session cleared");
    }

    /// Clear the session only while it still holds `token`.
    ///
    /// Returns `false` when the session was already cleared or replaced by a
    /// newer login.
    pub fn clear_if(&self, token: &str) -> bool {
        let mut current = self.token.write();
        if current.as_deref() != Some(token) {
            tracing::debug!(authenticated = current.is_some(), "Session token changed, not clearing");
            return false;
        }
        *current = None;
        self.remove_persisted();
        tracing::info!("Session cleared");
        true
    }

    fn remove_persisted(&self) {
        if let Err(e) = self.storage.remove() {
            tracing::warn!(error = %e, "Failed to delete persisted session token");
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::services::storage::FileTokenStorage;

    struct BrokenStorage;

    impl TokenStorage for BrokenStorage {
        fn load(&self) -> Result<Option<String>> {
            Err(AppError::Storage("disk on fire".to_string()))
        }

        fn store(&self, _token: &str) -> Result<()> {
            Err(AppError::Storage("read-only".to_string()))
        }

        fn remove(&self) -> Result<()> {
            Err(AppError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_set_then_get_returns_exact_token() {
        let session = SessionStore::in_memory();
        session.set("abc123");
        assert_eq!(session.get(), Some("abc123".to_string()));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_clear_removes_token() {
        let session = SessionStore::in_memory();
        session.set("abc123");
        session.clear();
        assert_eq!(session.get(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_if_only_clears_matching_token() {
        let session = SessionStore::in_memory();
        session.set("t1");
        session.set("t2");

        assert!(!session.clear_if("t1"));
        assert_eq!(session.get().as_deref(), Some("t2"));

        assert!(session.clear_if("t2"));
        assert_eq!(session.get(), None);
        assert!(!session.clear_if("t2"));
    }

    #[test]
    fn test_concurrent_set_and_clear_keep_storage_in_step() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = SessionStore::open(Arc::new(FileTokenStorage::new(&path)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let session = session.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        if i % 2 == 0 {
                            session.set(format!("token-{}", i));
                        } else {
                            session.clear();
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let reopened = SessionStore::open(Arc::new(FileTokenStorage::new(&path)));
        assert_eq!(reopened.get(), session.get());
    }

    #[test]
    fn test_clones_share_state() {
        let session = SessionStore::in_memory();
        let other = session.clone();
        session.set("abc123");
        assert_eq!(other.get(), Some("abc123".to_string()));
        other.clear();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn test_token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let first = SessionStore::open(Arc::new(FileTokenStorage::new(&path)));
        first.set("abc123");
        drop(first);

        let reopened = SessionStore::open(Arc::new(FileTokenStorage::new(&path)));
        assert_eq!(reopened.get(), Some("abc123".to_string()));

        reopened.clear();
        let after_logout = SessionStore::open(Arc::new(FileTokenStorage::new(&path)));
        assert_eq!(after_logout.get(), None);
    }

    #[test]
    fn test_storage_failures_do_not_surface() {
        let session = SessionStore::open(Arc::new(BrokenStorage));
        assert_eq!(session.get(), None);

        session.set("abc123");
        assert_eq!(session.get(), Some("abc123".to_string()));

        session.clear();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn test_debug_hides_token() {
        let session = SessionStore::in_memory();
        session.set("abc123");
        assert!(!format!("{:?}", session).contains("abc123"));
    }
}
