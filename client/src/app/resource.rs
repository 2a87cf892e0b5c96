//! # Resource Access Pattern
//!
//! Every piece of server data a screen shows goes through a [`Resource`]:
//!
//! ```text
//!            refresh()                 Ok
//!   Idle ─────────────▶ Loading ──────────────▶ Success (snapshot replaced)
//!                          │
//!                          │ error envelope / transport error
//!                          ▼
//!                        Failed (message stored, previous snapshot kept)
//! ```
//!
//! Mutations go through [`Resource::mutate`]: the mutation call, then on
//! success a fresh refresh of the resource. A failed mutation leaves the
//! snapshot untouched.
//!
//! Two guards protect the snapshot from late results:
//! - each refresh takes a generation number and only the newest generation
//!   may write,
//! - nothing is written once the owning screen's [`Liveness`] is unmounted.
//!
//! A dropped result still hands back its error, so session-level handling
//! (a rejected token) runs even when the screen is gone.
//!
//! The slot lock is never held across an `.await`.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;

use super::lifecycle::Liveness;
use crate::core::error::{AppError, Result};
use crate::services::api::ApiResponse;

/// Stage of a resource's load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// What a screen renders: the status, the last good data, and the message of
/// the last failed refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSnapshot<T> {
    pub status: ResourceStatus,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for ResourceSnapshot<T> {
    fn default() -> Self {
        Self {
            status: ResourceStatus::Idle,
            data: None,
            error: None,
        }
    }
}

/// Result of [`Resource::refresh`].
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Snapshot replaced with fresh data.
    Updated,
    /// Request failed; previous data kept.
    Failed(AppError),
    /// Result arrived for an unmounted screen or a superseded refresh.
    /// Carries the error when the dropped result was a failure.
    Discarded(Option<AppError>),
}

/// Result of [`Resource::mutate`].
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<R> {
    /// The backend accepted the mutation; `refresh` is the follow-up re-fetch.
    Applied { result: R, refresh: RefreshOutcome },
    /// The backend (or client-side validation) rejected the mutation.
    Rejected(AppError),
    /// The screen was unmounted before the mutation finished.
    /// Carries the error when the dropped result was a failure.
    Discarded(Option<AppError>),
}

struct Slot<T> {
    snapshot: ResourceSnapshot<T>,
    generation: u64,
}

/// One server-backed value owned by a screen.
pub struct Resource<T> {
    name: &'static str,
    slot: Arc<RwLock<Slot<T>>>,
    liveness: Liveness,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            slot: Arc::clone(&self.slot),
            liveness: self.liveness.clone(),
        }
    }
}

impl<T> Resource<T> {
    pub fn new(name: &'static str, liveness: Liveness) -> Self {
        Self {
            name,
            slot: Arc::new(RwLock::new(Slot {
                snapshot: ResourceSnapshot::default(),
                generation: 0,
            })),
            liveness,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn status(&self) -> ResourceStatus {
        self.slot.read().snapshot.status
    }

    /// Message of the last failed refresh, cleared by the next success.
    pub fn error(&self) -> Option<String> {
        self.slot.read().snapshot.error.clone()
    }

    pub fn has_data(&self) -> bool {
        self.slot.read().snapshot.data.is_some()
    }

    /// Read the current data without cloning it.
    pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        f(self.slot.read().snapshot.data.as_ref())
    }

    /// Run one load cycle with `fetch`.
    ///
    /// `fetch` is not polled when the screen is already unmounted.
    pub async fn refresh<F>(&self, fetch: F) -> RefreshOutcome
    where
        F: Future<Output = Result<ApiResponse<T>>>,
    {
        if !self.liveness.is_alive() {
            return RefreshOutcome::Discarded(None);
        }

        let generation = {
            let mut slot = self.slot.write();
            slot.generation += 1;
            slot.snapshot.status = ResourceStatus::Loading;
            slot.generation
        };
        tracing::debug!(resource = self.name, generation, "Loading");

        let result = fetch.await.and_then(ApiResponse::into_result);

        if !self.liveness.is_alive() {
            tracing::debug!(resource = self.name, generation, "Screen unmounted, result dropped");
            return RefreshOutcome::Discarded(result.err());
        }

        let mut slot = self.slot.write();
        if slot.generation != generation {
            tracing::debug!(
                resource = self.name,
                generation,
                latest = slot.generation,
                "Superseded refresh, result dropped"
            );
            return RefreshOutcome::Discarded(result.err());
        }

        match result {
            Ok(data) => {
                slot.snapshot = ResourceSnapshot {
                    status: ResourceStatus::Success,
                    data: Some(data),
                    error: None,
                };
                tracing::debug!(resource = self.name, generation, "Loaded");
                RefreshOutcome::Updated
            }
            Err(e) => {
                slot.snapshot.status = ResourceStatus::Failed;
                slot.snapshot.error = Some(e.user_message());
                tracing::warn!(resource = self.name, error = %e, "Load failed");
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Run `mutation`; when the backend accepts it, re-fetch with `refetch`.
    ///
    /// Neither future is polled when the screen is already unmounted, and
    /// `refetch` is dropped unpolled when the mutation fails.
    pub async fn mutate<R, M, F>(&self, mutation: M, refetch: F) -> MutationOutcome<R>
    where
        M: Future<Output = Result<ApiResponse<R>>>,
        F: Future<Output = Result<ApiResponse<T>>>,
    {
        if !self.liveness.is_alive() {
            return MutationOutcome::Discarded(None);
        }

        let result = mutation.await.and_then(ApiResponse::into_result);

        if !self.liveness.is_alive() {
            tracing::debug!(resource = self.name, "Screen unmounted, mutation result dropped");
            return MutationOutcome::Discarded(result.err());
        }

        match result {
            Ok(result) => {
                tracing::debug!(resource = self.name, "Mutation applied, re-fetching");
                let refresh = self.refresh(refetch).await;
                MutationOutcome::Applied { result, refresh }
            }
            Err(e) => {
                tracing::warn!(resource = self.name, error = %e, "Mutation rejected");
                MutationOutcome::Rejected(e)
            }
        }
    }
}

impl<T: Clone> Resource<T> {
    pub fn snapshot(&self) -> ResourceSnapshot<T> {
        self.slot.read().snapshot.clone()
    }

    pub fn data(&self) -> Option<T> {
        self.slot.read().snapshot.data.clone()
    }
}
