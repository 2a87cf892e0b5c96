//! # Screen Lifecycle
//!
//! A [`Liveness`] flag is created with each screen and flipped once when the
//! screen is unmounted. In-flight requests check it before touching screen
//! state, so results that arrive after the user left are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "is this screen still mounted" flag.
#[derive(Debug, Clone)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the screen as gone. Irreversible.
    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
