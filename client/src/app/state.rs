//! # Application State
//!
//! Process-wide UI state shared between the host and the screens: where the
//! user is, and the notifications waiting to be shown.

use chrono::{DateTime, Utc};

use super::navigation::{Navigator, Route};

/// Notifications kept for a host that has not taken them yet; older ones are
/// dropped first.
pub const MAX_PENDING_NOTIFICATIONS: usize = 50;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        }
    }
}

/// A toast-style message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub navigator: Navigator,
    /// Notifications not yet taken by the host, oldest first
    pub pending_notifications: Vec<Notification>,
}

impl AppState {
    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    /// Queue a notification, dropping the oldest past the cap.
    pub fn push_notification(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
        let excess = self
            .pending_notifications
            .len()
            .saturating_sub(MAX_PENDING_NOTIFICATIONS);
        if excess > 0 {
            self.pending_notifications.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_notifications_are_capped() {
        let mut state = AppState::default();
        for i in 0..MAX_PENDING_NOTIFICATIONS + 5 {
            state.push_notification(Notification::new(NotificationLevel::Info, format!("note {}", i)));
        }

        assert_eq!(state.pending_notifications.len(), MAX_PENDING_NOTIFICATIONS);
        assert_eq!(state.pending_notifications[0].message, "note 5");
        assert_eq!(
            state.pending_notifications.last().unwrap().message,
            format!("note {}", MAX_PENDING_NOTIFICATIONS + 4)
        );
    }
}
