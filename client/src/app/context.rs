//! # App Context
//!
//! What every screen is handed: the API client (and through it the session
//! store), the shared [`AppState`], and the event sender. Screens never read
//! token storage directly.
//!
//! Failures are handled here, at the screen boundary:
//!
//! ```text
//!  AppError ──▶ report_failure()
//!                 ├─ Authorization ─▶ clear session ─▶ redirect to login
//!                 │                   ─▶ SessionExpired + warning
//!                 └─ anything else ──▶ notification with user_message()
//! ```
//!
//! A session is only cleared while it still holds the token the rejected
//! request carried: a late reply for an old token never signs out a newer
//! login. Authorization failures dropped by an unmounted screen still expire
//! the session; other dropped failures are ignored.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use super::events::AppEvent;
use super::navigation::{guard, Activation, Route};
use super::resource::{MutationOutcome, RefreshOutcome};
use super::state::{AppState, Notification, NotificationLevel};
use crate::core::error::{AppError, SentToken};
use crate::services::api::{auth, ApiClient};
use crate::services::session::SessionStore;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

#[derive(Clone)]
pub struct AppContext {
    api: ApiClient,
    state: Arc<RwLock<AppState>>,
    events: Sender<AppEvent>,
}

impl AppContext {
    pub fn new(api: ApiClient, state: Arc<RwLock<AppState>>, events: Sender<AppEvent>) -> Self {
        Self { api, state, events }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    pub fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    pub fn current_route(&self) -> Route {
        self.state.read().current_route()
    }

    /// Run the guard for `route` and move the navigator accordingly.
    pub fn navigate(&self, route: Route) -> Activation {
        let activation = guard(route, self.session());
        let current = {
            let mut state = self.state.write();
            match activation {
                Activation::Allowed(route) => state.navigator.push(route),
                Activation::Redirected { to, .. } => state.navigator.replace(to),
            }
            state.navigator.current()
        };
        self.emit(AppEvent::RouteChanged(current));
        activation
    }

    /// Pop the back-stack, re-checking the guard for the route popped to.
    pub fn back(&self) -> Option<Route> {
        let popped = self.state.write().navigator.back()?;
        if let Activation::Redirected { to, .. } = guard(popped, self.session()) {
            self.state.write().navigator.reset_to(to);
            self.emit(AppEvent::RouteChanged(to));
            return Some(to);
        }
        self.emit(AppEvent::RouteChanged(popped));
        Some(popped)
    }

    pub fn redirect_to_login(&self) {
        self.state.write().navigator.reset_to(Route::Login);
        self.emit(AppEvent::RouteChanged(Route::Login));
    }

    /// Queue a notification for the host.
    pub fn notify(&self, level: NotificationLevel, message: impl Into<String>) {
        let notification = Notification::new(level, message);
        tracing::debug!(
            level = notification.level.as_str(),
            message = %notification.message,
            "Notification"
        );
        self.state.write().push_notification(notification.clone());
        self.emit(AppEvent::Notification(notification));
    }

    /// Send an event to the host. A closed channel only means nobody listens.
    pub fn emit(&self, event: AppEvent) {
        if let Err(e) = self.events.try_send(event) {
            tracing::debug!(error = %e, "Event dropped");
        }
    }

    /// Surface a failure to the user.
    pub fn report_failure(&self, error: &AppError) {
        match error {
            AppError::Authorization { token, .. } => self.expire_session(token.as_ref()),
            AppError::Validation(message) => {
                self.notify(NotificationLevel::Warning, message.clone());
            }
            _ => {
                tracing::error!(error = %error, route = %self.current_route(), "Request failed");
                self.notify(NotificationLevel::Error, error.user_message());
            }
        }
    }

    fn expire_session(&self, rejected: Option<&SentToken>) {
        // Several in-flight requests can fail with the same dead token, and a
        // reply for an old token can land after a new login.
        let cleared = rejected.is_some_and(|token| self.session().clear_if(token.as_str()));
        if !cleared {
            tracing::debug!(
                authenticated = self.session().is_authenticated(),
                "Rejected token is not the current session"
            );
            if !self.session().is_authenticated() && self.current_route().requires_auth() {
                self.redirect_to_login();
            }
            return;
        }

        tracing::warn!(route = %self.current_route(), "Session rejected by backend, signing out");
        self.redirect_to_login();
        self.emit(AppEvent::SessionExpired);
        self.notify(NotificationLevel::Warning, SESSION_EXPIRED_MESSAGE);
    }

    /// Report a failed refresh. Returns `true` when the snapshot was updated.
    pub fn handle_refresh(&self, outcome: &RefreshOutcome) -> bool {
        match outcome {
            RefreshOutcome::Updated => true,
            RefreshOutcome::Failed(e) => {
                self.report_failure(e);
                false
            }
            RefreshOutcome::Discarded(error) => {
                self.handle_dropped(error.as_ref());
                false
            }
        }
    }

    /// A result the screen no longer wants. Only a dead session matters.
    fn handle_dropped(&self, error: Option<&AppError>) {
        if let Some(error) = error.filter(|e| e.is_authorization()) {
            self.report_failure(error);
        }
    }

    /// Report a mutation. On success `success_message` is shown, even when the
    /// follow-up re-fetch failed (that failure is reported too).
    /// Returns `true` when the backend accepted the mutation.
    pub fn handle_mutation<R>(&self, outcome: &MutationOutcome<R>, success_message: &str) -> bool {
        match outcome {
            MutationOutcome::Applied { refresh, .. } => {
                self.notify(NotificationLevel::Success, success_message);
                self.handle_refresh(refresh);
                true
            }
            MutationOutcome::Rejected(e) => {
                self.report_failure(e);
                false
            }
            MutationOutcome::Discarded(error) => {
                self.handle_dropped(error.as_ref());
                false
            }
        }
    }

    /// Store a freshly issued token and leave the login screen.
    pub fn complete_login(&self, token: String, navigate: bool) {
        self.session().set(token);
        self.emit(AppEvent::LoggedIn);
        if navigate {
            self.state.write().navigator.reset_to(Route::HOME);
            self.emit(AppEvent::RouteChanged(Route::HOME));
            self.notify(NotificationLevel::Success, "Logged in");
        }
    }

    /// Log out on the backend (best effort) and drop the session locally.
    pub async fn logout(&self) {
        match auth::logout(&self.api).await.and_then(|r| r.into_result()) {
            Ok(_) => tracing::info!("Logged out"),
            Err(e) => tracing::warn!(error = %e, "Backend logout failed, clearing session anyway"),
        }

        self.session().clear();
        self.redirect_to_login();
        self.emit(AppEvent::LoggedOut);
        self.notify(NotificationLevel::Info, "You have been logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{api_with, respond, MockTransport};
    use serde_json::json;

    fn expired(token: &str) -> AppError {
        AppError::Authorization {
            message: Some("Invalid or expired token".to_string()),
            token: Some(SentToken::new(token)),
        }
    }

    fn context_with(token: Option<&str>) -> (AppContext, async_channel::Receiver<AppEvent>) {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let (tx, rx) = async_channel::unbounded();
        let context = AppContext::new(
            api_with(transport, token),
            Arc::new(RwLock::new(AppState::default())),
            tx,
        );
        (context, rx)
    }

    fn drain(rx: &async_channel::Receiver<AppEvent>) -> Vec<AppEvent> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn test_navigate_redirect_replaces_instead_of_pushing() {
        let (context, rx) = context_with(None);

        let activation = context.navigate(Route::Wallet);
        assert!(!activation.is_allowed());
        assert_eq!(context.current_route(), Route::Login);
        assert!(context.state().read().navigator.history().is_empty());
        assert_eq!(drain(&rx), vec![AppEvent::RouteChanged(Route::Login)]);
    }

    #[test]
    fn test_authorization_failure_clears_session_once() {
        let (context, rx) = context_with(Some("stale"));
        context.navigate(Route::Cart);
        drain(&rx);

        let error = expired("stale");
        context.report_failure(&error);
        context.report_failure(&error);

        assert_eq!(context.session().get(), None);
        assert_eq!(context.current_route(), Route::Login);

        let events = drain(&rx);
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == AppEvent::SessionExpired)
                .count(),
            1
        );
        let state = context.state().read();
        let notes = &state.pending_notifications;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_late_failure_for_old_token_keeps_new_session() {
        let (context, rx) = context_with(Some("t1"));
        context.navigate(Route::Cart);
        context.complete_login("t2".to_string(), true);
        drain(&rx);

        context.report_failure(&expired("t1"));

        assert_eq!(context.session().get().as_deref(), Some("t2"));
        assert_eq!(context.current_route(), Route::HOME);
        assert!(!drain(&rx).contains(&AppEvent::SessionExpired));
    }

    #[test]
    fn test_dropped_authorization_failure_still_expires_session() {
        let (context, rx) = context_with(Some("t1"));
        context.navigate(Route::Cart);

        assert!(!context.handle_refresh(&RefreshOutcome::Discarded(Some(expired("t1")))));

        assert_eq!(context.session().get(), None);
        assert_eq!(context.current_route(), Route::Login);
        assert!(drain(&rx).contains(&AppEvent::SessionExpired));
    }

    #[test]
    fn test_dropped_business_failure_is_silent() {
        let (context, _rx) = context_with(Some("t1"));
        let outcome: MutationOutcome<()> =
            MutationOutcome::Discarded(Some(AppError::Application {
                message: Some("Out of stock".to_string()),
            }));

        assert!(!context.handle_mutation(&outcome, "Cart updated"));
        assert!(context.state().read().pending_notifications.is_empty());
        assert_eq!(context.session().get().as_deref(), Some("t1"));
    }

    #[test]
    fn test_application_failure_notifies_message() {
        let (context, _rx) = context_with(Some("abc123"));
        context.report_failure(&AppError::Application {
            message: Some("Item out of stock".to_string()),
        });
        context.report_failure(&AppError::Transport("timeout".to_string()));

        let state = context.state().read();
        let messages: Vec<_> = state
            .pending_notifications
            .iter()
            .map(|n| (n.level, n.message.as_str()))
            .collect();
        assert_eq!(
            messages,
            vec![
                (NotificationLevel::Error, "Item out of stock"),
                (NotificationLevel::Error, crate::core::error::GENERIC_FAILURE_MESSAGE),
            ]
        );
        assert_eq!(context.session().get().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_back_rechecks_guard() {
        let (context, _rx) = context_with(Some("abc123"));
        context.complete_login("abc123".to_string(), true);
        context.navigate(Route::Cart);
        context.session().clear();

        assert_eq!(context.back(), Some(Route::Login));
        assert!(context.state().read().navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (context, rx) = context_with(Some("abc123"));
        context.logout().await;

        assert!(!context.session().is_authenticated());
        assert_eq!(context.current_route(), Route::Login);
        assert!(drain(&rx).contains(&AppEvent::LoggedOut));
    }
}
