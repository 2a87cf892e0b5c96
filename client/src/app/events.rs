//! # Application Events
//!
//! Events sent from screens and background tasks to the host UI.

use super::navigation::Route;
use super::state::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The current route changed (navigation, redirect, back)
    RouteChanged(Route),
    /// A notification was queued
    Notification(Notification),
    /// An authorized request was rejected; the session has been cleared
    SessionExpired,
    /// OTP verification stored a new session token
    LoggedIn,
    LoggedOut,
}
