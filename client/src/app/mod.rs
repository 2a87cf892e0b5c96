//! # Application Orchestrator
//!
//! [`App`] wires the session store, the API client and the shared state
//! together and builds screen controllers for routes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Host UI                                │
//! │  - renders screen snapshots and state.read()                │
//! │  - drains AppEvent (route changes, notifications, expiry)   │
//! └───────────────┬───────────────────────────▲─────────────────┘
//!                 │ App::screen(route)        │ async_channel
//!                 ▼                           │ (unbounded)
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Screen (screens::*)                                        │
//! │   activate() ─▶ guard ─▶ load() ─▶ Resource::refresh()     │
//! │   user action ─▶ Resource::mutate() ─▶ re-fetch            │
//! │        │                                                    │
//! │        ▼ failures                                           │
//! │  AppContext::report_failure()                               │
//! │   - Authorization: clear session, redirect to login         │
//! │   - otherwise: notification                                 │
//! └───────────────┬─────────────────────────────────────────────┘
//!                 │ ApiClient (token from SessionStore)
//!                 ▼
//!            Backend REST API
//! ```
//!
//! ## State Management Pattern
//!
//! `Arc<RwLock<AppState>>` holds the navigator and pending notifications.
//! Locks are taken briefly and never held across an `.await`; screen data
//! lives in each screen's own resources, not here.

pub mod context;
pub mod events;
pub mod lifecycle;
pub mod navigation;
pub mod resource;
pub mod screens;
pub mod state;

use std::sync::Arc;

use async_channel::Receiver;
use parking_lot::RwLock;

pub use context::AppContext;
pub use events::AppEvent;
pub use lifecycle::Liveness;
pub use navigation::{guard, Activation, Navigator, Route};
pub use resource::{MutationOutcome, RefreshOutcome, Resource, ResourceSnapshot, ResourceStatus};
pub use screens::Screen;
pub use state::{AppState, Notification, NotificationLevel};

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::services::api::ApiClient;
use crate::services::session::SessionStore;
use crate::services::storage::FileTokenStorage;
use screens::{
    CartScreen, CheckoutScreen, LoginScreen, OrderDetailScreen, OrderListScreen, ProfileScreen,
    ShopDetailScreen, ShopListScreen, WalletScreen,
};

/// Main application
pub struct App {
    pub state: Arc<RwLock<AppState>>,
    event_rx: Receiver<AppEvent>,
    context: AppContext,
}

impl App {
    /// Open the file-backed session and build the reqwest client.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let session = SessionStore::open(Arc::new(FileTokenStorage::new(&config.session_file)));
        let api = ApiClient::from_config(config, session)?;
        tracing::info!(api_url = %api.base_url(), "App initialized");
        Ok(Self::with_api(api))
    }

    /// Build around an existing client (tests, custom transports).
    pub fn with_api(api: ApiClient) -> Self {
        let (event_tx, event_rx) = async_channel::unbounded();
        let state = Arc::new(RwLock::new(AppState::default()));
        if api.session().is_authenticated() {
            state.write().navigator.reset_to(Route::HOME);
        }
        let context = AppContext::new(api, Arc::clone(&state), event_tx);

        Self {
            state,
            event_rx,
            context,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn session(&self) -> &SessionStore {
        self.context.session()
    }

    pub fn current_route(&self) -> Route {
        self.state.read().current_route()
    }

    /// Controller for `route`. Call [`Screen::activate`] on it to run the
    /// guard and load its data.
    pub fn screen(&self, route: Route) -> Box<dyn Screen> {
        let context = self.context.clone();
        match route {
            Route::Login => Box::new(LoginScreen::new(context)),
            Route::Shops => Box::new(ShopListScreen::new(context)),
            Route::ShopDetail(id) => Box::new(ShopDetailScreen::new(context, id)),
            Route::Cart => Box::new(CartScreen::new(context)),
            Route::Checkout => Box::new(CheckoutScreen::new(context)),
            Route::Orders => Box::new(OrderListScreen::new(context)),
            Route::OrderDetail(id) => Box::new(OrderDetailScreen::new(context, id)),
            Route::Wallet => Box::new(WalletScreen::new(context)),
            Route::Profile => Box::new(ProfileScreen::new(context)),
        }
    }

    /// Events received since the last call.
    pub fn drain_events(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Take the notifications waiting to be shown.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }
}
