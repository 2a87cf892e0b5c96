//! # Screens
//!
//! Screen controllers. Each screen owns its resources and a [`Liveness`]
//! flag; the host renders their snapshots and forwards user actions.
//!
//! ```text
//! screens/
//! ├── login.rs     - Phone + OTP login
//! ├── shops.rs     - Shop list, shop detail with add-to-cart
//! ├── cart.rs      - Cart view, quantity updates, removal
//! ├── checkout.rs  - Cart + wallet summary, place order
//! ├── orders.rs    - Order history, order detail with cancellation
//! ├── wallet.rs    - Balance, transactions, top-up
//! └── profile.rs   - Profile view and update, logout
//! ```
//!
//! Screens are cheap to clone; clones share state, so a host can hand one
//! to `tokio::spawn` and keep rendering from another.

use async_trait::async_trait;

use super::context::AppContext;
use super::lifecycle::Liveness;
use super::navigation::{Activation, Route};
use super::resource::{Resource, ResourceStatus};

pub mod cart;
pub mod checkout;
pub mod login;
pub mod orders;
pub mod profile;
pub mod shops;
pub mod wallet;

pub use cart::CartScreen;
pub use checkout::CheckoutScreen;
pub use login::{LoginPhase, LoginScreen};
pub use orders::{OrderDetailScreen, OrderListScreen};
pub use profile::ProfileScreen;
pub use shops::{ShopDetailScreen, ShopListScreen};
pub use wallet::WalletScreen;

#[async_trait]
pub trait Screen: Send + Sync {
    fn route(&self) -> Route;

    fn context(&self) -> &AppContext;

    fn liveness(&self) -> &Liveness;

    /// Fetch every resource the screen shows.
    async fn load(&self);

    /// One-line text rendering of the screen's state.
    fn summary(&self) -> String;

    /// Run the guard; load only when the route is allowed.
    async fn activate(&self) -> Activation {
        let activation = self.context().navigate(self.route());
        if activation.is_allowed() {
            tracing::info!(route = %self.route(), "Screen activated");
            self.load().await;
        }
        activation
    }

    /// Drop results of requests still in flight.
    fn unmount(&self) {
        tracing::debug!(route = %self.route(), "Screen unmounted");
        self.liveness().unmount();
    }
}

/// Render a resource line: `"Loading..."`, the error, or `render(data)`.
pub(crate) fn describe<T>(resource: &Resource<T>, render: impl FnOnce(&T) -> String) -> String {
    let status = resource.status();
    let error = resource.error();
    resource.with_data(|data| match (status, data, error) {
        (ResourceStatus::Idle, None, _) => "Not loaded".to_string(),
        (ResourceStatus::Loading, None, _) => "Loading...".to_string(),
        (ResourceStatus::Failed, Some(data), Some(error)) => {
            format!("{} (refresh failed: {})", render(data), error)
        }
        (_, Some(data), _) => render(data),
        (_, None, Some(error)) => error,
        (_, None, None) => "No data".to_string(),
    })
}
