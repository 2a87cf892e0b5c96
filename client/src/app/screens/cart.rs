//! # Cart Screen
//!
//! Shows the backend's cart. Totals are never recomputed locally: after every
//! change the cart is re-fetched and the server's `total_price` is shown.

use async_trait::async_trait;
use shared::dto::cart::CartView;
use shared::utils::format_price;

use super::{describe, Screen};
use crate::app::context::AppContext;
use crate::app::lifecycle::Liveness;
use crate::app::navigation::{Activation, Route};
use crate::app::resource::{RefreshOutcome, Resource};
use crate::services::api::cart;

#[derive(Clone)]
pub struct CartScreen {
    context: AppContext,
    liveness: Liveness,
    cart: Resource<CartView>,
}

impl CartScreen {
    pub fn new(context: AppContext) -> Self {
        let liveness = Liveness::new();
        Self {
            cart: Resource::new("cart", liveness.clone()),
            context,
            liveness,
        }
    }

    pub fn cart(&self) -> &Resource<CartView> {
        &self.cart
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let outcome = self.cart.refresh(cart::view_cart(self.context.api())).await;
        self.context.handle_refresh(&outcome);
        outcome
    }

    /// Set a line's quantity; zero removes the line.
    pub async fn update_quantity(&self, item_id: i64, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(item_id).await;
        }

        let api = self.context.api();
        let outcome = self
            .cart
            .mutate(
                cart::update_cart_item(api, item_id, quantity),
                cart::view_cart(api),
            )
            .await;
        self.context.handle_mutation(&outcome, "Cart updated")
    }

    pub async fn remove_item(&self, item_id: i64) -> bool {
        let api = self.context.api();
        let outcome = self
            .cart
            .mutate(cart::remove_cart_item(api, item_id), cart::view_cart(api))
            .await;
        self.context.handle_mutation(&outcome, "Item removed")
    }

    /// Go to checkout, unless the cart is known to be empty.
    pub fn proceed_to_checkout(&self) -> Option<Activation> {
        if self.cart.with_data(|cart| cart.map_or(true, CartView::is_empty)) {
            self.context.notify(
                crate::app::state::NotificationLevel::Warning,
                "Your cart is empty",
            );
            return None;
        }
        Some(self.context.navigate(Route::Checkout))
    }
}

#[async_trait]
impl Screen for CartScreen {
    fn route(&self) -> Route {
        Route::Cart
    }

    fn context(&self) -> &AppContext {
        &self.context
    }

    fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    async fn load(&self) {
        self.refresh().await;
    }

    fn summary(&self) -> String {
        describe(&self.cart, |cart| {
            if cart.is_empty() {
                "Your cart is empty".to_string()
            } else {
                format!(
                    "{} items, total {}",
                    cart.item_count(),
                    format_price(cart.total_price)
                )
            }
        })
    }
}
