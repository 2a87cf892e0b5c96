//! # Checkout Screen
//!
//! Shows the cart total and the wallet balance side by side, and places the
//! order. The balance shown is a hint only: the backend decides whether the
//! wallet can pay.

use async_trait::async_trait;
use shared::dto::cart::CartView;
use shared::dto::order::PaymentMethod;
use shared::dto::wallet::WalletBalance;
use shared::utils::format_price;

use super::{describe, Screen};
use crate::app::context::AppContext;
use crate::app::lifecycle::Liveness;
use crate::app::navigation::Route;
use crate::app::resource::{MutationOutcome, Resource};
use crate::app::state::NotificationLevel;
use crate::services::api::{cart, orders, wallet};

#[derive(Clone)]
pub struct CheckoutScreen {
    context: AppContext,
    liveness: Liveness,
    cart: Resource<CartView>,
    balance: Resource<WalletBalance>,
}

impl CheckoutScreen {
    pub fn new(context: AppContext) -> Self {
        let liveness = Liveness::new();
        Self {
            cart: Resource::new("checkout_cart", liveness.clone()),
            balance: Resource::new("checkout_balance", liveness.clone()),
            context,
            liveness,
        }
    }

    pub fn cart(&self) -> &Resource<CartView> {
        &self.cart
    }

    pub fn balance(&self) -> &Resource<WalletBalance> {
        &self.balance
    }

    /// Place the order. On success the cart is re-fetched (the backend empties
    /// it) and the user is taken to the new order. Returns the order id.
    pub async fn place_order(&self, address: &str, payment_method: PaymentMethod) -> Option<i64> {
        if self.cart.with_data(|cart| cart.is_some_and(CartView::is_empty)) {
            self.context
                .notify(NotificationLevel::Warning, "Your cart is empty");
            return None;
        }

        let api = self.context.api();
        let outcome = self
            .cart
            .mutate(
                orders::checkout(api, address, payment_method),
                cart::view_cart(api),
            )
            .await;

        if !self.context.handle_mutation(&outcome, "Order placed") {
            return None;
        }
        let MutationOutcome::Applied { result, .. } = outcome else {
            return None;
        };

        tracing::info!(order_id = result.order_id, payment_method = ?payment_method, "Order placed");
        if payment_method == PaymentMethod::Wallet {
            let refreshed = self.balance.refresh(wallet::get_balance(api)).await;
            self.context.handle_refresh(&refreshed);
        }
        if self.liveness.is_alive() {
            self.context.navigate(Route::OrderDetail(result.order_id));
        }
        Some(result.order_id)
    }
}

#[async_trait]
impl Screen for CheckoutScreen {
    fn route(&self) -> Route {
        Route::Checkout
    }

    fn context(&self) -> &AppContext {
        &self.context
    }

    fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    async fn load(&self) {
        let api = self.context.api();
        let (cart, balance) = tokio::join!(
            self.cart.refresh(cart::view_cart(api)),
            self.balance.refresh(wallet::get_balance(api)),
        );
        self.context.handle_refresh(&cart);
        self.context.handle_refresh(&balance);
    }

    fn summary(&self) -> String {
        let cart = describe(&self.cart, |cart| {
            format!("{} items, total {}", cart.item_count(), format_price(cart.total_price))
        });
        let balance = describe(&self.balance, |b| format!("wallet {}", format_price(b.balance)));
        format!("{}; {}", cart, balance)
    }
}
