//! # Order Screens

use async_trait::async_trait;
use shared::dto::order::{Order, OrderSummary};
use shared::utils::format_price;

use super::{describe, Screen};
use crate::app::context::AppContext;
use crate::app::lifecycle::Liveness;
use crate::app::navigation::{Activation, Route};
use crate::app::resource::{RefreshOutcome, Resource};
use crate::core::error::Result;
use crate::services::api::{orders, ApiClient, ApiResponse};

async fn fetch_orders(api: &ApiClient) -> Result<ApiResponse<Vec<OrderSummary>>> {
    Ok(orders::list_orders(api).await?.map(|list| list.orders))
}

async fn fetch_order(api: &ApiClient, order_id: i64) -> Result<ApiResponse<Order>> {
    Ok(orders::get_order(api, order_id).await?.map(|detail| detail.order))
}

#[derive(Clone)]
pub struct OrderListScreen {
    context: AppContext,
    liveness: Liveness,
    orders: Resource<Vec<OrderSummary>>,
}

impl OrderListScreen {
    pub fn new(context: AppContext) -> Self {
        let liveness = Liveness::new();
        Self {
            orders: Resource::new("orders", liveness.clone()),
            context,
            liveness,
        }
    }

    pub fn orders(&self) -> &Resource<Vec<OrderSummary>> {
        &self.orders
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let outcome = self.orders.refresh(fetch_orders(self.context.api())).await;
        self.context.handle_refresh(&outcome);
        outcome
    }

    pub fn open_order(&self, order_id: i64) -> Activation {
        self.context.navigate(Route::OrderDetail(order_id))
    }
}

#[async_trait]
impl Screen for OrderListScreen {
    fn route(&self) -> Route {
        Route::Orders
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
        describe(&self.orders, |orders| match orders.first() {
            Some(latest) => format!(
                "{} orders, latest #{} {} ({})",
                orders.len(),
                latest.order_id,
                latest.status,
                format_price(latest.total_price)
            ),
            None => "No orders yet".to_string(),
        })
    }
}

#[derive(Clone)]
pub struct OrderDetailScreen {
    context: AppContext,
    liveness: Liveness,
    order_id: i64,
    order: Resource<Order>,
}

impl OrderDetailScreen {
    pub fn new(context: AppContext, order_id: i64) -> Self {
        let liveness = Liveness::new();
        Self {
            order: Resource::new("order", liveness.clone()),
            context,
            liveness,
            order_id,
        }
    }

    pub fn order(&self) -> &Resource<Order> {
        &self.order
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let outcome = self
            .order
            .refresh(fetch_order(self.context.api(), self.order_id))
            .await;
        self.context.handle_refresh(&outcome);
        outcome
    }

    /// Ask the backend to cancel; it decides whether the order still can be.
    pub async fn cancel(&self) -> bool {
        let api = self.context.api();
        let outcome = self
            .order
            .mutate(
                orders::cancel_order(api, self.order_id),
                fetch_order(api, self.order_id),
            )
            .await;
        self.context.handle_mutation(&outcome, "Order cancelled")
    }
}

#[async_trait]
impl Screen for OrderDetailScreen {
    fn route(&self) -> Route {
        Route::OrderDetail(self.order_id)
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
        describe(&self.order, |order| {
            format!(
                "Order #{}: {}, {} items, {}",
                order.order_id,
                order.status,
                order.items.iter().map(|i| i.quantity).sum::<u32>(),
                format_price(order.total_price)
            )
        })
    }
}
