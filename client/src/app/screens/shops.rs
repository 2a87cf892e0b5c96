//! # Shop Screens
//!
//! The shop list and a single shop with its products. Adding a product to
//! the cart re-fetches the shop, since stock may have changed.

use async_trait::async_trait;
use shared::dto::shop::{Shop, ShopDetail};
use shared::utils::format_price;

use super::{describe, Screen};
use crate::app::context::AppContext;
use crate::app::lifecycle::Liveness;
use crate::app::navigation::{Activation, Route};
use crate::app::resource::{RefreshOutcome, Resource};
use crate::core::error::Result;
use crate::services::api::{cart, shops, ApiClient, ApiResponse};

async fn fetch_shops(api: &ApiClient) -> Result<ApiResponse<Vec<Shop>>> {
    Ok(shops::list_shops(api).await?.map(|list| list.shops))
}

#[derive(Clone)]
pub struct ShopListScreen {
    context: AppContext,
    liveness: Liveness,
    shops: Resource<Vec<Shop>>,
}

impl ShopListScreen {
    pub fn new(context: AppContext) -> Self {
        let liveness = Liveness::new();
        Self {
            shops: Resource::new("shops", liveness.clone()),
            context,
            liveness,
        }
    }

    pub fn shops(&self) -> &Resource<Vec<Shop>> {
        &self.shops
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let outcome = self.shops.refresh(fetch_shops(self.context.api())).await;
        self.context.handle_refresh(&outcome);
        outcome
    }

    /// Navigate to a shop's page.
    pub fn open_shop(&self, shop_id: i64) -> Activation {
        self.context.navigate(Route::ShopDetail(shop_id))
    }
}

#[async_trait]
impl Screen for ShopListScreen {
    fn route(&self) -> Route {
        Route::Shops
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
        describe(&self.shops, |shops| {
            let open = shops.iter().filter(|s| s.is_open).count();
            format!("{} shops ({} open)", shops.len(), open)
        })
    }
}

#[derive(Clone)]
pub struct ShopDetailScreen {
    context: AppContext,
    liveness: Liveness,
    shop_id: i64,
    detail: Resource<ShopDetail>,
}

impl ShopDetailScreen {
    pub fn new(context: AppContext, shop_id: i64) -> Self {
        let liveness = Liveness::new();
        Self {
            detail: Resource::new("shop_detail", liveness.clone()),
            context,
            liveness,
            shop_id,
        }
    }

    pub fn detail(&self) -> &Resource<ShopDetail> {
        &self.detail
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let outcome = self
            .detail
            .refresh(shops::get_shop(self.context.api(), self.shop_id))
            .await;
        self.context.handle_refresh(&outcome);
        outcome
    }

    pub async fn add_to_cart(&self, product_id: i64, quantity: u32) -> bool {
        let api = self.context.api();
        let outcome = self
            .detail
            .mutate(
                cart::add_to_cart(api, product_id, quantity),
                shops::get_shop(api, self.shop_id),
            )
            .await;
        self.context.handle_mutation(&outcome, "Added to cart")
    }
}

#[async_trait]
impl Screen for ShopDetailScreen {
    fn route(&self) -> Route {
        Route::ShopDetail(self.shop_id)
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
        describe(&self.detail, |detail| {
            let cheapest = detail
                .products
                .iter()
                .map(|p| p.price)
                .fold(None, |min: Option<f64>, price| {
                    Some(min.map_or(price, |m| m.min(price)))
                });
            match cheapest {
                Some(price) => format!(
                    "{}: {} products from {}",
                    detail.shop.name,
                    detail.products.len(),
                    format_price(price)
                ),
                None => format!("{}: no products", detail.shop.name),
            }
        })
    }
}
