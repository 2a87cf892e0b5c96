//! # Shop Endpoints

use shared::dto::shop::{ShopDetail, ShopList};

use super::client::ApiClient;
use super::response::ApiResponse;
use crate::core::error::Result;

/// Shops near the user.
pub async fn list_shops(client: &ApiClient) -> Result<ApiResponse<ShopList>> {
    client.get("/shops").await
}

/// One shop with its products.
pub async fn get_shop(client: &ApiClient, shop_id: i64) -> Result<ApiResponse<ShopDetail>> {
    client.get(&format!("/shops/{}", shop_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{api_with, respond, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_shop_uses_id_in_path() {
        let transport = MockTransport::new(|_| {
            respond(json!({
                "status": "success",
                "shop": { "id": 3, "name": "Fresh Mart" },
                "products": [{ "id": 11, "name": "Milk", "price": 30 }]
            }))
        });
        let api = api_with(transport.clone(), Some("abc123"));

        let detail = get_shop(&api, 3).await.unwrap().into_result().unwrap();
        assert_eq!(detail.shop.name, "Fresh Mart");
        assert!(detail.shop.is_open);
        assert_eq!(detail.products.len(), 1);
        assert_eq!(detail.products[0].price, 30.0);
        assert_eq!(transport.last_request().unwrap().url, "http://api.test/shops/3");
    }

    #[tokio::test]
    async fn test_list_shops_empty() {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let api = api_with(transport, Some("abc123"));

        let list = list_shops(&api).await.unwrap().into_result().unwrap();
        assert!(list.shops.is_empty());
    }
}
