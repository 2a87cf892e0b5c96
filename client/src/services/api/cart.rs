//! # Cart Endpoints
//!
//! The cart lives on the backend. None of these calls return the new cart:
//! after a successful mutation the caller re-fetches `/cart/view`.

use shared::dto::cart::{AddToCartRequest, CartView, RemoveFromCartRequest, UpdateCartRequest};
use shared::dto::envelope::Ack;

use super::client::ApiClient;
use super::response::ApiResponse;
use crate::core::error::Result;
use crate::utils::validation::validate_quantity;

pub async fn view_cart(client: &ApiClient) -> Result<ApiResponse<CartView>> {
    client.get("/cart/view").await
}

pub async fn add_to_cart(
    client: &ApiClient,
    product_id: i64,
    quantity: u32,
) -> Result<ApiResponse<Ack>> {
    validate_quantity(quantity).into_result()?;
    client
        .post("/cart/add", &AddToCartRequest { product_id, quantity })
        .await
}

/// Set the quantity of a cart line. Use [`remove_cart_item`] to drop it.
pub async fn update_cart_item(
    client: &ApiClient,
    item_id: i64,
    quantity: u32,
) -> Result<ApiResponse<Ack>> {
    validate_quantity(quantity).into_result()?;
    client
        .post("/cart/update", &UpdateCartRequest { item_id, quantity })
        .await
}

pub async fn remove_cart_item(client: &ApiClient, item_id: i64) -> Result<ApiResponse<Ack>> {
    client
        .post("/cart/remove", &RemoveFromCartRequest { item_id })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::test_support::{api_with, respond, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_view_cart() {
        let transport = MockTransport::new(|_| {
            respond(json!({
                "status": "success",
                "cart": [
                    { "item_id": 1, "product_id": 11, "name": "Milk", "price": 30, "quantity": 2 }
                ],
                "total_price": 60
            }))
        });
        let api = api_with(transport, Some("abc123"));

        let cart = view_cart(&api).await.unwrap().into_result().unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_price, 60.0);
    }

    #[tokio::test]
    async fn test_update_sends_item_and_quantity() {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let api = api_with(transport.clone(), Some("abc123"));

        assert!(update_cart_item(&api, 42, 3).await.unwrap().is_success());

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path, "/cart/update");
        assert_eq!(sent.body, Some(json!({ "item_id": 42, "quantity": 3 })));
    }

    #[tokio::test]
    async fn test_zero_quantity_is_rejected() {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let api = api_with(transport.clone(), Some("abc123"));

        let err = add_to_cart(&api, 11, 0).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_remove_item() {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let api = api_with(transport.clone(), Some("abc123"));

        remove_cart_item(&api, 42).await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().body,
            Some(json!({ "item_id": 42 }))
        );
    }
}
