//! # Order Endpoints
//!
//! Checkout turns the backend cart into an order. Pricing, stock and payment
//! are decided by the backend; the client only submits the delivery address
//! and the chosen payment method.

use shared::dto::envelope::Ack;
use shared::dto::order::{
    CancelOrderRequest, CheckoutRequest, CheckoutResponse, OrderDetail, OrderList, PaymentMethod,
};

use super::client::ApiClient;
use super::response::ApiResponse;
use crate::core::error::Result;
use crate::utils::validation::validate_address;

/// Place an order for the current cart.
#[tracing::instrument(skip(client, address))]
pub async fn checkout(
    client: &ApiClient,
    address: &str,
    payment_method: PaymentMethod,
) -> Result<ApiResponse<CheckoutResponse>> {
    validate_address(address).into_result()?;

    let request = CheckoutRequest {
        address: address.trim().to_string(),
        payment_method,
    };
    client.post("/checkout", &request).await
}

pub async fn list_orders(client: &ApiClient) -> Result<ApiResponse<OrderList>> {
    client.get("/orders").await
}

pub async fn get_order(client: &ApiClient, order_id: i64) -> Result<ApiResponse<OrderDetail>> {
    client.get(&format!("/orders/{}", order_id)).await
}

pub async fn cancel_order(client: &ApiClient, order_id: i64) -> Result<ApiResponse<Ack>> {
    client
        .post("/orders/cancel", &CancelOrderRequest { order_id })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::test_support::{api_with, respond, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_checkout_returns_order_id() {
        let transport =
            MockTransport::new(|_| respond(json!({ "status": "success", "order_id": 501 })));
        let api = api_with(transport.clone(), Some("abc123"));

        let placed = checkout(&api, "  12 MG Road  ", PaymentMethod::Wallet)
            .await
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(placed.order_id, 501);
        assert_eq!(
            transport.last_request().unwrap().body,
            Some(json!({ "address": "12 MG Road", "payment_method": "wallet" }))
        );
    }

    #[tokio::test]
    async fn test_checkout_requires_address() {
        let transport = MockTransport::new(|_| respond(json!({ "status": "success" })));
        let api = api_with(transport.clone(), Some("abc123"));

        let err = checkout(&api, "   ", PaymentMethod::Cod).await.unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("Delivery address is required".to_string())
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_insufficient_balance_is_application_error() {
        let transport = MockTransport::new(|_| {
            respond(json!({ "status": "error", "message": "Insufficient wallet balance" }))
        });
        let api = api_with(transport, Some("abc123"));

        let err = checkout(&api, "12 MG Road", PaymentMethod::Wallet)
            .await
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(err.user_message(), "Insufficient wallet balance");
        assert!(!err.is_authorization());
    }

    #[tokio::test]
    async fn test_get_order() {
        let transport = MockTransport::new(|_| {
            respond(json!({
                "status": "success",
                "order": {
                    "order_id": 501,
                    "status": "preparing",
                    "total_price": 250,
                    "items": [{ "product_id": 11, "name": "Milk", "price": 125, "quantity": 2 }]
                }
            }))
        });
        let api = api_with(transport.clone(), Some("abc123"));

        let detail = get_order(&api, 501).await.unwrap().into_result().unwrap();
        assert_eq!(detail.order.items.len(), 1);
        assert_eq!(transport.last_request().unwrap().path, "/orders/501");
    }
}
