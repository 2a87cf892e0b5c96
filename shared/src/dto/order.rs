use serde::{Deserialize, Serialize};

/// How the customer pays at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Wallet,
    Upi,
    /// Cash on delivery
    Cod,
}

/// `POST /checkout`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub address: String,
    pub payment_method: PaymentMethod,
}

/// Success payload of `/checkout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutResponse {
    pub order_id: i64,
}

/// One row of the order history.
///
/// `status` is whatever the backend reports (`"placed"`, `"out_for_delivery"`,
/// ...); the client only displays it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    pub order_id: i64,
    pub status: String,
    pub total_price: f64,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Success payload of `GET /orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderList {
    #[serde(default)]
    pub orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: i64,
    pub status: String,
    pub total_price: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Success payload of `GET /orders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
}

/// `POST /orders/cancel`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelOrderRequest {
    pub order_id: i64,
}
