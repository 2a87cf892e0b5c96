use serde::{Deserialize, Serialize};

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub item_id: i64,
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub shop_id: Option<i64>,
}

/// Success payload of `GET /cart/view`.
///
/// `total_price` is computed by the backend and is what the client displays;
/// it is never recomputed from the lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartView {
    #[serde(default)]
    pub cart: Vec<CartItem>,
    pub total_price: f64,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    pub fn item(&self, item_id: i64) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.item_id == item_id)
    }
}

/// `POST /cart/add`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: u32,
}

/// `POST /cart/update`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCartRequest {
    pub item_id: i64,
    pub quantity: u32,
}

/// `POST /cart/remove`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveFromCartRequest {
    pub item_id: i64,
}
