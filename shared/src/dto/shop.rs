use serde::{Deserialize, Serialize};

fn default_open() -> bool {
    true
}

/// A shop in the neighbourhood listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default = "default_open")]
    pub is_open: bool,
}

/// Success payload of `GET /shops`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShopList {
    #[serde(default)]
    pub shops: Vec<Shop>,
}

/// A product sold by a shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Success payload of `GET /shops/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopDetail {
    pub shop: Shop,
    #[serde(default)]
    pub products: Vec<Product>,
}
