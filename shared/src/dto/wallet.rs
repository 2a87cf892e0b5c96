use serde::{Deserialize, Serialize};

/// Success payload of `GET /wallet/balance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WalletBalance {
    pub balance: f64,
}

/// `POST /wallet/topup`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopUpRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletTransaction {
    pub id: i64,
    pub amount: f64,
    /// `"credit"` or `"debit"`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Success payload of `GET /wallet/transactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WalletTransactions {
    #[serde(default)]
    pub transactions: Vec<WalletTransaction>,
}
