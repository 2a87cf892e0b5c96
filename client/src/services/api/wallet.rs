//! # Wallet Endpoints

use shared::dto::envelope::Ack;
use shared::dto::wallet::{TopUpRequest, WalletBalance, WalletTransactions};

use super::client::ApiClient;
use super::response::ApiResponse;
use crate::core::error::Result;
use crate::utils::validation::validate_top_up_amount;

pub async fn get_balance(client: &ApiClient) -> Result<ApiResponse<WalletBalance>> {
    client.get("/wallet/balance").await
}

/// Add money to the wallet. The backend settles the payment.
#[tracing::instrument(skip(client))]
pub async fn top_up(client: &ApiClient, amount: f64) -> Result<ApiResponse<Ack>> {
    validate_top_up_amount(amount).into_result()?;
    client.post("/wallet/topup", &TopUpRequest { amount }).await
}

pub async fn list_transactions(client: &ApiClient) -> Result<ApiResponse<WalletTransactions>> {
    client.get("/wallet/transactions").await
}
