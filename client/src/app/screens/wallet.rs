//! # Wallet Screen
//!
//! Balance and transaction history. A top-up re-fetches both.

use async_trait::async_trait;
use shared::dto::wallet::{WalletBalance, WalletTransaction};
use shared::utils::format_price;

use super::{describe, Screen};
use crate::app::context::AppContext;
use crate::app::lifecycle::Liveness;
use crate::app::navigation::Route;
use crate::app::resource::Resource;
use crate::core::error::Result;
use crate::services::api::{wallet, ApiClient, ApiResponse};

async fn fetch_transactions(api: &ApiClient) -> Result<ApiResponse<Vec<WalletTransaction>>> {
    Ok(wallet::list_transactions(api)
        .await?
        .map(|history| history.transactions))
}

#[derive(Clone)]
pub struct WalletScreen {
    context: AppContext,
    liveness: Liveness,
    balance: Resource<WalletBalance>,
    transactions: Resource<Vec<WalletTransaction>>,
}

impl WalletScreen {
    pub fn new(context: AppContext) -> Self {
        let liveness = Liveness::new();
        Self {
            balance: Resource::new("wallet_balance", liveness.clone()),
            transactions: Resource::new("wallet_transactions", liveness.clone()),
            context,
            liveness,
        }
    }

    pub fn balance(&self) -> &Resource<WalletBalance> {
        &self.balance
    }

    pub fn transactions(&self) -> &Resource<Vec<WalletTransaction>> {
        &self.transactions
    }

    pub async fn top_up(&self, amount: f64) -> bool {
        let api = self.context.api();
        let outcome = self
            .balance
            .mutate(wallet::top_up(api, amount), wallet::get_balance(api))
            .await;
        let applied = self.context.handle_mutation(
            &outcome,
            &format!("Added {} to your wallet", format_price(amount)),
        );

        if applied {
            let refreshed = self.transactions.refresh(fetch_transactions(api)).await;
            self.context.handle_refresh(&refreshed);
        }
        applied
    }
}

#[async_trait]
impl Screen for WalletScreen {
    fn route(&self) -> Route {
        Route::Wallet
    }

    fn context(&self) -> &AppContext {
        &self.context
    }

    fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    async fn load(&self) {
        let api = self.context.api();
        let (balance, transactions) = tokio::join!(
            self.balance.refresh(wallet::get_balance(api)),
            self.transactions.refresh(fetch_transactions(api)),
        );
        self.context.handle_refresh(&balance);
        self.context.handle_refresh(&transactions);
    }

    fn summary(&self) -> String {
        let balance = describe(&self.balance, |b| format!("Balance {}", format_price(b.balance)));
        let transactions = describe(&self.transactions, |t| format!("{} transactions", t.len()));
        format!("{}; {}", balance, transactions)
    }
}
