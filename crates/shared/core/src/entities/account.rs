use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Funds snapshot of a trading account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    pub account_id: String,
    pub balance: Decimal,
    /// Margin and fees held by working orders
    pub frozen: Decimal,
}

impl AccountData {
    pub fn new(account_id: impl Into<String>, balance: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
            frozen: Decimal::ZERO,
        }
    }

    /// Funds free for new orders
    pub fn available(&self) -> Decimal {
        self.balance - self.frozen
    }
}
