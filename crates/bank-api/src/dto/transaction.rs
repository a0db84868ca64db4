use bank_core::domain::{Transaction, TransactionType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub balance_after: Decimal,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id(),
            account_id: tx.account_id(),
            transaction_type: tx.transaction_type(),
            amount: tx.amount(),
            currency: tx.currency().code().to_string(),
            timestamp: tx.timestamp(),
            description: tx.description().to_string(),
            balance_after: tx.balance_after().amount(),
        }
    }
}
