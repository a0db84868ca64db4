//! Immutable ledger entries

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Balance, Currency};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    TransferIn,
    TransferOut,
    Fee,
    Interest,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::TransferIn => "TRANSFER_IN",
            TransactionType::TransferOut => "TRANSFER_OUT",
            TransactionType::Fee => "FEE",
            TransactionType::Interest => "INTEREST",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DEPOSIT" => Some(TransactionType::Deposit),
            "WITHDRAWAL" => Some(TransactionType::Withdrawal),
            "TRANSFER_IN" => Some(TransactionType::TransferIn),
            "TRANSFER_OUT" => Some(TransactionType::TransferOut),
            "FEE" => Some(TransactionType::Fee),
            "INTEREST" => Some(TransactionType::Interest),
            _ => None,
        }
    }

    /// Money flowing into the account
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            TransactionType::Deposit | TransactionType::TransferIn | TransactionType::Interest
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: Uuid,
    account_id: Uuid,
    transaction_type: TransactionType,
    amount: Decimal,
    currency: Currency,
    timestamp: DateTime<Utc>,
    description: String,
    balance_after: Balance,
}

impl Transaction {
    pub fn new(
        account_id: Uuid,
        transaction_type: TransactionType,
        amount: Decimal,
        currency: Currency,
        description: impl Into<String>,
        balance_after: Balance,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            transaction_type,
            amount,
            currency,
            timestamp: Utc::now(),
            description: description.into(),
            balance_after,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        account_id: Uuid,
        transaction_type: TransactionType,
        amount: Decimal,
        currency: Currency,
        timestamp: DateTime<Utc>,
        description: String,
        balance_after: Balance,
    ) -> Self {
        Self {
            id,
            account_id,
            transaction_type,
            amount,
            currency,
            timestamp,
            description,
            balance_after,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn account_id(&self) -> Uuid {
        self.account_id
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn balance_after(&self) -> &Balance {
        &self.balance_after
    }
}
