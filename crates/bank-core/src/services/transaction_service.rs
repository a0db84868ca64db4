// ============================================================================
// Bank Core - Transaction Service
// File: crates/bank-core/src/services/transaction_service.rs
// Description: Records immutable ledger entries against an account balance
// ============================================================================

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{AccountStatus, Balance, Currency, Transaction, TransactionType};
use crate::error::DomainError;
use crate::repositories::TransactionRepository;

pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(transaction_repo: Arc<dyn TransactionRepository>) -> Self {
        Self { transaction_repo }
    }

    /// Apply `amount` to `balance` and persist the resulting entry.
    ///
    /// Credits need an account that accepts deposits, debits one that allows
    /// withdrawals. A debit may not leave the balance negative.
    #[allow(clippy::too_many_arguments)]
    pub async fn record(
        &self,
        account_id: Uuid,
        status: AccountStatus,
        balance: &Balance,
        transaction_type: TransactionType,
        amount: Decimal,
        currency: Currency,
        description: impl Into<String>,
    ) -> Result<Transaction, DomainError> {
        // checked after rounding, a sub-cent amount would post as 0.00
        let movement = Balance::new(amount, currency.clone());
        if movement.amount() <= Decimal::ZERO {
            return Err(DomainError::ValidationError(
                "Transaction amount must be positive".to_string(),
            ));
        }
        balance.ensure_same_currency(&movement)?;

        let balance_after = if transaction_type.is_credit() {
            if !status.can_deposit() {
                return Err(DomainError::IllegalState(format!(
                    "Account {} does not accept deposits ({})",
                    account_id,
                    status.as_str()
                )));
            }
            balance.add(movement.amount())
        } else {
            if !status.can_withdraw() {
                return Err(DomainError::IllegalState(format!(
                    "Account {} does not allow withdrawals ({})",
                    account_id,
                    status.as_str()
                )));
            }
            let remaining = balance.subtract(movement.amount());
            if remaining.is_negative() {
                warn!("Insufficient funds on account {}", account_id);
                return Err(DomainError::InsufficientFunds {
                    balance: balance.to_string(),
                    requested: movement.to_string(),
                });
            }
            remaining
        };

        let transaction = Transaction::new(
            account_id,
            transaction_type,
            movement.amount(),
            currency,
            description,
            balance_after,
        );
        let saved = self.transaction_repo.append(&transaction).await?;

        info!(
            "{} of {} on account {}, balance now {}",
            transaction_type.as_str(),
            movement,
            account_id,
            saved.balance_after()
        );
        Ok(saved)
    }

    pub async fn deposit(
        &self,
        account_id: Uuid,
        status: AccountStatus,
        balance: &Balance,
        amount: Decimal,
    ) -> Result<Transaction, DomainError> {
        let currency = balance.currency().clone();
        self.record(account_id, status, balance, TransactionType::Deposit, amount, currency, "Deposit")
            .await
    }

    pub async fn withdraw(
        &self,
        account_id: Uuid,
        status: AccountStatus,
        balance: &Balance,
        amount: Decimal,
    ) -> Result<Transaction, DomainError> {
        let currency = balance.currency().clone();
        self.record(account_id, status, balance, TransactionType::Withdrawal, amount, currency, "Withdrawal")
            .await
    }

    pub async fn charge_fee(
        &self,
        account_id: Uuid,
        status: AccountStatus,
        balance: &Balance,
        fee: Decimal,
        description: impl Into<String>,
    ) -> Result<Transaction, DomainError> {
        let currency = balance.currency().clone();
        self.record(account_id, status, balance, TransactionType::Fee, fee, currency, description)
            .await
    }

    pub async fn credit_interest(
        &self,
        account_id: Uuid,
        status: AccountStatus,
        balance: &Balance,
        interest: Decimal,
    ) -> Result<Transaction, DomainError> {
        let currency = balance.currency().clone();
        self.record(account_id, status, balance, TransactionType::Interest, interest, currency, "Interest")
            .await
    }

    /// Newest first
    pub async fn history(&self, account_id: &Uuid) -> Result<Vec<Transaction>, DomainError> {
        self.transaction_repo.find_by_account(account_id).await
    }
}
