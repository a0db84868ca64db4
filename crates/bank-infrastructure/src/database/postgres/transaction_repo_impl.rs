// ============================================================================
// Bank Infrastructure - PostgreSQL Transaction Repository
// File: crates/bank-infrastructure/src/database/postgres/transaction_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use bank_core::domain::{Balance, Currency, Transaction, TransactionType};
use bank_core::error::DomainError;
use bank_core::repositories::TransactionRepository;

pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TransactionRow {
    pub id: Uuid,
    pub account_id: Uuid,
    pub transaction_type: String,
    pub amount: Decimal,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub balance_after: Decimal,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = DomainError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let transaction_type = TransactionType::from_str(&row.transaction_type).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "Unknown transaction type: {}",
                row.transaction_type
            ))
        })?;
        let currency = Currency::new(row.currency.trim())?;

        Ok(Transaction::restore(
            row.id,
            row.account_id,
            transaction_type,
            row.amount,
            currency.clone(),
            row.timestamp,
            row.description,
            Balance::new(row.balance_after, currency),
        ))
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn append(&self, transaction: &Transaction) -> Result<Transaction, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, account_id, transaction_type, amount, currency,
                timestamp, description, balance_after
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(transaction.id())
        .bind(transaction.account_id())
        .bind(transaction.transaction_type().as_str())
        .bind(transaction.amount())
        .bind(transaction.currency().code())
        .bind(transaction.timestamp())
        .bind(transaction.description())
        .bind(transaction.balance_after().amount())
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error inserting transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(transaction.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Transaction>, DomainError> {
        let row: Option<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, account_id, transaction_type, amount, currency,
                   timestamp, description, balance_after
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Transaction::try_from).transpose()
    }

    async fn find_by_account(&self, account_id: &Uuid) -> Result<Vec<Transaction>, DomainError> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, account_id, transaction_type, amount, currency,
                   timestamp, description, balance_after
            FROM transactions
            WHERE account_id = $1
            ORDER BY timestamp DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing transactions: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(Transaction::try_from).collect()
    }
}
