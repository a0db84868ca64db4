//! Transaction repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Transaction;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn append(&self, transaction: &Transaction) -> Result<Transaction, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Transaction>, DomainError>;
    /// Newest first
    async fn find_by_account(&self, account_id: &Uuid) -> Result<Vec<Transaction>, DomainError>;
}
