//! In-memory ledger

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use bank_core::domain::Transaction;
use bank_core::error::DomainError;
use bank_core::repositories::TransactionRepository;

#[derive(Default)]
pub struct InMemoryTransactionRepository {
    by_account: DashMap<Uuid, Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn append(&self, transaction: &Transaction) -> Result<Transaction, DomainError> {
        self.by_account
            .entry(transaction.account_id())
            .or_default()
            .push(transaction.clone());
        Ok(transaction.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Transaction>, DomainError> {
        Ok(self
            .by_account
            .iter()
            .find_map(|entry| entry.value().iter().find(|t| t.id() == *id).cloned()))
    }

    async fn find_by_account(&self, account_id: &Uuid) -> Result<Vec<Transaction>, DomainError> {
        let mut history = self
            .by_account
            .get(account_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        // Appended oldest first; stable sort keeps insertion order on equal stamps
        history.reverse();
        history.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        Ok(history)
    }
}
