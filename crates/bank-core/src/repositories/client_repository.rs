//! Client repository trait (port)

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Client;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, DomainError>;
    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, DomainError>;
    /// Insert or update. Updates must carry the stored version.
    async fn save(&self, client: &Client) -> Result<Client, DomainError>;
    /// Removing an unknown id is not an error
    async fn delete_by_id(&self, id: &Uuid) -> Result<(), DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
}

#[async_trait]
impl<T: ClientRepository + ?Sized> ClientRepository for Arc<T> {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, DomainError> {
        (**self).find_by_id(id).await
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, DomainError> {
        (**self).exists_by_id(id).await
    }

    async fn save(&self, client: &Client) -> Result<Client, DomainError> {
        (**self).save(client).await
    }

    async fn delete_by_id(&self, id: &Uuid) -> Result<(), DomainError> {
        (**self).delete_by_id(id).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        (**self).count().await
    }
}
