//! External rights store port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::RightsSet;
use crate::error::DomainError;

/// Source of truth for client permissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExternalRightsPort: Send + Sync {
    async fn fetch_client_rights(&self, client_id: &Uuid) -> Result<RightsSet, DomainError>;
    /// Replace the stored set, returning what the store now holds
    async fn update_client_rights(
        &self,
        client_id: &Uuid,
        rights: RightsSet,
    ) -> Result<RightsSet, DomainError>;
}
