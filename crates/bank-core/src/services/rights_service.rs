// ============================================================================
// Bank Core - Rights Service
// File: crates/bank-core/src/services/rights_service.rs
// Description: Read-through cache with write-through updates over the
//              external rights store
// ============================================================================

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::RightsSet;
use crate::error::DomainError;
use crate::ports::ExternalRightsPort;

pub struct RightsService {
    external: Arc<dyn ExternalRightsPort>,
    cache: DashMap<Uuid, RightsSet>,
}

impl RightsService {
    pub fn new(external: Arc<dyn ExternalRightsPort>) -> Self {
        Self {
            external,
            cache: DashMap::new(),
        }
    }

    /// Cached rights, fetched from the external store on a miss.
    /// Empty results are not cached.
    pub async fn get_client_rights(&self, client_id: &Uuid) -> Result<RightsSet, DomainError> {
        if let Some(rights) = self.cache.get(client_id).map(|entry| entry.value().clone()) {
            debug!("Rights cache hit for client {}", client_id);
            return Ok(rights);
        }

        debug!("Rights cache miss for client {}", client_id);
        let rights = self.external.fetch_client_rights(client_id).await?;
        if !rights.is_empty() {
            self.cache.insert(*client_id, rights.clone());
        }
        Ok(rights)
    }

    /// Write through to the external store, then cache the supplied set
    pub async fn update_client_rights(
        &self,
        client_id: &Uuid,
        new_rights: RightsSet,
    ) -> Result<RightsSet, DomainError> {
        info!(
            "Updating rights for client {} ({} permissions)",
            client_id,
            new_rights.len()
        );
        self.external
            .update_client_rights(client_id, new_rights.clone())
            .await?;
        self.cache.insert(*client_id, new_rights.clone());
        Ok(new_rights)
    }

    pub fn invalidate_client_rights_cache(&self, client_id: &Uuid) {
        info!("Invalidating rights cache for client {}", client_id);
        self.cache.remove(client_id);
    }

    pub fn invalidate_all_client_rights_cache(&self) {
        info!("Invalidating rights cache for all clients");
        self.cache.clear();
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::MockExternalRightsPort;

    fn rights(names: &[&str]) -> RightsSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_second_get_is_served_from_cache() {
        let client_id = Uuid::new_v4();
        let mut external = MockExternalRightsPort::new();
        external
            .expect_fetch_client_rights()
            .with(eq(client_id))
            .times(1)
            .returning(|_| Ok(rights(&["MAKE_TRANSFER", "VIEW_ACCOUNT", "VIEW_STATEMENTS"])));

        let service = RightsService::new(Arc::new(external));

        let first = service.get_client_rights(&client_id).await.unwrap();
        let second = service.get_client_rights(&client_id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(service.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_is_not_cached() {
        let client_id = Uuid::new_v4();
        let mut external = MockExternalRightsPort::new();
        external
            .expect_fetch_client_rights()
            .times(2)
            .returning(|_| Ok(RightsSet::new()));

        let service = RightsService::new(Arc::new(external));

        assert!(service.get_client_rights(&client_id).await.unwrap().is_empty());
        assert!(service.get_client_rights(&client_id).await.unwrap().is_empty());
        assert_eq!(service.cached_entries(), 0);
    }

    #[tokio::test]
    async fn test_update_caches_supplied_set() {
        let client_id = Uuid::new_v4();
        let mut external = MockExternalRightsPort::new();
        // The store echoes something else; the supplied set must win
        external
            .expect_update_client_rights()
            .times(1)
            .returning(|_, _| Ok(rights(&["SOMETHING_ELSE"])));
        external.expect_fetch_client_rights().never();

        let service = RightsService::new(Arc::new(external));
        let updated = rights(&["VIEW_ACCOUNT"]);

        service
            .update_client_rights(&client_id, updated.clone())
            .await
            .unwrap();

        assert_eq!(service.get_client_rights(&client_id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_with_empty_set_is_cached() {
        let client_id = Uuid::new_v4();
        let mut external = MockExternalRightsPort::new();
        external
            .expect_update_client_rights()
            .returning(|_, rights| Ok(rights));
        external.expect_fetch_client_rights().never();

        let service = RightsService::new(Arc::new(external));
        service
            .update_client_rights(&client_id, RightsSet::new())
            .await
            .unwrap();

        assert!(service.get_client_rights(&client_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalidation_forces_refetch() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut external = MockExternalRightsPort::new();
        external
            .expect_fetch_client_rights()
            .times(4)
            .returning(|_| Ok(rights(&["VIEW_ACCOUNT"])));

        let service = RightsService::new(Arc::new(external));
        service.get_client_rights(&a).await.unwrap();
        service.get_client_rights(&b).await.unwrap();

        service.invalidate_client_rights_cache(&a);
        assert_eq!(service.cached_entries(), 1);
        service.get_client_rights(&a).await.unwrap();

        service.invalidate_all_client_rights_cache();
        assert_eq!(service.cached_entries(), 0);
        service.get_client_rights(&b).await.unwrap();
    }

    #[tokio::test]
    async fn test_external_failure_propagates() {
        let mut external = MockExternalRightsPort::new();
        external
            .expect_fetch_client_rights()
            .returning(|_| Err(DomainError::ExternalServiceError("down".to_string())));

        let service = RightsService::new(Arc::new(external));
        let result = service.get_client_rights(&Uuid::new_v4()).await;

        assert!(matches!(result, Err(DomainError::ExternalServiceError(_))));
        assert_eq!(service.cached_entries(), 0);
    }
}
