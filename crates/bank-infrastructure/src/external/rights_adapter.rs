//! Mock external rights store kept in process memory

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use bank_core::domain::RightsSet;
use bank_core::error::DomainError;
use bank_core::ports::ExternalRightsPort;

/// Unknown clients get the default permissions on first read
pub struct InMemoryRightsAdapter {
    store: DashMap<Uuid, RightsSet>,
    default_permissions: RightsSet,
}

impl InMemoryRightsAdapter {
    pub fn new<I, S>(default_permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default_permissions: RightsSet =
            default_permissions.into_iter().map(Into::into).collect();
        info!(
            "Initializing in-memory rights store with defaults {:?}",
            default_permissions
        );
        Self {
            store: DashMap::new(),
            default_permissions,
        }
    }
}

#[async_trait]
impl ExternalRightsPort for InMemoryRightsAdapter {
    async fn fetch_client_rights(&self, client_id: &Uuid) -> Result<RightsSet, DomainError> {
        debug!("Fetching rights for client {} from external store", client_id);
        let rights = self
            .store
            .entry(*client_id)
            .or_insert_with(|| self.default_permissions.clone())
            .value()
            .clone();
        Ok(rights)
    }

    async fn update_client_rights(
        &self,
        client_id: &Uuid,
        rights: RightsSet,
    ) -> Result<RightsSet, DomainError> {
        debug!("Updating rights for client {} in external store", client_id);
        self.store.insert(*client_id, rights.clone());
        Ok(rights)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bank_shared::constants::DEFAULT_CLIENT_RIGHTS;

    use super::*;

    impl InMemoryRightsAdapter {
        fn len(&self) -> usize {
            self.store.len()
        }
    }

    #[tokio::test]
    async fn test_unknown_client_gets_defaults() {
        let adapter = InMemoryRightsAdapter::new(DEFAULT_CLIENT_RIGHTS);
        let rights = adapter.fetch_client_rights(&Uuid::new_v4()).await.unwrap();

        let names: Vec<&str> = rights.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["MAKE_TRANSFER", "VIEW_ACCOUNT", "VIEW_STATEMENTS"]);
        assert_eq!(adapter.store.len(), 1);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let adapter = InMemoryRightsAdapter::new(DEFAULT_CLIENT_RIGHTS);
        let id = Uuid::new_v4();
        let only_view: RightsSet = ["VIEW_ACCOUNT".to_string()].into_iter().collect();

        adapter.update_client_rights(&id, RightsSet::new()).await.unwrap();
        adapter.update_client_rights(&id, only_view.clone()).await.unwrap();

        assert_eq!(adapter.fetch_client_rights(&id).await.unwrap(), only_view);
    }

    #[tokio::test]
    async fn test_concurrent_first_reads_agree() {
        let adapter = Arc::new(InMemoryRightsAdapter::new(["VIEW_ACCOUNT"]));
        let id = Uuid::new_v4();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let adapter = Arc::clone(&adapter);
                tokio::spawn(async move { adapter.fetch_client_rights(&id).await.unwrap() })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().len(), 1);
        }
        assert_eq!(adapter.len(), 1);
    }
}
