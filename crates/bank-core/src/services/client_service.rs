// ============================================================================
// Bank Core - Client Service
// File: crates/bank-core/src/services/client_service.rs
// Description: CRUD orchestration over the Client aggregate, delegating
//              rights to the RightsService
// ============================================================================

use std::sync::Arc;

use bank_shared::utils::mask_email;
use bank_shared::ClientMetrics;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::RightsService;
use crate::domain::{Client, ClientChanges, RightsSet};
use crate::error::DomainError;
use crate::repositories::ClientRepository;

/// Client service. Every operation is timed through `ClientMetrics`.
pub struct ClientService {
    client_repo: Arc<dyn ClientRepository>,
    rights_service: Arc<RightsService>,
    metrics: ClientMetrics,
}

impl ClientService {
    pub fn new(
        client_repo: Arc<dyn ClientRepository>,
        rights_service: Arc<RightsService>,
        metrics: ClientMetrics,
    ) -> Self {
        Self {
            client_repo,
            rights_service,
            metrics,
        }
    }

    pub async fn get_all_clients(&self) -> Result<Vec<Client>, DomainError> {
        self.metrics
            .observe("get_all_clients", async {
                let clients = self.client_repo.find_all().await?;
                self.metrics.set_active_clients(clients.len());
                Ok(clients)
            })
            .await
    }

    pub async fn get_client_by_id(&self, id: &Uuid) -> Result<Option<Client>, DomainError> {
        self.metrics
            .observe("get_client_by_id", self.client_repo.find_by_id(id))
            .await
    }

    pub async fn create_client(&self, client: Client) -> Result<Client, DomainError> {
        self.metrics
            .observe("create_client", async {
                client.validate()?;
                info!(
                    "Creating client {} ({})",
                    client.id,
                    mask_email(&client.contact_details.email)
                );
                let saved = self.client_repo.save(&client).await?;
                self.metrics.increment_client_creation();
                Ok(saved)
            })
            .await
    }

    /// `None` when no client has this id
    pub async fn update_client(
        &self,
        id: &Uuid,
        changes: ClientChanges,
    ) -> Result<Option<Client>, DomainError> {
        self.metrics
            .observe("update_client", async {
                changes.validate()?;
                let Some(mut client) = self.client_repo.find_by_id(id).await? else {
                    warn!("Update skipped, client not found: {}", id);
                    return Ok(None);
                };

                client.apply_changes(changes);
                let saved = self.client_repo.save(&client).await?;
                self.metrics.increment_client_update();
                info!("Client updated: {}", id);
                Ok(Some(saved))
            })
            .await
    }

    pub async fn delete_client(&self, id: &Uuid) -> Result<(), DomainError> {
        self.metrics
            .observe("delete_client", async {
                self.client_repo.delete_by_id(id).await?;
                self.metrics.increment_client_deletion();
                info!("Client deleted: {}", id);
                Ok(())
            })
            .await
    }

    /// `None` when the client does not exist
    pub async fn get_client_rights(&self, client_id: &Uuid) -> Result<Option<RightsSet>, DomainError> {
        self.metrics
            .observe("get_client_rights", async {
                if !self.client_repo.exists_by_id(client_id).await? {
                    return Ok(None);
                }
                self.rights_service.get_client_rights(client_id).await.map(Some)
            })
            .await
    }

    pub async fn update_client_rights(
        &self,
        client_id: &Uuid,
        new_rights: RightsSet,
    ) -> Result<RightsSet, DomainError> {
        self.metrics
            .observe("update_client_rights", async {
                let rights = self
                    .rights_service
                    .update_client_rights(client_id, new_rights)
                    .await?;
                self.metrics.increment_client_rights_update();
                Ok(rights)
            })
            .await
    }

    pub async fn client_exists(&self, id: &Uuid) -> Result<bool, DomainError> {
        self.client_repo.exists_by_id(id).await
    }

    /// Probe used by readiness checks
    pub async fn count_clients(&self) -> Result<u64, DomainError> {
        self.client_repo.count().await
    }
}
