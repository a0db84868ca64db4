//! DashMap-backed client store with the same version rules as Postgres

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use bank_core::domain::Client;
use bank_core::error::DomainError;
use bank_core::repositories::ClientRepository;

#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: DashMap<Uuid, Client>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        let mut clients: Vec<Client> = self.clients.iter().map(|e| e.value().clone()).collect();
        clients.sort_by_key(|c| c.created_at);
        Ok(clients)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, DomainError> {
        Ok(self.clients.get(id).map(|e| e.value().clone()))
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, DomainError> {
        Ok(self.clients.contains_key(id))
    }

    async fn save(&self, client: &Client) -> Result<Client, DomainError> {
        let mut saved = client.clone();
        match self.clients.entry(client.id) {
            Entry::Occupied(mut entry) => {
                if entry.get().version != client.version {
                    warn!("Stale version {} for client {}", client.version, client.id);
                    return Err(DomainError::ConcurrentModification(client.id));
                }
                saved.version = client.version + 1;
                entry.insert(saved.clone());
            }
            Entry::Vacant(entry) => {
                if client.version != 0 {
                    warn!("Client {} vanished before update", client.id);
                    return Err(DomainError::ConcurrentModification(client.id));
                }
                saved.version = 1;
                entry.insert(saved.clone());
            }
        }
        debug!("Client stored in memory: {}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &Uuid) -> Result<(), DomainError> {
        self.clients.remove(id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.clients.len() as u64)
    }
}
