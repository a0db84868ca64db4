// ============================================================================
// Bank Infrastructure - Cached Client Repository
// File: crates/bank-infrastructure/src/cache/cached_client_repository.rs
// Description: Second-level cache in front of any ClientRepository
// ============================================================================

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use bank_core::domain::Client;
use bank_core::error::DomainError;
use bank_core::repositories::ClientRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CacheKey {
    Listing,
    Client(Uuid),
}

/// Memoizes `find_all` and `find_by_id`. Writes evict the listing and the
/// affected client.
///
/// Every eviction bumps a per-key generation. A read miss only fills the
/// cache if the generation it observed before going to the inner repository
/// is still current, so a fetch that overlapped a write never caches the
/// pre-write row.
pub struct CachedClientRepository<R: ClientRepository> {
    inner: R,
    listing: DashMap<(), Vec<Client>>,
    by_id: DashMap<Uuid, Client>,
    generations: DashMap<CacheKey, u64>,
}

impl<R: ClientRepository> CachedClientRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            listing: DashMap::new(),
            by_id: DashMap::new(),
            generations: DashMap::new(),
        }
    }

    fn generation(&self, key: CacheKey) -> u64 {
        self.generations.get(&key).map(|g| *g).unwrap_or(0)
    }

    /// Runs `fill` only if `key` was not evicted since `seen` was read.
    /// The generation entry stays locked while filling, so an eviction
    /// cannot interleave.
    fn fill_if_current(&self, key: CacheKey, seen: u64, fill: impl FnOnce()) {
        let generation = self.generations.entry(key).or_insert(0);
        if *generation == seen {
            fill();
        } else {
            debug!("Skipping cache fill for {:?}, evicted while loading", key);
        }
    }

    fn bump(&self, key: CacheKey, evict: impl FnOnce()) {
        let mut generation = self.generations.entry(key).or_insert(0);
        *generation += 1;
        evict();
    }

    fn evict(&self, id: &Uuid) {
        self.bump(CacheKey::Listing, || {
            self.listing.remove(&());
        });
        self.bump(CacheKey::Client(*id), || {
            self.by_id.remove(id);
        });
    }
}

#[async_trait]
impl<R: ClientRepository> ClientRepository for CachedClientRepository<R> {
    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        if let Some(clients) = self.listing.get(&()).map(|e| e.value().clone()) {
            debug!("Client listing served from cache");
            return Ok(clients);
        }

        let seen = self.generation(CacheKey::Listing);
        let clients = self.inner.find_all().await?;
        self.fill_if_current(CacheKey::Listing, seen, || {
            self.listing.insert((), clients.clone());
        });
        Ok(clients)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, DomainError> {
        if let Some(client) = self.by_id.get(id).map(|e| e.value().clone()) {
            debug!("Client {} served from cache", id);
            return Ok(Some(client));
        }

        let key = CacheKey::Client(*id);
        let seen = self.generation(key);
        let client = self.inner.find_by_id(id).await?;
        if let Some(found) = &client {
            self.fill_if_current(key, seen, || {
                self.by_id.insert(*id, found.clone());
            });
        }
        Ok(client)
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, DomainError> {
        if self.by_id.contains_key(id) {
            return Ok(true);
        }
        self.inner.exists_by_id(id).await
    }

    async fn save(&self, client: &Client) -> Result<Client, DomainError> {
        let saved = self.inner.save(client).await;
        self.evict(&client.id);
        saved
    }

    async fn delete_by_id(&self, id: &Uuid) -> Result<(), DomainError> {
        let deleted = self.inner.delete_by_id(id).await;
        self.evict(id);
        deleted
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.inner.count().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use tokio::sync::Notify;

    use super::*;
    use crate::memory::InMemoryClientRepository;
    use crate::test_support::client;

    mockall::mock! {
        Inner {}

        #[async_trait]
        impl ClientRepository for Inner {
            async fn find_all(&self) -> Result<Vec<Client>, DomainError>;
            async fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, DomainError>;
            async fn exists_by_id(&self, id: &Uuid) -> Result<bool, DomainError>;
            async fn save(&self, client: &Client) -> Result<Client, DomainError>;
            async fn delete_by_id(&self, id: &Uuid) -> Result<(), DomainError>;
            async fn count(&self) -> Result<u64, DomainError>;
        }
    }

    #[tokio::test]
    async fn test_find_by_id_hits_inner_once() {
        let stored = client();
        let id = stored.id;
        let mut inner = MockInner::new();
        inner
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        inner.expect_exists_by_id().never();

        let repo = CachedClientRepository::new(inner);
        assert!(repo.find_by_id(&id).await.unwrap().is_some());
        assert!(repo.find_by_id(&id).await.unwrap().is_some());
        assert!(repo.exists_by_id(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_writes_evict_listing() {
        let repo = CachedClientRepository::new(InMemoryClientRepository::new());
        let first = repo.save(&client()).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        repo.save(&client()).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 2);

        repo.delete_by_id(&first.id).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        assert!(repo.find_by_id(&first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_is_visible_through_cache() {
        let repo = CachedClientRepository::new(InMemoryClientRepository::new());
        let created = repo.save(&client()).await.unwrap();
        let mut cached = repo.find_by_id(&created.id).await.unwrap().unwrap();

        cached.suspend("review").unwrap();
        repo.save(&cached).await.unwrap();

        let reloaded = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(reloaded.version, 2);
        assert!(!reloaded.is_active());
        assert_eq!(reloaded.status().reason.as_deref(), Some("review"));
    }

    /// Parks the first `find_by_id` after it has read the row, until released.
    struct StallingRepository {
        store: InMemoryClientRepository,
        stall_next_read: AtomicBool,
        read_done: Notify,
        release: Notify,
    }

    #[async_trait]
    impl ClientRepository for StallingRepository {
        async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
            self.store.find_all().await
        }

        async fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, DomainError> {
            let found = self.store.find_by_id(id).await?;
            if self.stall_next_read.swap(false, Ordering::SeqCst) {
                self.read_done.notify_one();
                self.release.notified().await;
            }
            Ok(found)
        }

        async fn exists_by_id(&self, id: &Uuid) -> Result<bool, DomainError> {
            self.store.exists_by_id(id).await
        }

        async fn save(&self, client: &Client) -> Result<Client, DomainError> {
            self.store.save(client).await
        }

        async fn delete_by_id(&self, id: &Uuid) -> Result<(), DomainError> {
            self.store.delete_by_id(id).await
        }

        async fn count(&self) -> Result<u64, DomainError> {
            self.store.count().await
        }
    }

    #[tokio::test]
    async fn test_read_overlapping_a_write_does_not_cache_stale_row() {
        let repo = Arc::new(CachedClientRepository::new(StallingRepository {
            store: InMemoryClientRepository::new(),
            stall_next_read: AtomicBool::new(false),
            read_done: Notify::new(),
            release: Notify::new(),
        }));
        let created = repo.save(&client()).await.unwrap();

        repo.inner.stall_next_read.store(true, Ordering::SeqCst);
        let reader = {
            let repo = Arc::clone(&repo);
            let id = created.id;
            tokio::spawn(async move { repo.find_by_id(&id).await })
        };
        repo.inner.read_done.notified().await;

        let mut suspended = created.clone();
        suspended.suspend("fraud check").unwrap();
        let saved = repo.save(&suspended).await.unwrap();
        assert_eq!(saved.version, 2);

        repo.inner.release.notify_one();
        let in_flight = reader.await.unwrap().unwrap().unwrap();
        assert_eq!(in_flight.version, 1);

        let current = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(current.version, 2);
        assert!(!current.is_active());

        let mut edited = current;
        edited.block("confirmed fraud").unwrap();
        assert_eq!(repo.save(&edited).await.unwrap().version, 3);
    }

    #[tokio::test]
    async fn test_listing_overlapping_a_write_is_not_cached() {
        let repo = CachedClientRepository::new(InMemoryClientRepository::new());
        repo.save(&client()).await.unwrap();

        let seen = repo.generation(CacheKey::Listing);
        let stale = repo.inner.find_all().await.unwrap();
        repo.save(&client()).await.unwrap();
        repo.fill_if_current(CacheKey::Listing, seen, || {
            repo.listing.insert((), stale.clone());
        });

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }
}
