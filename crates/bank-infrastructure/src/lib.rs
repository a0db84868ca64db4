//! # Bank Infrastructure
//!
//! Database, in-memory and cache implementations (adapters) of the core ports.

pub mod cache;
pub mod database;
pub mod external;
pub mod memory;

pub use cache::CachedClientRepository;
pub use database::{create_pool, run_migrations, PgClientRepository, PgTransactionRepository};
pub use external::InMemoryRightsAdapter;
pub use memory::{InMemoryClientRepository, InMemoryTransactionRepository};

#[cfg(test)]
pub(crate) mod test_support;
