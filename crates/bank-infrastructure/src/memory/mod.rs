//! In-memory adapters, used when no database is configured

pub mod client_repo;
pub mod transaction_repo;

pub use client_repo::InMemoryClientRepository;
pub use transaction_repo::InMemoryTransactionRepository;
