//! Cache adapters

pub mod cached_client_repository;

pub use cached_client_repository::CachedClientRepository;
