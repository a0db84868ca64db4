//! Repository traits (ports)

pub mod client_repository;
pub mod transaction_repository;

pub use client_repository::ClientRepository;
pub use transaction_repository::TransactionRepository;

#[cfg(test)]
pub use client_repository::MockClientRepository;
#[cfg(test)]
pub use transaction_repository::MockTransactionRepository;
