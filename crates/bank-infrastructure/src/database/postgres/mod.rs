//! PostgreSQL repository implementations

pub mod client_repo_impl;
pub mod transaction_repo_impl;

pub use client_repo_impl::PgClientRepository;
pub use transaction_repo_impl::PgTransactionRepository;
