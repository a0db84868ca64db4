pub mod clients;
pub mod health;
pub mod metrics;
pub mod rights;
pub mod transactions;
