//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Client not found: {0}")]
    ClientNotFound(Uuid),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: String, requested: String },

    #[error("Client {0} was modified concurrently")]
    ConcurrentModification(Uuid),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
