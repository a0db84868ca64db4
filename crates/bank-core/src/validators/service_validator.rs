//! Validator contract

use crate::error::DomainError;

/// Checks a value before a service acts on it
pub trait ServiceValidator<T> {
    fn validate(&self, value: &T) -> Result<(), DomainError>;
}
