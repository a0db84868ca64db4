//! # Bank Core
//!
//! Domain entities, services, validators and repository traits (ports) for
//! the bank clients service.

pub mod domain;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod services;
pub mod validators;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
