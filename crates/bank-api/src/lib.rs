//! # Bank API
//!
//! REST and GraphQL surface of the bank clients service.

pub mod dto;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
