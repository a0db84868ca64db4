//! # Bank Shared
//!
//! Shared configuration, telemetry, metrics and common types for the bank
//! clients service.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;
pub mod metrics;

pub use types::*;
pub use error::AppError;
pub use metrics::ClientMetrics;
