//! Adapters for external systems

pub mod rights_adapter;

pub use rights_adapter::InMemoryRightsAdapter;
