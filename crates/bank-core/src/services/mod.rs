//! Domain services

pub mod client_service;
pub mod pagination;
pub mod rights_service;
pub mod transaction_service;

pub use client_service::ClientService;
pub use pagination::paginate_rights;
pub use rights_service::RightsService;
pub use transaction_service::TransactionService;
