//! Request and response bodies

pub mod client;
pub mod rights;
pub mod transaction;

pub use client::{ClientResponse, CreateClientRequest, UpdateClientRequest};
pub use rights::{PagedClientRightsDto, RightsQuery};
pub use transaction::TransactionResponse;
