//! # Bank Core - Domain Module
//!
//! Client aggregate, account value objects and client rights model.

pub mod address;
pub mod contact_details;
pub mod personal_information;
pub mod client_type;
pub mod client_status;
pub mod client;
pub mod account_status;
pub mod balance;
pub mod transaction;
pub mod client_center_rights;

// Re-export all entities and enums
pub use address::Address;
pub use contact_details::ContactDetails;
pub use personal_information::{DocumentType, PersonalInformation};
pub use client_type::ClientType;
pub use client_status::{ClientState, ClientStatus};
pub use client::{Client, ClientChanges};
pub use account_status::AccountStatus;
pub use balance::{Balance, Currency};
pub use transaction::{Transaction, TransactionType};
pub use client_center_rights::{ClientCenterRights, RightsSet};
