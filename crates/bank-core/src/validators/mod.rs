//! Validators enforcing cross-field rules on domain objects

pub mod client_center_rights_validator;
pub mod service_validator;

pub use client_center_rights_validator::ClientCenterRightsValidator;
pub use service_validator::ServiceValidator;
