//! Ports to systems outside the service

pub mod external_rights_port;

pub use external_rights_port::ExternalRightsPort;

#[cfg(test)]
pub use external_rights_port::MockExternalRightsPort;
