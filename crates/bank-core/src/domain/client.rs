// ============================================================================
// Bank Core - Client Aggregate
// File: crates/bank-core/src/domain/client.rs
// Description: Client entity with its embedded status state machine
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{
    Address, ClientState, ClientStatus, ClientType, ContactDetails, PersonalInformation,
};
use crate::error::DomainError;

/// Client entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    #[validate(nested)]
    pub personal_information: PersonalInformation,

    #[validate(nested)]
    pub address: Address,

    #[validate(nested)]
    pub contact_details: ContactDetails,

    pub client_type: ClientType,

    status: ClientStatus,

    pub created_at: DateTime<Utc>,

    /// Optimistic locking counter, 0 until first persisted
    pub version: i64,
}

/// Mutable part of a client accepted by an update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientChanges {
    #[validate(nested)]
    pub address: Address,

    #[validate(nested)]
    pub contact_details: ContactDetails,

    pub client_type: ClientType,
}

impl Client {
    /// Create a new client pending verification
    pub fn new(
        personal_information: PersonalInformation,
        address: Address,
        contact_details: ContactDetails,
        client_type: ClientType,
    ) -> Result<Self, DomainError> {
        let client = Self {
            id: Uuid::new_v4(),
            personal_information,
            address,
            contact_details,
            client_type,
            status: ClientStatus::new(ClientState::PendingVerification, "New client registration"),
            created_at: Utc::now(),
            version: 0,
        };

        client.validate()?;
        Ok(client)
    }

    /// Rebuild a client from storage
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        personal_information: PersonalInformation,
        address: Address,
        contact_details: ContactDetails,
        client_type: ClientType,
        status: ClientStatus,
        created_at: DateTime<Utc>,
        version: i64,
    ) -> Self {
        Self {
            id,
            personal_information,
            address,
            contact_details,
            client_type,
            status,
            created_at,
            version,
        }
    }

    pub fn status(&self) -> &ClientStatus {
        &self.status
    }

    pub fn state(&self) -> ClientState {
        self.status.status
    }

    pub fn is_active(&self) -> bool {
        self.status.status == ClientState::Active
    }

    /// Copy address, contact details and type. Id and status stay untouched.
    pub fn apply_changes(&mut self, changes: ClientChanges) {
        self.address = changes.address;
        self.contact_details = changes.contact_details;
        self.client_type = changes.client_type;
    }

    pub fn verify(&mut self) -> Result<(), DomainError> {
        if self.status.status != ClientState::PendingVerification {
            return Err(DomainError::IllegalState(
                "Client is not pending verification".to_string(),
            ));
        }
        self.status
            .update_status(ClientState::Active, "Client verified successfully");
        Ok(())
    }

    pub fn suspend(&mut self, reason: impl Into<String>) -> Result<(), DomainError> {
        if self.status.status == ClientState::Suspended {
            return Err(DomainError::IllegalState("Client is already suspended".to_string()));
        }
        self.status.update_status(ClientState::Suspended, reason);
        Ok(())
    }

    pub fn block(&mut self, reason: impl Into<String>) -> Result<(), DomainError> {
        if self.status.status == ClientState::Blocked {
            return Err(DomainError::IllegalState("Client is already blocked".to_string()));
        }
        self.status.update_status(ClientState::Blocked, reason);
        Ok(())
    }

    pub fn activate(&mut self, reason: impl Into<String>) -> Result<(), DomainError> {
        if self.status.status == ClientState::Active {
            return Err(DomainError::IllegalState("Client is already active".to_string()));
        }
        self.status.update_status(ClientState::Active, reason);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    use super::*;
    use crate::domain::DocumentType;

    pub fn address() -> Address {
        Address::new("Gran Via 1", "Madrid", "Madrid", "Spain", "28013").unwrap()
    }

    pub fn contact_details() -> ContactDetails {
        let email = format!("client{}@example.com", (1000..99999).fake::<u32>());
        ContactDetails::new(email, "+34600111222", None).unwrap()
    }

    pub fn personal_information() -> PersonalInformation {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        PersonalInformation::new(
            first,
            last,
            "12345678Z",
            DocumentType::Dni,
            NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
        )
        .unwrap()
    }

    pub fn client(client_type: ClientType) -> Client {
        Client::new(personal_information(), address(), contact_details(), client_type).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;

    #[test]
    fn test_new_client_is_pending_verification() {
        let a = fixtures::client(ClientType::Individual);
        let b = fixtures::client(ClientType::Individual);

        assert_eq!(a.state(), ClientState::PendingVerification);
        assert_eq!(a.status().reason.as_deref(), Some("New client registration"));
        assert_eq!(a.version, 0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_verify_only_once() {
        let mut client = fixtures::client(ClientType::Vip);

        client.verify().unwrap();
        assert!(client.is_active());
        assert_eq!(client.status().reason.as_deref(), Some("Client verified successfully"));

        assert!(matches!(client.verify(), Err(DomainError::IllegalState(_))));
    }

    #[test]
    fn test_transitions_fail_only_on_same_state() {
        let mut client = fixtures::client(ClientType::Business);

        client.suspend("fraud check").unwrap();
        assert_eq!(client.state(), ClientState::Suspended);
        assert_eq!(client.status().reason.as_deref(), Some("fraud check"));
        assert!(client.suspend("again").is_err());

        client.block("chargebacks").unwrap();
        assert!(client.block("again").is_err());

        client.activate("cleared").unwrap();
        assert!(client.is_active());
        assert!(client.activate("again").is_err());

        // verify is no longer allowed once the client left pending
        assert!(client.verify().is_err());
    }

    #[test]
    fn test_transition_stamps_time() {
        let mut client = fixtures::client(ClientType::Individual);
        let before = client.status().last_updated;

        client.block("manual").unwrap();
        assert!(client.status().last_updated >= before);
    }

    #[test]
    fn test_apply_changes_keeps_identity() {
        let mut client = fixtures::client(ClientType::Individual);
        let id = client.id;
        let changes = ClientChanges {
            address: Address::new("Diagonal 10", "Barcelona", "Catalonia", "Spain", "08019").unwrap(),
            contact_details: ContactDetails::new("new@bank.com", "+34600999888", None).unwrap(),
            client_type: ClientType::Vip,
        };

        client.apply_changes(changes);

        assert_eq!(client.id, id);
        assert_eq!(client.address.city, "Barcelona");
        assert_eq!(client.client_type, ClientType::Vip);
        assert_eq!(client.state(), ClientState::PendingVerification);
    }
}
