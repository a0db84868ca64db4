use bank_core::domain::{
    Address, Client, ClientChanges, ClientStatus, ClientType, ContactDetails, PersonalInformation,
};
use bank_core::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub personal_information: PersonalInformation,
    pub address: Address,
    pub contact_details: ContactDetails,
    #[serde(default)]
    pub client_type: ClientType,
}

impl CreateClientRequest {
    /// Build a validated client pending verification
    pub fn into_client(self) -> Result<Client, DomainError> {
        Client::new(
            self.personal_information,
            self.address,
            self.contact_details,
            self.client_type,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    pub address: Address,
    pub contact_details: ContactDetails,
    pub client_type: ClientType,
}

impl From<UpdateClientRequest> for ClientChanges {
    fn from(req: UpdateClientRequest) -> Self {
        ClientChanges {
            address: req.address,
            contact_details: req.contact_details,
            client_type: req.client_type,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: Uuid,
    pub personal_information: PersonalInformation,
    pub address: Address,
    pub contact_details: ContactDetails,
    pub client_type: ClientType,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
    pub version: i64,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        let status = client.status().clone();
        Self {
            id: client.id,
            personal_information: client.personal_information,
            address: client.address,
            contact_details: client.contact_details,
            client_type: client.client_type,
            status,
            created_at: client.created_at,
            version: client.version,
        }
    }
}
