// ============================================================================
// Bank Core - Client Status Entity
// File: crates/bank-core/src/domain/client_status.rs
// Description: Lifecycle state owned by a single Client
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Possible states a client can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientState {
    /// Initial state when client is created
    PendingVerification,
    /// Normal operational state
    Active,
    /// Temporarily restricted
    Suspended,
    /// Permanently restricted
    Blocked,
}

impl ClientState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientState::PendingVerification => "PENDING_VERIFICATION",
            ClientState::Active => "ACTIVE",
            ClientState::Suspended => "SUSPENDED",
            ClientState::Blocked => "BLOCKED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING_VERIFICATION" => Some(ClientState::PendingVerification),
            "ACTIVE" => Some(ClientState::Active),
            "SUSPENDED" => Some(ClientState::Suspended),
            "BLOCKED" => Some(ClientState::Blocked),
            _ => None,
        }
    }
}

impl Default for ClientState {
    fn default() -> Self {
        ClientState::PendingVerification
    }
}

/// Current status of a client with the time and reason of the last change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatus {
    pub status: ClientState,
    pub last_updated: DateTime<Utc>,
    pub reason: Option<String>,
}

impl ClientStatus {
    pub fn new(status: ClientState, reason: impl Into<String>) -> Self {
        Self {
            status,
            last_updated: Utc::now(),
            reason: Some(reason.into()),
        }
    }

    /// Only the owning Client moves its status
    pub(crate) fn update_status(&mut self, status: ClientState, reason: impl Into<String>) {
        self.status = status;
        self.reason = Some(reason.into());
        self.last_updated = Utc::now();
    }
}
