// ============================================================================
// Bank Core - Client Center Rights Entity
// File: crates/bank-core/src/domain/client_center_rights.rs
// Description: Time-bounded permission grant for a client
// ============================================================================

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::validators::{ClientCenterRightsValidator, ServiceValidator};

/// Permission names, iterated in alphabetical order
pub type RightsSet = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCenterRights {
    pub id: Uuid,
    pub client_id: Uuid,
    permissions: RightsSet,
    last_updated: DateTime<Utc>,
    valid_until: DateTime<Utc>,
    active: bool,
}

impl ClientCenterRights {
    pub fn new(
        client_id: Uuid,
        permissions: RightsSet,
        valid_until: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let rights = Self {
            id: Uuid::new_v4(),
            client_id,
            permissions,
            last_updated: Utc::now(),
            valid_until,
            active: true,
        };

        ClientCenterRightsValidator.validate(&rights)?;
        Ok(rights)
    }

    pub fn permissions(&self) -> &RightsSet {
        &self.permissions
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn valid_until(&self) -> DateTime<Utc> {
        self.valid_until
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.active && Utc::now() < self.valid_until && self.permissions.contains(permission)
    }

    pub fn update_permissions(&mut self, permissions: RightsSet) -> Result<(), DomainError> {
        ClientCenterRightsValidator::check_permissions(&permissions)?;
        self.permissions = permissions;
        self.touch();
        Ok(())
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.touch();
    }

    pub fn extend_validity(&mut self, valid_until: DateTime<Utc>) -> Result<(), DomainError> {
        ClientCenterRightsValidator::check_valid_until(valid_until)?;
        self.valid_until = valid_until;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
