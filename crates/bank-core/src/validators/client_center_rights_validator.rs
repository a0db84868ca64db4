use chrono::{DateTime, Utc};

use super::ServiceValidator;
use crate::domain::{ClientCenterRights, RightsSet};
use crate::error::DomainError;

#[derive(Debug, Default, Clone, Copy)]
pub struct ClientCenterRightsValidator;

impl ClientCenterRightsValidator {
    pub fn check_permissions(permissions: &RightsSet) -> Result<(), DomainError> {
        if permissions.is_empty() {
            return Err(DomainError::ValidationError(
                "Permissions cannot be empty".to_string(),
            ));
        }
        if permissions.iter().any(|p| p.trim().is_empty()) {
            return Err(DomainError::ValidationError(
                "Permissions cannot contain blank entries".to_string(),
            ));
        }
        Ok(())
    }

    pub fn check_valid_until(valid_until: DateTime<Utc>) -> Result<(), DomainError> {
        if valid_until <= Utc::now() {
            return Err(DomainError::ValidationError(
                "Valid until date must be in the future".to_string(),
            ));
        }
        Ok(())
    }
}

impl ServiceValidator<ClientCenterRights> for ClientCenterRightsValidator {
    fn validate(&self, rights: &ClientCenterRights) -> Result<(), DomainError> {
        Self::check_permissions(rights.permissions())?;
        Self::check_valid_until(rights.valid_until())
    }
}
