//! Postal address value object

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(
        custom(function = "not_blank", message = "Street cannot be empty"),
        length(max = 255, message = "Street cannot exceed 255 characters")
    )]
    pub street: String,

    #[validate(
        custom(function = "not_blank", message = "City cannot be empty"),
        length(max = 100, message = "City cannot exceed 100 characters")
    )]
    pub city: String,

    #[validate(
        custom(function = "not_blank", message = "State cannot be empty"),
        length(max = 100, message = "State cannot exceed 100 characters")
    )]
    pub state: String,

    #[validate(
        custom(function = "not_blank", message = "Country cannot be empty"),
        length(max = 100, message = "Country cannot exceed 100 characters")
    )]
    pub country: String,

    #[validate(
        custom(function = "not_blank", message = "Postal code cannot be empty"),
        length(max = 20, message = "Postal code cannot exceed 20 characters")
    )]
    pub postal_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            postal_code: postal_code.into(),
        };

        address.validate()?;
        Ok(address)
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_address() {
        let address = Address::new("Gran Via 1", "Madrid", "Madrid", "Spain", "28013");
        assert!(address.is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let err = Address::new("Gran Via 1", "   ", "Madrid", "Spain", "28013").unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref msg) if msg.contains("city")));

        assert!(Address::new("", "Madrid", "Madrid", "Spain", "28013").is_err());
        assert!(Address::new("Gran Via 1", "Madrid", "Madrid", "Spain", "").is_err());
    }

    #[test]
    fn test_fields_longer_than_their_columns_are_rejected() {
        let err = Address::new("Gran Via 1", "Madrid", "Madrid", "Spain", "2".repeat(21)).unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref msg) if msg.contains("postal_code")));

        assert!(Address::new("a".repeat(256), "Madrid", "Madrid", "Spain", "28013").is_err());
        assert!(Address::new("a".repeat(255), "Madrid", "Madrid", "Spain", "28013").is_ok());
        assert!(Address::new("Gran Via 1", "M".repeat(101), "Madrid", "Spain", "28013").is_err());
    }
}
