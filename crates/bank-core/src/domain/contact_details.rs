//! Contact details value object

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::DomainError;

pub(crate) static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").expect("valid email pattern"));

pub(crate) static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("valid phone pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_alternative_phone"))]
pub struct ContactDetails {
    #[validate(
        regex(path = *EMAIL_PATTERN, message = "Invalid email format"),
        length(max = 255, message = "Email cannot exceed 255 characters")
    )]
    pub email: String,

    #[validate(regex(path = *PHONE_PATTERN, message = "Invalid phone number format"))]
    pub phone_number: String,

    /// Optional; an empty string counts as absent
    #[serde(default)]
    pub alternative_phone_number: Option<String>,
}

impl ContactDetails {
    pub fn new(
        email: impl Into<String>,
        phone_number: impl Into<String>,
        alternative_phone_number: Option<String>,
    ) -> Result<Self, DomainError> {
        let details = Self {
            email: email.into(),
            phone_number: phone_number.into(),
            alternative_phone_number,
        };

        details.validate()?;
        Ok(details)
    }
}

fn validate_alternative_phone(details: &ContactDetails) -> Result<(), ValidationError> {
    match details.alternative_phone_number.as_deref() {
        Some(phone) if !phone.is_empty() && !PHONE_PATTERN.is_match(phone) => {
            let mut error = ValidationError::new("alternative_phone_number");
            error.message = Some("Invalid alternative phone number format".into());
            Err(error)
        }
        _ => Ok(()),
    }
}
