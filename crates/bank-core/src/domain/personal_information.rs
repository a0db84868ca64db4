//! Personal information value object

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::address::not_blank;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Dni,
    Passport,
    ResidenceCard,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Dni => "DNI",
            DocumentType::Passport => "PASSPORT",
            DocumentType::ResidenceCard => "RESIDENCE_CARD",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DNI" => Some(DocumentType::Dni),
            "PASSPORT" => Some(DocumentType::Passport),
            "RESIDENCE_CARD" => Some(DocumentType::ResidenceCard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInformation {
    #[validate(
        custom(function = "not_blank", message = "First name cannot be empty"),
        length(max = 100, message = "First name cannot exceed 100 characters")
    )]
    pub first_name: String,

    #[validate(
        custom(function = "not_blank", message = "Last name cannot be empty"),
        length(max = 100, message = "Last name cannot exceed 100 characters")
    )]
    pub last_name: String,

    #[validate(
        custom(function = "not_blank", message = "Document ID cannot be empty"),
        length(max = 50, message = "Document ID cannot exceed 50 characters")
    )]
    pub document_id: String,

    pub document_type: DocumentType,

    #[validate(custom(function = "not_in_future", message = "Date of birth cannot be in the future"))]
    pub date_of_birth: NaiveDate,
}

impl PersonalInformation {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        document_id: impl Into<String>,
        document_type: DocumentType,
        date_of_birth: NaiveDate,
    ) -> Result<Self, DomainError> {
        let info = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            document_id: document_id.into(),
            document_type,
            date_of_birth,
        };

        info.validate()?;
        Ok(info)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn not_in_future(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        return Err(ValidationError::new("future_date"));
    }
    Ok(())
}
