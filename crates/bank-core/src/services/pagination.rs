//! Pagination over rights sets

use bank_shared::{Page, PageRequest};

use crate::domain::RightsSet;
use crate::error::DomainError;

/// Alphabetical page of `rights`. A page size of zero is rejected.
pub fn paginate_rights(rights: &RightsSet, request: PageRequest) -> Result<Page<String>, DomainError> {
    if !request.is_valid() {
        return Err(DomainError::ValidationError(
            "Page size must be greater than zero".to_string(),
        ));
    }
    Ok(Page::slice(rights.iter().cloned().collect(), request))
}
