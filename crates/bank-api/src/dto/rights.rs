use bank_shared::{Page, PageRequest};
use serde::{Deserialize, Serialize};

/// `?page&size` on the rights endpoint. Either one switches to paged output.
#[derive(Debug, Default, Deserialize)]
pub struct RightsQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl RightsQuery {
    pub fn is_paged(&self) -> bool {
        self.page.is_some() || self.size.is_some()
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedClientRightsDto {
    pub rights: Vec<String>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<Page<String>> for PagedClientRightsDto {
    fn from(page: Page<String>) -> Self {
        Self {
            rights: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}
