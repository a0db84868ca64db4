use async_graphql::{InputObject, SimpleObject};
use bank_core::domain::RightsSet;
use bank_shared::{Page, PageRequest};

#[derive(Debug, SimpleObject)]
pub struct ClientRightsType {
    pub client_id: String,
    pub rights: Vec<String>,
}

impl ClientRightsType {
    pub fn new(client_id: String, rights: RightsSet) -> Self {
        Self {
            client_id,
            rights: rights.into_iter().collect(),
        }
    }
}

#[derive(Debug, SimpleObject)]
pub struct PagedClientRightsType {
    pub rights: Vec<String>,
    pub page: i32,
    pub size: i32,
    pub total_elements: i32,
    pub total_pages: i32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<Page<String>> for PagedClientRightsType {
    fn from(page: Page<String>) -> Self {
        Self {
            rights: page.items,
            page: clamp(u64::from(page.page)),
            size: clamp(u64::from(page.size)),
            total_elements: clamp(page.total_elements),
            total_pages: clamp(u64::from(page.total_pages)),
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

fn clamp(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[derive(Debug, Default, InputObject)]
pub struct PaginationInput {
    pub page: Option<i32>,
    pub size: Option<i32>,
}

impl PaginationInput {
    /// Negative values are rejected, missing ones take the defaults
    pub fn to_page_request(&self) -> Result<PageRequest, String> {
        let page = self
            .page
            .map(u32::try_from)
            .transpose()
            .map_err(|_| "page must not be negative".to_string())?;
        let size = self
            .size
            .map(u32::try_from)
            .transpose()
            .map_err(|_| "size must not be negative".to_string())?;
        Ok(PageRequest::new(page, size))
    }
}
