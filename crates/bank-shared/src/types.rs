//! Common types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            size: size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.size > 0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, size: DEFAULT_PAGE_SIZE }
    }
}

/// One page of an already ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Cut `request.page` out of `items`. A page past the end is empty.
    pub fn slice(items: Vec<T>, request: PageRequest) -> Self {
        let size = request.size.max(1) as usize;
        let total = items.len();
        let total_pages = total.div_ceil(size) as u32;
        let start = (request.page as usize).saturating_mul(size);

        let items: Vec<T> = items.into_iter().skip(start).take(size).collect();

        Self {
            items,
            page: request.page,
            size: request.size,
            total_elements: total as u64,
            total_pages,
            has_next: u64::from(request.page) + 1 < u64::from(total_pages),
            has_previous: request.page > 0,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
