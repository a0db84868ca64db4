//! Application-wide constants

pub const API_PREFIX: &str = "/api/v1";
pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_CLIENT_RIGHTS: [&str; 3] = ["VIEW_ACCOUNT", "MAKE_TRANSFER", "VIEW_STATEMENTS"];
