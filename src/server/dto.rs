use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// `?page=&size=` query for list endpoints. Pages are zero-based.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
}
