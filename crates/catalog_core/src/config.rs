//! Application-wide settings supplied by the composition root.

pub const DEFAULT_BASE_URL: &str = "http://www.bestbuy.ca/api/v2/json";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Searches are only issued for queries at least this many characters long
/// (after trimming).
pub const MIN_QUERY_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub default_language: String,
    pub default_page: u32,
    pub default_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            default_page: DEFAULT_PAGE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }
}

/// Returns true when `query` is long enough to be searched.
pub fn meets_min_query_length(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LENGTH
}
