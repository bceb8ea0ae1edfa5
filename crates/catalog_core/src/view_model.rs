use crate::{DetailPhase, Product, ProductDetails, SearchPhase};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewModel {
    pub query: String,
    pub last_searched_query: Option<String>,
    pub phase: SearchPhase,
    /// Products of every loaded page, in page order.
    pub products: Vec<Product>,
    pub pages_loaded: usize,
    pub next_page: u32,
    pub has_more: bool,
    pub loading: bool,
    /// Transient error; cleared by `Msg::SearchErrorShown`.
    pub error: Option<String>,
    pub scroll_reset: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailViewModel {
    pub phase: DetailPhase,
    pub product_id: Option<String>,
    pub product: Option<ProductDetails>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub search: SearchViewModel,
    pub detail: DetailViewModel,
    pub dirty: bool,
}
