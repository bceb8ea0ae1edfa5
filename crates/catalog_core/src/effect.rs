use crate::{Generation, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage {
        generation: Generation,
        query: String,
        page: u32,
        page_size: u32,
    },
    /// Drop any in-flight work of a search generation.
    CancelSearch { generation: Generation },
    LoadDetails {
        request: RequestId,
        product_id: String,
        lang: Option<String>,
    },
}
