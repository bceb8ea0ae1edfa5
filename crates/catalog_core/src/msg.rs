use crate::{Generation, Product, ProductDetails, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search box.
    QueryChanged(String),
    /// User explicitly submitted the current search text.
    SearchSubmitted,
    /// Result list scrolled near the end of the loaded pages.
    LoadMoreRequested,
    /// Engine completion for one page of a search generation.
    PageLoaded {
        generation: Generation,
        page: u32,
        result: Result<Vec<Product>, String>,
    },
    /// The transient search error has been shown to the user.
    SearchErrorShown,
    /// The front end jumped back to the top of the result list.
    ScrollResetHandled,
    /// User opened a product.
    DetailRequested {
        product_id: String,
        lang: Option<String>,
    },
    /// Engine completion for a detail request.
    DetailLoaded {
        request: RequestId,
        result: Result<ProductDetails, String>,
    },
    /// User dismissed the detail error.
    DetailErrorCleared,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
