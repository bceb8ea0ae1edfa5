//! Catalog core: domain records, page sequence and the pure search/detail
//! state machines.
mod config;
mod effect;
pub mod messages;
mod model;
mod msg;
mod page;
mod state;
mod update;
mod view_model;

pub use config::{
    meets_min_query_length, AppConfig, DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE, MIN_QUERY_LENGTH,
};
pub use effect::Effect;
pub use model::{
    Product, ProductAvailability, ProductDetails, ProductMedia, ProductSpec, ProductWarranty,
    CURRENCY,
};
pub use msg::Msg;
pub use page::{PageCursor, PageSequence, ResultPage};
pub use state::{
    AppState, DetailPhase, DetailState, Generation, RequestId, SearchPhase, SearchState,
};
pub use update::update;
pub use view_model::{AppViewModel, DetailViewModel, SearchViewModel};
