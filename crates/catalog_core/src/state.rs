use crate::config::meets_min_query_length;
use crate::messages;
use crate::page::PageSequence;
use crate::view_model::{AppViewModel, DetailViewModel, SearchViewModel};
use crate::{AppConfig, Product, ProductDetails};

/// Identifies one search: bumped on every submit and every reset.
pub type Generation = u64;
/// Identifies one detail load.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No search issued yet (or the last one was cleared).
    #[default]
    Idle,
    /// First page of the active query is in flight.
    Searching,
    /// Zero or more pages accumulated for the active query.
    Loaded,
    /// The first page of the active query failed.
    LoadError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub(crate) query: String,
    pub(crate) last_searched_query: Option<String>,
    pub(crate) generation: Generation,
    pub(crate) phase: SearchPhase,
    pub(crate) pages: PageSequence,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) scroll_reset: bool,
    first_page: u32,
    page_size: u32,
}

impl SearchState {
    fn new(first_page: u32, page_size: u32) -> Self {
        Self {
            query: String::new(),
            last_searched_query: None,
            generation: 0,
            phase: SearchPhase::Idle,
            pages: PageSequence::new(first_page, page_size),
            loading: false,
            error: None,
            scroll_reset: false,
            first_page,
            page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Generation of the search currently shown, if any.
    pub(crate) fn active_generation(&self) -> Option<Generation> {
        self.last_searched_query.as_ref().map(|_| self.generation)
    }

    /// Stores the edited text. Returns the generation that was dropped when
    /// the edit cleared an active search.
    pub(crate) fn edit_query(&mut self, text: String) -> Option<Generation> {
        self.query = text;
        if meets_min_query_length(&self.query) {
            return None;
        }
        let cancelled = self.active_generation()?;
        self.generation += 1;
        self.last_searched_query = None;
        self.reset_results();
        self.phase = SearchPhase::Idle;
        Some(cancelled)
    }

    /// Starts a new generation for `query` and returns it.
    pub(crate) fn start(&mut self, query: String) -> Generation {
        self.generation += 1;
        self.last_searched_query = Some(query);
        self.reset_results();
        self.loading = true;
        self.scroll_reset = true;
        self.phase = SearchPhase::Searching;
        self.generation
    }

    /// Marks the next page as loading and returns its number, or `None`
    /// when no further page should be requested right now.
    pub(crate) fn request_next_page(&mut self) -> Option<u32> {
        self.last_searched_query.as_ref()?;
        if self.loading || !self.pages.has_more() {
            return None;
        }
        match self.phase {
            SearchPhase::Loaded => {}
            SearchPhase::LoadError => self.phase = SearchPhase::Searching,
            SearchPhase::Idle | SearchPhase::Searching => return None,
        }
        self.loading = true;
        Some(self.pages.next_page())
    }

    /// True when a completion for `generation`/`page` is the one this state
    /// is waiting for.
    pub(crate) fn awaits(&self, generation: Generation, page: u32) -> bool {
        self.loading && generation == self.generation && page == self.pages.next_page()
    }

    pub(crate) fn apply_page(&mut self, page: u32, products: Vec<Product>) {
        self.loading = false;
        self.error = None;
        self.pages.append(page, products);
        self.phase = SearchPhase::Loaded;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(messages::or_generic(message));
        self.phase = if self.pages.has_loaded_any() {
            SearchPhase::Loaded
        } else {
            SearchPhase::LoadError
        };
    }

    fn reset_results(&mut self) {
        self.pages = PageSequence::new(self.first_page, self.page_size);
        self.loading = false;
        self.error = None;
    }

    fn view(&self) -> SearchViewModel {
        SearchViewModel {
            query: self.query.clone(),
            last_searched_query: self.last_searched_query.clone(),
            phase: self.phase,
            products: self.pages.items().cloned().collect(),
            pages_loaded: self.pages.pages().len(),
            next_page: self.pages.next_page(),
            has_more: self.pages.has_more(),
            loading: self.loading,
            error: self.error.clone(),
            scroll_reset: self.scroll_reset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub(crate) phase: DetailPhase,
    pub(crate) request: RequestId,
    pub(crate) product_id: Option<String>,
    pub(crate) product: Option<ProductDetails>,
    pub(crate) error: Option<String>,
}

impl DetailState {
    pub fn request(&self) -> RequestId {
        self.request
    }

    /// Starts a load for `product_id` and returns its request id.
    pub(crate) fn begin(&mut self, product_id: &str) -> RequestId {
        self.request += 1;
        if self.product_id.as_deref() != Some(product_id) {
            self.product = None;
        }
        self.product_id = Some(product_id.to_string());
        self.error = None;
        self.phase = DetailPhase::Loading;
        self.request
    }

    /// Rejects a load without issuing a request. In-flight results for an
    /// earlier request are dropped too.
    pub(crate) fn reject(&mut self, message: &str) {
        self.request += 1;
        self.product_id = None;
        self.product = None;
        self.error = Some(message.to_string());
        self.phase = DetailPhase::Error;
    }

    pub(crate) fn apply(&mut self, result: Result<ProductDetails, String>) {
        match result {
            Ok(details) => {
                self.product = Some(details);
                self.error = None;
                self.phase = DetailPhase::Loaded;
            }
            Err(message) => {
                self.error = Some(messages::or_generic(message));
                self.phase = DetailPhase::Error;
            }
        }
    }

    fn view(&self) -> DetailViewModel {
        DetailViewModel {
            phase: self.phase,
            product_id: self.product_id.clone(),
            product: self.product.clone(),
            loading: self.phase == DetailPhase::Loading,
            error: self.error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) search: SearchState,
    pub(crate) detail: DetailState,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            search: SearchState::new(config.default_page, config.default_page_size),
            detail: DetailState::default(),
            dirty: false,
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search: self.search.view(),
            detail: self.detail.view(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
