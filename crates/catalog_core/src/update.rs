use catalog_logging::catalog_debug;

use crate::config::meets_min_query_length;
use crate::{messages, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            let cancelled = state.search.edit_query(text);
            state.mark_dirty();
            match cancelled {
                Some(generation) => {
                    catalog_debug!("Query too short; cleared search generation {}", generation);
                    vec![Effect::CancelSearch { generation }]
                }
                None => Vec::new(),
            }
        }
        Msg::SearchSubmitted => {
            let query = state.search.query.trim().to_string();
            if !meets_min_query_length(&query) {
                return (state, Vec::new());
            }
            let mut effects = Vec::with_capacity(2);
            if let Some(previous) = state.search.active_generation() {
                effects.push(Effect::CancelSearch {
                    generation: previous,
                });
            }
            let generation = state.search.start(query.clone());
            effects.push(Effect::FetchPage {
                generation,
                query,
                page: state.search.pages.next_page(),
                page_size: state.search.page_size(),
            });
            state.mark_dirty();
            effects
        }
        Msg::LoadMoreRequested => match state.search.request_next_page() {
            Some(page) => {
                state.mark_dirty();
                // request_next_page only succeeds while a query is active.
                let query = state.search.last_searched_query.clone().unwrap_or_default();
                vec![Effect::FetchPage {
                    generation: state.search.generation,
                    query,
                    page,
                    page_size: state.search.page_size(),
                }]
            }
            None => Vec::new(),
        },
        Msg::PageLoaded {
            generation,
            page,
            result,
        } => {
            if !state.search.awaits(generation, page) {
                catalog_debug!(
                    "Discarding page {} of generation {} (current generation {})",
                    page,
                    generation,
                    state.search.generation
                );
                return (state, Vec::new());
            }
            match result {
                Ok(products) => state.search.apply_page(page, products),
                Err(message) => state.search.apply_failure(message),
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchErrorShown => {
            if state.search.error.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ScrollResetHandled => {
            state.search.scroll_reset = false;
            Vec::new()
        }
        Msg::DetailRequested { product_id, lang } => {
            state.mark_dirty();
            if product_id.trim().is_empty() {
                state.detail.reject(messages::PRODUCT_ID_REQUIRED);
                Vec::new()
            } else {
                let request = state.detail.begin(&product_id);
                vec![Effect::LoadDetails {
                    request,
                    product_id,
                    lang,
                }]
            }
        }
        Msg::DetailLoaded { request, result } => {
            if request != state.detail.request {
                catalog_debug!(
                    "Discarding detail result {} (current request {})",
                    request,
                    state.detail.request
                );
                return (state, Vec::new());
            }
            state.detail.apply(result);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DetailErrorCleared => {
            if state.detail.error.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
