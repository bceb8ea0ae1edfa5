use catalog_core::{Effect, Msg};
use catalog_engine::{EngineEvent, EngineHandle};
use catalog_logging::{catalog_info, catalog_trace, catalog_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    generation,
                    query,
                    page,
                    page_size,
                } => {
                    catalog_info!(
                        "FetchPage generation={} page={} page_size={} query={}",
                        generation,
                        page,
                        page_size,
                        query
                    );
                    self.engine.fetch_page(generation, query, page, page_size);
                }
                Effect::CancelSearch { generation } => {
                    self.engine.cancel_search(generation);
                }
                Effect::LoadDetails {
                    request,
                    product_id,
                    lang,
                } => {
                    catalog_info!("LoadDetails request={} product_id={}", request, product_id);
                    self.engine.load_details(request, product_id, lang);
                }
            }
        }
    }

    /// Completed engine work, translated to messages.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            catalog_trace!("Engine event {:?}", event);
            inbox.push(to_msg(event));
        }
        inbox
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageLoaded {
            generation,
            page,
            result,
        } => Msg::PageLoaded {
            generation,
            page,
            result: result.map_err(|err| {
                catalog_warn!("Page {} of generation {} failed: {}", page, generation, err);
                err.user_message()
            }),
        },
        EngineEvent::DetailsLoaded { request, result } => Msg::DetailLoaded {
            request,
            result: result.map_err(|err| {
                catalog_warn!("Detail request {} failed: {}", request, err);
                err.user_message()
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_engine::CatalogError;
    use pretty_assertions::assert_eq;

    #[test]
    fn failed_page_carries_user_message() {
        let msg = to_msg(EngineEvent::PageLoaded {
            generation: 4,
            page: 2,
            result: Err(CatalogError::Validation("Query cannot be empty".to_string())),
        });
        assert_eq!(
            msg,
            Msg::PageLoaded {
                generation: 4,
                page: 2,
                result: Err("Query cannot be empty".to_string()),
            }
        );
    }

    #[test]
    fn empty_error_text_falls_back_to_generic_message() {
        let msg = to_msg(EngineEvent::DetailsLoaded {
            request: 1,
            result: Err(CatalogError::NotFound(String::new())),
        });
        assert_eq!(
            msg,
            Msg::DetailLoaded {
                request: 1,
                result: Err("An error occurred".to_string()),
            }
        );
    }
}
