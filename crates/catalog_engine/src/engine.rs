use std::collections::BTreeMap;
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_core::{Generation, RequestId};
use catalog_logging::catalog_debug;
use tokio_util::sync::CancellationToken;

use crate::usecase::{GetProductDetails, SearchParams, SearchProducts};
use crate::EngineEvent;

enum EngineCommand {
    FetchPage {
        generation: Generation,
        query: String,
        page: u32,
        page_size: u32,
    },
    CancelSearch {
        generation: Generation,
    },
    LoadDetails {
        request: RequestId,
        product_id: String,
        lang: Option<String>,
    },
}

/// Handle to the background worker that runs catalog requests.
///
/// Commands are executed on a tokio runtime owned by the worker thread;
/// completions are read back with [`EngineHandle::try_recv`] or
/// [`EngineHandle::recv_timeout`] on the caller's thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(search: SearchProducts, details: GetProductDetails) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let search = Arc::new(search);
        let details = Arc::new(details);

        thread::Builder::new()
            .name("catalog-engine".to_string())
            .spawn(move || {
                let mut searches = SearchTokens::default();
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::FetchPage {
                            generation,
                            query,
                            page,
                            page_size,
                        } => {
                            let token = searches.token_for(generation);
                            let search = search.clone();
                            let event_tx = event_tx.clone();
                            runtime.spawn(async move {
                                let params = SearchParams::page(page, page_size);
                                tokio::select! {
                                    biased;
                                    _ = token.cancelled() => {
                                        catalog_debug!(
                                            "Dropped page {} of cancelled search generation {}",
                                            page,
                                            generation
                                        );
                                    }
                                    result = search.execute(&query, params) => {
                                        let _ = event_tx.send(EngineEvent::PageLoaded {
                                            generation,
                                            page,
                                            result,
                                        });
                                    }
                                }
                            });
                        }
                        EngineCommand::CancelSearch { generation } => {
                            searches.cancel(generation);
                        }
                        EngineCommand::LoadDetails {
                            request,
                            product_id,
                            lang,
                        } => {
                            let details = details.clone();
                            let event_tx = event_tx.clone();
                            runtime.spawn(async move {
                                let result = details.execute(&product_id, lang.as_deref()).await;
                                let _ = event_tx.send(EngineEvent::DetailsLoaded { request, result });
                            });
                        }
                    }
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    /// Starting a generation cancels every older one still in flight.
    pub fn fetch_page(
        &self,
        generation: Generation,
        query: impl Into<String>,
        page: u32,
        page_size: u32,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage {
            generation,
            query: query.into(),
            page,
            page_size,
        });
    }

    pub fn cancel_search(&self, generation: Generation) {
        let _ = self.cmd_tx.send(EngineCommand::CancelSearch { generation });
    }

    pub fn load_details(
        &self,
        request: RequestId,
        product_id: impl Into<String>,
        lang: Option<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::LoadDetails {
            request,
            product_id: product_id.into(),
            lang,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

/// One cancellation token per live search generation.
#[derive(Default)]
struct SearchTokens {
    tokens: BTreeMap<Generation, CancellationToken>,
}

impl SearchTokens {
    fn token_for(&mut self, generation: Generation) -> CancellationToken {
        let newer = self.tokens.split_off(&generation);
        for (stale, token) in std::mem::replace(&mut self.tokens, newer) {
            catalog_debug!("Cancelling search generation {}", stale);
            token.cancel();
        }
        self.tokens.entry(generation).or_default().clone()
    }

    fn cancel(&mut self, generation: Generation) {
        if let Some(token) = self.tokens.remove(&generation) {
            catalog_debug!("Cancelling search generation {}", generation);
            token.cancel();
        }
    }
}
