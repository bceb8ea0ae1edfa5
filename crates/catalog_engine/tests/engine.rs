mod common;

use std::sync::Arc;
use std::time::Duration;

use catalog_core::{update, AppConfig, AppState, Effect, Msg, SearchPhase};
use catalog_engine::{EngineEvent, EngineHandle};
use common::{details_dto, product_dto, search_response, use_cases_for, ApiCall, FakeApi};
use pretty_assertions::assert_eq;

const WAIT: Duration = Duration::from_secs(5);

fn engine_for(api: Arc<FakeApi>, config: &AppConfig) -> EngineHandle {
    catalog_logging::initialize_for_tests();
    let (search, details) = use_cases_for(api, config);
    EngineHandle::new(search, details).expect("engine starts")
}

#[test]
fn newer_generation_cancels_older_fetch() {
    let api = Arc::new(
        FakeApi::default()
            .with_search("alpha", Ok(search_response(vec![product_dto("a1", Some(1.0), None)])))
            .with_delay("alpha", Duration::from_millis(300))
            .with_search("beta", Ok(search_response(vec![product_dto("b1", Some(2.0), None)]))),
    );
    let engine = engine_for(api, &AppConfig::default());

    engine.fetch_page(1, "alpha", 1, 24);
    engine.fetch_page(2, "beta", 1, 24);

    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::PageLoaded {
            generation, result, ..
        }) => {
            assert_eq!(generation, 2);
            let products = result.expect("beta ok");
            assert_eq!(products[0].id, "b1");
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(engine.recv_timeout(Duration::from_millis(600)).is_none());
}

#[test]
fn cancelled_search_reports_nothing() {
    let api = Arc::new(
        FakeApi::default()
            .with_search("slow", Ok(search_response(Vec::new())))
            .with_delay("slow", Duration::from_millis(300)),
    );
    let engine = engine_for(api, &AppConfig::default());

    engine.fetch_page(7, "slow", 1, 24);
    engine.cancel_search(7);

    assert!(engine.recv_timeout(Duration::from_millis(800)).is_none());
}

#[test]
fn details_are_delivered_with_default_language() {
    let api = Arc::new(FakeApi::default().with_details("sku1", Ok(details_dto("sku1", "Laptop"))));
    let engine = engine_for(api.clone(), &AppConfig::default());

    engine.load_details(3, "sku1", None);

    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::DetailsLoaded { request, result }) => {
            assert_eq!(request, 3);
            assert_eq!(result.expect("details ok").name, "Laptop");
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        api.calls(),
        vec![ApiCall::Details {
            product_id: "sku1".to_string(),
            lang: "en".to_string(),
        }]
    );
}

#[test]
fn failed_details_carry_user_message() {
    let engine = engine_for(Arc::new(FakeApi::default()), &AppConfig::default());

    engine.load_details(1, "missing", Some("fr".to_string()));

    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::DetailsLoaded { result, .. }) => {
            let err = result.unwrap_err();
            assert!(err.user_message().contains("404"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

fn run_effects(engine: &EngineHandle, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::FetchPage {
                generation,
                query,
                page,
                page_size,
            } => engine.fetch_page(generation, query, page, page_size),
            Effect::CancelSearch { generation } => engine.cancel_search(generation),
            Effect::LoadDetails {
                request,
                product_id,
                lang,
            } => engine.load_details(request, product_id, lang),
        }
    }
}

fn next_msg(engine: &EngineHandle) -> Msg {
    match engine.recv_timeout(WAIT).expect("engine event") {
        EngineEvent::PageLoaded {
            generation,
            page,
            result,
        } => Msg::PageLoaded {
            generation,
            page,
            result: result.map_err(|err| err.user_message()),
        },
        EngineEvent::DetailsLoaded { request, result } => Msg::DetailLoaded {
            request,
            result: result.map_err(|err| err.user_message()),
        },
    }
}

#[test]
fn paginated_search_runs_end_to_end() {
    let config = AppConfig::default().with_page_size(2);
    let api = Arc::new(
        FakeApi::default()
            .with_search(
                "laptop",
                Ok(search_response(vec![
                    product_dto("1", Some(1.0), None),
                    product_dto("2", Some(2.0), None),
                ])),
            )
            .with_search(
                "laptop",
                Ok(search_response(vec![
                    product_dto("3", Some(3.0), None),
                    product_dto("4", Some(4.0), None),
                ])),
            )
            .with_search(
                "laptop",
                Ok(search_response(vec![product_dto("5", Some(5.0), None)])),
            ),
    );
    let engine = engine_for(api.clone(), &config);

    let state = AppState::with_config(&config);
    let (state, _) = update(state, Msg::QueryChanged("laptop".to_string()));
    let (mut state, mut effects) = update(state, Msg::SearchSubmitted);

    for _ in 0..3 {
        run_effects(&engine, effects);
        let (next, _) = update(state, next_msg(&engine));
        (state, effects) = update(next, Msg::LoadMoreRequested);
    }

    assert!(effects.is_empty());
    let view = state.view().search;
    assert_eq!(view.phase, SearchPhase::Loaded);
    assert!(!view.has_more);
    let ids: Vec<_> = view.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

    let pages: Vec<_> = api
        .calls()
        .into_iter()
        .map(|call| match call {
            ApiCall::Search { page, page_size, .. } => (page, page_size),
            other => panic!("unexpected call {other:?}"),
        })
        .collect();
    assert_eq!(pages, vec![(1, 2), (2, 2), (3, 2)]);
}
