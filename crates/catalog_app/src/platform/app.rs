use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use catalog_core::{update, AppConfig, AppState, AppViewModel, Msg};
use catalog_engine::{
    ApiProductRepository, ApiSettings, EngineHandle, GetProductDetails, ProductApi,
    ProductRepository, ReqwestProductApi, SearchProducts,
};
use catalog_logging::{catalog_error, catalog_info};

use super::effects::EffectRunner;
use super::input::{self, Command};
use super::logging::{self, LogDestination};
use super::render;

const TICK: Duration = Duration::from_millis(75);

enum Input {
    Line(String),
    Closed,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let config = AppConfig::default();
    let runner = EffectRunner::new(build_engine(&config)?);
    catalog_info!("catalog_app started against {}", config.base_url);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    thread::Builder::new()
        .name("catalog-input".to_string())
        .spawn(move || read_stdin(input_tx))
        .context("spawning input thread")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", input::HELP)?;
    let mut state = AppState::with_config(&config);

    loop {
        let mut inbox = Vec::new();
        match input_rx.recv_timeout(TICK) {
            Ok(Input::Line(line)) => match input::parse_line(&line) {
                Command::Dispatch(msgs) => inbox.extend(msgs),
                Command::Help => writeln!(stdout, "{}", input::HELP)?,
                Command::Quit => break,
                Command::Unknown(word) => {
                    writeln!(stdout, "Unknown command `{word}`; type `help`")?
                }
            },
            Ok(Input::Closed) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => inbox.push(Msg::Tick),
        }
        inbox.extend(runner.drain_events());

        for msg in inbox {
            let (next, effects) = update(state, msg);
            state = next;
            runner.enqueue(effects);
        }

        if state.consume_dirty() {
            let view = state.view();
            for line in render::render(&view) {
                writeln!(stdout, "{line}")?;
            }
            stdout.flush()?;
            state = acknowledge(state, &view);
        }
    }

    catalog_info!("catalog_app exiting");
    Ok(())
}

fn build_engine(config: &AppConfig) -> anyhow::Result<EngineHandle> {
    let api: Arc<dyn ProductApi> = Arc::new(
        ReqwestProductApi::new(&config.base_url, ApiSettings::default())
            .context("building product api client")?,
    );
    let repository: Arc<dyn ProductRepository> =
        Arc::new(ApiProductRepository::new(api, config.clone()));
    let search = SearchProducts::new(repository.clone(), config.clone());
    let details = GetProductDetails::new(repository, config.clone());
    EngineHandle::new(search, details).context("starting catalog engine")
}

/// Consumes the one-shot signals the rendered view has just shown.
fn acknowledge(mut state: AppState, view: &AppViewModel) -> AppState {
    if view.search.error.is_some() {
        state = update(state, Msg::SearchErrorShown).0;
    }
    if view.search.scroll_reset {
        state = update(state, Msg::ScrollResetHandled).0;
    }
    // Acknowledging is not a visible change.
    state.consume_dirty();
    state
}

fn read_stdin(input_tx: mpsc::Sender<Input>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if input_tx.send(Input::Line(line)).is_err() {
                    return;
                }
            }
            Err(err) => {
                catalog_error!("Reading stdin failed: {}", err);
                break;
            }
        }
    }
    let _ = input_tx.send(Input::Closed);
}
