//! quiz-tui - Terminal UI for Quizcast
//!
//! Interactive terminal quiz: fetches a question pool, lets the user pick a
//! limit and difficulty, then runs a timed session and keeps the best score
//! until exit.

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use libquiz::{QuizError, Status};

use quiz_tui::{
    app::{event::EventHandler, reduce, Action, AppState, Countdown},
    cli::Cli,
    error::{Result, TuiError},
    services::{FetchOutcome, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<TuiError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<QuizError>() {
        return e.exit_code();
    }
    1
}

fn run(cli: Cli) -> anyhow::Result<()> {
    cli.logging().init().context("failed to open log file")?;

    let config = cli.load_config()?;
    let source = libquiz::source::from_config(&config.source)?;
    let services = ServiceHandle::new(source).context("failed to start async runtime")?;
    tracing::info!(source = %services.describe(), "starting quiz-tui");

    let settings = config.session.settings();
    let state = match config.session.seed {
        Some(seed) => AppState::with_seed(settings, seed),
        None => AppState::with_settings(settings),
    };

    install_panic_hook();
    let mut terminal = setup_terminal().context("failed to set up terminal")?;

    let result = run_app(&mut terminal, state, &services);

    restore_terminal(terminal).context("failed to restore terminal")?;

    let state = result?;
    tracing::info!(high_score = state.session.high_score, "quiz-tui exiting");
    Ok(())
}

fn run_app(terminal: &mut Tui, mut state: AppState, services: &ServiceHandle) -> Result<AppState> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);
    let mut countdown = Countdown::new();
    let mut fetch_rx: Option<Receiver<FetchOutcome>> = None;

    loop {
        // Dispatch a fetch the reducer asked for
        if state.fetch_requested {
            let (fetch_id, rx) = services.fetch();
            fetch_rx = Some(rx);
            state = reduce(state, Action::FetchStarted { fetch_id })?;
        }

        terminal.draw(|frame| {
            ui::render(frame, &state);
        })?;

        let action: Action = event_handler.next()?.into();
        state = reduce(state, action)?;

        // Collect the fetch outcome without blocking
        if let Some(ref rx) = fetch_rx {
            let outcome = match rx.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    state.in_flight.clone().map(|fetch_id| FetchOutcome {
                        fetch_id,
                        result: Err("fetch task ended without a result".to_string()),
                    })
                }
            };
            if let Some(outcome) = outcome {
                fetch_rx = None;
                state = reduce(state, outcome.into())?;
            } else if state.in_flight.is_none() {
                fetch_rx = None;
            }
        }

        // One session tick per elapsed second while active
        let now = Instant::now();
        countdown.sync(state.session.status, now);
        for _ in 0..countdown.due(now) {
            if state.session.status != Status::Active {
                break;
            }
            state = reduce(state, libquiz::Action::Tick.into())?;
        }
        countdown.sync(state.session.status, now);

        if state.should_quit {
            break;
        }
    }

    Ok(state)
}
