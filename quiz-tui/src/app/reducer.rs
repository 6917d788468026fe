//! Pure reducer function for driver state transitions
//!
//! `(AppState, Action) -> Result<AppState>`
//!
//! The reducer does no I/O. It records that a fetch is wanted
//! (`fetch_requested`) and the event loop performs it. Session transitions
//! are delegated to `libquiz::reduce_with` with the state's own rng, so a
//! seeded `AppState` replays the same question order.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libquiz::session::NextControl;
use libquiz::Status;

use super::actions::Action;
use super::state::AppState;
use crate::error::Result;

/// Longest question limit the start screen accepts
const LIMIT_INPUT_MAX: usize = 4;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Errors
///
/// A session action the state machine rejects is returned as
/// `TuiError::Quiz`. The key map only sends actions that are valid for the
/// current status, so an error here means the driver dispatched out of turn.
pub fn reduce(state: AppState, action: Action) -> Result<AppState> {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => Ok(state),
        Action::Resize(_, _) => Ok(state),

        // === Navigation ===
        Action::Quit => Ok(AppState {
            should_quit: true,
            ..state
        }),

        Action::ShowHelp => Ok(AppState {
            help_visible: true,
            ..state
        }),

        Action::HideHelp => Ok(AppState {
            help_visible: false,
            ..state
        }),

        // === Session ===
        Action::Session(action) => apply_session(state, action),

        // === Question source ===
        Action::FetchStarted { fetch_id } => Ok(AppState {
            fetch_requested: false,
            in_flight: Some(fetch_id),
            ..state
        }),

        Action::FetchCompleted { fetch_id, result } => {
            if state.in_flight.as_deref() != Some(fetch_id.as_str()) {
                tracing::debug!(fetch_id = %fetch_id, "dropping outcome of superseded fetch");
                return Ok(state);
            }

            let state = AppState {
                in_flight: None,
                ..state
            };
            match result {
                Ok(pool) => apply_session(state, libquiz::Action::DataReceived(pool)),
                Err(reason) => {
                    let state = apply_session(state, libquiz::Action::FetchFailed)?;
                    Ok(AppState {
                        error: Some(format!("Could not load questions: {}", reason)),
                        ..state
                    })
                }
            }
        }

        // === Error Handling ===
        Action::DismissError => Ok(AppState {
            error: None,
            ..state
        }),
    }
}

/// Run a session transition and update the driver fields that follow it
fn apply_session(mut state: AppState, action: libquiz::Action) -> Result<AppState> {
    let kind = action.kind();
    let resets = matches!(action, libquiz::Action::Reset);
    let moves_question = matches!(action, libquiz::Action::Start | libquiz::Action::Advance);
    let refetches = matches!(action, libquiz::Action::SetDifficulty(_));

    let session = libquiz::reduce_with(state.session.clone(), action, &mut state.rng)?;
    tracing::debug!(
        action = kind,
        status = %session.status,
        points = session.points,
        "session transition"
    );

    if resets {
        return Ok(AppState {
            session,
            limit_input: String::new(),
            cursor: 0,
            error: None,
            fetch_requested: true,
            in_flight: None,
            ..state
        });
    }

    // A new difficulty reloads the pool; the filter itself applies at start
    Ok(AppState {
        cursor: if moves_question { 0 } else { state.cursor },
        fetch_requested: state.fetch_requested || refetches,
        session,
        ..state
    })
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> Result<AppState> {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.error.is_some() => {
            return reduce(state, Action::DismissError);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    // Overlays swallow everything else
    if state.help_visible || state.error.is_some() {
        return Ok(state);
    }

    match state.session.status {
        Status::Loading => Ok(state),
        Status::Error | Status::Finished => match key.code {
            KeyCode::Char('r') => reduce(state, libquiz::Action::Reset.into()),
            _ => Ok(state),
        },
        Status::Ready => handle_start_key(state, key),
        Status::Active => handle_question_key(state, key),
    }
}

/// Start screen: question limit, difficulty, start
fn handle_start_key(state: AppState, key: KeyEvent) -> Result<AppState> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if state.limit_input.len() >= LIMIT_INPUT_MAX {
                return Ok(state);
            }
            let mut limit_input = state.limit_input.clone();
            limit_input.push(c);
            set_limit_input(state, limit_input)
        }

        KeyCode::Backspace => {
            let mut limit_input = state.limit_input.clone();
            limit_input.pop();
            set_limit_input(state, limit_input)
        }

        KeyCode::Char('d') => {
            let next = state.session.difficulty.cycle();
            reduce(state, libquiz::Action::SetDifficulty(next).into())
        }

        KeyCode::Enter if state.can_start() => reduce(state, libquiz::Action::Start.into()),

        KeyCode::Char('r') => reduce(state, libquiz::Action::Reset.into()),

        _ => Ok(state),
    }
}

fn set_limit_input(state: AppState, limit_input: String) -> Result<AppState> {
    let action = libquiz::Action::question_limit(&limit_input);
    reduce(
        AppState {
            limit_input,
            ..state
        },
        action.into(),
    )
}

/// Question screen: move the highlight, answer, go on
fn handle_question_key(state: AppState, key: KeyEvent) -> Result<AppState> {
    if state.session.is_empty_session() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('f') => reduce(state, libquiz::Action::Finish.into()),
            _ => Ok(state),
        };
    }

    let option_count = state
        .session
        .current_question()
        .map(|q| q.options.len())
        .unwrap_or(0);
    let answered = state.session.has_answered();

    match key.code {
        KeyCode::Up | KeyCode::Char('k') if !answered => Ok(AppState {
            cursor: state.cursor.saturating_sub(1),
            ..state
        }),

        KeyCode::Down | KeyCode::Char('j') if !answered => Ok(AppState {
            cursor: (state.cursor + 1).min(option_count.saturating_sub(1)),
            ..state
        }),

        KeyCode::Char(c) if !answered && c.is_ascii_digit() => {
            let chosen = c.to_digit(10).map(|d| d as usize).unwrap_or(0);
            if chosen == 0 || chosen > option_count {
                return Ok(state);
            }
            let state = AppState {
                cursor: chosen - 1,
                ..state
            };
            reduce(state, libquiz::Action::AnswerSubmitted(chosen - 1).into())
        }

        KeyCode::Enter if !answered => {
            let chosen = state.cursor;
            reduce(state, libquiz::Action::AnswerSubmitted(chosen).into())
        }

        KeyCode::Enter | KeyCode::Char('n') => match state.session.next_control() {
            NextControl::Advance => reduce(state, libquiz::Action::Advance.into()),
            NextControl::Finish => reduce(state, libquiz::Action::Finish.into()),
            NextControl::Hidden => Ok(state),
        },

        _ => Ok(state),
    }
}
