//! Actions for the driver reducer
//!
//! Terminal input and fetch outcomes are turned into these values before
//! they touch state. Session transitions are wrapped in `Action::Session`.

use crossterm::event::KeyEvent;
use libquiz::Question;

/// Actions that trigger driver state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Event loop poll timeout, used for redraws only
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Session ===
    /// Forward a transition to the quiz session
    Session(libquiz::Action),

    // === Question source ===
    /// A fetch was dispatched; only its outcome will be accepted
    FetchStarted { fetch_id: String },

    /// A fetch finished. Outcomes for any other id than the one in flight
    /// are dropped.
    FetchCompleted {
        fetch_id: String,
        result: Result<Vec<Question>, String>,
    },

    // === Error Handling ===
    /// Dismiss error overlay
    DismissError,
}

impl From<libquiz::Action> for Action {
    fn from(action: libquiz::Action) -> Self {
        Action::Session(action)
    }
}
