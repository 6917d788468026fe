//! Application module
//!
//! Contains the driver architecture around the quiz session:
//! - Actions: what can happen in the terminal
//! - State: the session snapshot plus screen-level state
//! - Reducer: `(AppState, Action) -> AppState`
//! - Countdown: wall-clock bookkeeping for the one-second session tick
//!
//! The session itself lives in `libquiz`; this layer only maps keys to
//! session actions and keeps track of fetches and overlays.

pub mod actions;
pub mod countdown;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use countdown::Countdown;
pub use reducer::reduce;
pub use state::{AppState, UiConfig};
