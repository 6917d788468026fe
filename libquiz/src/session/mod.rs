//! Quiz session state machine
//!
//! - Actions: what can happen to a session
//! - State: the single session snapshot
//! - Reducer: `(SessionState, Action) -> Result<SessionState>`
//! - View: values derived from a snapshot for display
//!
//! The state machine performs no I/O and schedules nothing. Fetching the
//! question pool and emitting one `Tick` per second are the driver's job.

pub mod actions;
pub mod reducer;
pub mod state;
pub mod view;

pub use actions::Action;
pub use reducer::{reduce, reduce_with};
pub use state::{SessionSettings, SessionState, Status, SECS_PER_QUESTION};
pub use view::{format_clock, NextControl, Rating};
