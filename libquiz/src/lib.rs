//! Quizcast - timed trivia sessions
//!
//! This library provides the core of an interactive quiz: the question model,
//! question selection, the session state machine, and the sources that
//! deliver a question pool. Front ends (such as `quiz-tui`) hold a
//! [`SessionState`], feed [`Action`]s into [`reduce`], and render the result.

pub mod config;
pub mod error;
pub mod logging;
pub mod selector;
pub mod session;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{QuizError, Result};
pub use selector::select;
pub use session::{reduce, reduce_with, Action, SessionSettings, SessionState, Status};
pub use types::{Difficulty, DifficultyFilter, Question};
