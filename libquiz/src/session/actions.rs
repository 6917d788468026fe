//! Actions for the session reducer
//!
//! Every session transition is triggered by one of these values. The set is
//! closed: the reducer matches it exhaustively against the current status.

use std::fmt;

use crate::types::{DifficultyFilter, Question};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The question source delivered the pool
    DataReceived(Vec<Question>),

    /// The question source failed
    FetchFailed,

    /// Select questions and start the countdown
    Start,

    /// The user chose an option for the current question
    AnswerSubmitted(usize),

    /// Move to the next question
    Advance,

    /// End the session and record the high score
    Finish,

    /// One second of the countdown elapsed
    Tick,

    /// Cap the number of questions; `None` clears the cap
    SetQuestionLimit(Option<i64>),

    /// Choose the difficulty filter for the next start
    SetDifficulty(DifficultyFilter),

    /// Restart: back to ready with an empty pool, keeping the high score
    Reset,
}

impl Action {
    /// Build a `SetQuestionLimit` from raw user input
    ///
    /// Anything that is not an integer becomes "no limit".
    pub fn question_limit(input: &str) -> Self {
        Action::SetQuestionLimit(input.trim().parse::<i64>().ok())
    }

    /// Stable name of the action kind, used in errors and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::DataReceived(_) => "dataReceived",
            Action::FetchFailed => "fetchFailed",
            Action::Start => "start",
            Action::AnswerSubmitted(_) => "answerSubmitted",
            Action::Advance => "advance",
            Action::Finish => "finish",
            Action::Tick => "tick",
            Action::SetQuestionLimit(_) => "setQuestionLimit",
            Action::SetDifficulty(_) => "setDifficulty",
            Action::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::DataReceived(pool) => write!(f, "dataReceived({} questions)", pool.len()),
            Action::AnswerSubmitted(chosen) => write!(f, "answerSubmitted({})", chosen),
            Action::SetQuestionLimit(Some(n)) => write!(f, "setQuestionLimit({})", n),
            Action::SetQuestionLimit(None) => write!(f, "setQuestionLimit(none)"),
            Action::SetDifficulty(d) => write!(f, "setDifficulty({})", d),
            other => write!(f, "{}", other.kind()),
        }
    }
}
