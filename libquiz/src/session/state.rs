//! Session state
//!
//! Immutable snapshot of one quiz session. Every transition in `reducer.rs`
//! returns a new value; nothing mutates a snapshot in place.

use std::fmt;

use crate::types::{DifficultyFilter, Question};

/// Default time budget per question, in seconds
pub const SECS_PER_QUESTION: u32 = 30;

/// Session lifecycle status
///
/// Drives which screen the driver shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Question pool fetch in flight
    Loading,
    /// Question pool fetch failed
    Error,
    /// Pool available, waiting for the user to start
    Ready,
    /// Quiz running
    Active,
    /// Quiz over, result shown
    Finished,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Loading => "loading",
            Status::Error => "error",
            Status::Ready => "ready",
            Status::Active => "active",
            Status::Finished => "finished",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings that survive restarts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Countdown budget granted per question at session start
    pub seconds_per_question: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            seconds_per_question: SECS_PER_QUESTION,
        }
    }
}

/// Root session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub status: Status,

    /// Full pool while loading/ready, the session selection once active
    pub questions: Vec<Question>,

    /// Position of the current question; meaningful only while active
    pub index: usize,

    /// Option chosen for the current question, `None` while unanswered
    pub answer: Option<usize>,

    /// Score of the current session
    pub points: u32,

    /// Best score seen during this process lifetime. Never decreases.
    pub high_score: u32,

    /// Countdown, present only while active
    pub seconds_remaining: Option<u32>,

    /// Question count cap chosen by the user; `None` means all
    pub selected_questions_limit: Option<usize>,

    /// Filter applied at the next start
    pub difficulty: DifficultyFilter,

    pub settings: SessionSettings,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: Status::Loading,
            questions: Vec::new(),
            index: 0,
            answer: None,
            points: 0,
            high_score: 0,
            seconds_remaining: None,
            selected_questions_limit: None,
            difficulty: DifficultyFilter::All,
            settings: SessionSettings::default(),
        }
    }
}

impl SessionState {
    /// Create the initial loading state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the initial loading state with custom settings
    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// True when the session is running but the selection came back empty
    pub fn is_empty_session(&self) -> bool {
        self.status == Status::Active && self.questions.is_empty()
    }
}
