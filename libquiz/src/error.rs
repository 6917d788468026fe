//! Error types for Quizcast

use thiserror::Error;

use crate::session::Status;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Question source error: {0}")]
    Source(#[from] SourceError),

    /// An action was dispatched while its precondition does not hold.
    ///
    /// This is an integration bug in the driver (a leaked timer, a double
    /// dispatch) and is never recovered from.
    #[error("Invalid transition: action '{action}' is not allowed while the session is {status}")]
    InvalidTransition { action: &'static str, status: Status },

    #[error("Invalid answer: option {chosen} does not exist (question has {options} options)")]
    InvalidAnswer { chosen: usize, options: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl QuizError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuizError::InvalidInput(_) => 3,
            QuizError::InvalidTransition { .. } | QuizError::InvalidAnswer { .. } => 4,
            QuizError::Source(_) => 1,
            QuizError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Failures of the question source
///
/// Payloads are plain strings so the error can be cloned into UI state and
/// log records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Question server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("Failed to read question file: {0}")]
    Io(String),

    #[error("Malformed question pool: {0}")]
    Parse(String),

    #[error("Question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}
