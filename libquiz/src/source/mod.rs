//! Question sources
//!
//! A question source delivers the full pool for a session, or fails. The
//! driver turns the outcome into exactly one `DataReceived` or `FetchFailed`
//! action; sources never retry.
//!
//! # Examples
//!
//! ```no_run
//! use libquiz::source::{QuestionSource, http::HttpSource};
//! use std::time::Duration;
//!
//! # async fn example() -> libquiz::Result<()> {
//! let source = HttpSource::new("http://localhost:5000/questions", Duration::from_secs(10))?;
//! let pool = source.fetch().await?;
//! println!("{} questions from {}", pool.len(), source.describe());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::SourceConfig;
use crate::error::{Result, SourceError};
use crate::types::{validate_pool, Question};

pub mod file;
pub mod http;

// Available outside tests so driver integration tests can use it
pub mod mock;

/// Provider of the question pool
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch and validate the full question pool
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the pool cannot be obtained, is not valid
    /// JSON, or contains an unanswerable question.
    async fn fetch(&self) -> Result<Vec<Question>>;

    /// Human-readable origin of the questions (URL, path, ...)
    fn describe(&self) -> String;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PoolDocument {
    Bare(Vec<Question>),
    Wrapped { questions: Vec<Question> },
}

/// Parse a pool from JSON text
///
/// Accepts either a bare array of questions or an object with a `questions`
/// array, and validates every record.
pub fn parse_pool(json: &str) -> std::result::Result<Vec<Question>, SourceError> {
    let document: PoolDocument =
        serde_json::from_str(json).map_err(|e| SourceError::Parse(e.to_string()))?;

    let pool = match document {
        PoolDocument::Bare(questions) => questions,
        PoolDocument::Wrapped { questions } => questions,
    };

    validate_pool(&pool)?;
    Ok(pool)
}

/// Build the source described by configuration
///
/// A configured file wins over the URL.
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn QuestionSource>> {
    if let Some(path) = &config.file {
        let path = shellexpand::tilde(path).to_string();
        return Ok(Box::new(file::FileSource::new(path)));
    }

    let timeout = config.timeout()?;
    Ok(Box::new(http::HttpSource::new(&config.url, timeout)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: &str = r#"[
        {"question": "Q1", "options": ["a", "b"], "correctOption": 0, "points": 10, "difficulty": "easy"},
        {"question": "Q2", "options": ["a", "b", "c"], "correctOption": 2, "points": 20, "difficulty": "hard"}
    ]"#;

    #[test]
    fn test_parse_bare_array() {
        let pool = parse_pool(POOL).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[1].points, 20);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let json = format!(r#"{{"questions": {}}}"#, POOL);
        let pool = parse_pool(&json).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_pool("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_pool("{not json").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_question() {
        let json = r#"[{"question": "Q", "options": ["a", "b"], "correctOption": 5, "points": 1, "difficulty": "easy"}]"#;
        let err = parse_pool(json).unwrap_err();
        assert!(matches!(err, SourceError::InvalidQuestion { index: 0, .. }));
    }

    #[test]
    fn test_from_config_prefers_file() {
        let config = SourceConfig {
            file: Some("/tmp/questions.json".to_string()),
            ..SourceConfig::default()
        };
        let source = from_config(&config).unwrap();
        assert_eq!(source.describe(), "/tmp/questions.json");
    }

    #[test]
    fn test_from_config_defaults_to_http() {
        let source = from_config(&SourceConfig::default()).unwrap();
        assert_eq!(source.describe(), "http://localhost:5000/questions");
    }
}
