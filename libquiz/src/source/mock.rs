//! Mock question source for testing
//!
//! Simulates a question server that succeeds, fails, or answers slowly,
//! and counts how often it was asked. Drivers use it in integration tests
//! without a network.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use super::QuestionSource;
use crate::error::{Result, SourceError};
use crate::types::Question;

/// Configuration for mock source behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Pool returned on success
    pub pool: Vec<Question>,

    /// Error returned instead of the pool
    pub error: Option<SourceError>,

    /// Delay before completing (simulates network latency)
    pub delay: Duration,

    /// Number of times fetch has been called
    pub fetch_call_count: Arc<Mutex<usize>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            pool: Vec::new(),
            error: None,
            delay: Duration::from_millis(0),
            fetch_call_count: Arc::new(Mutex::new(0)),
        }
    }
}

pub struct MockSource {
    config: MockConfig,
}

impl MockSource {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// A source that always returns `pool`
    pub fn success(pool: Vec<Question>) -> Self {
        Self::new(MockConfig {
            pool,
            ..Default::default()
        })
    }

    /// A source that always fails with a network error
    pub fn failure(error: &str) -> Self {
        Self::new(MockConfig {
            error: Some(SourceError::Network(error.to_string())),
            ..Default::default()
        })
    }

    /// A source that returns `pool` after `delay`
    pub fn with_delay(pool: Vec<Question>, delay: Duration) -> Self {
        Self::new(MockConfig {
            pool,
            delay,
            ..Default::default()
        })
    }

    /// Shared counter of fetch calls, readable after the source is moved
    pub fn call_counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.config.fetch_call_count)
    }

    pub fn fetch_call_count(&self) -> usize {
        self.config
            .fetch_call_count
            .lock()
            .map(|count| *count)
            .unwrap_or(0)
    }
}

#[async_trait]
impl QuestionSource for MockSource {
    async fn fetch(&self) -> Result<Vec<Question>> {
        if let Ok(mut count) = self.config.fetch_call_count.lock() {
            *count += 1;
        }

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        match &self.config.error {
            Some(error) => Err(error.clone().into()),
            None => Ok(self.config.pool.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use crate::types::Difficulty;

    fn pool() -> Vec<Question> {
        vec![Question {
            text: "Q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_option: 0,
            points: 10,
            difficulty: Difficulty::Easy,
        }]
    }

    #[tokio::test]
    async fn test_success_returns_pool() {
        let source = MockSource::success(pool());
        assert_eq!(source.fetch().await.unwrap(), pool());
        assert_eq!(source.fetch_call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_returns_error() {
        let source = MockSource::failure("connection refused");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, QuizError::Source(SourceError::Network(_))));
    }

    #[tokio::test]
    async fn test_counter_survives_move() {
        let source = MockSource::with_delay(pool(), Duration::from_millis(5));
        let counter = source.call_counter();

        let boxed: Box<dyn QuestionSource> = Box::new(source);
        boxed.fetch().await.unwrap();
        boxed.fetch().await.unwrap();

        assert_eq!(*counter.lock().unwrap(), 2);
    }
}
