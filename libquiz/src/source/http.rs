//! HTTP question source
//!
//! Fetches the pool from a question server with a single GET. Failures are
//! reported once; there is no retry.

use async_trait::async_trait;
use std::time::Duration;

use super::{parse_pool, QuestionSource};
use crate::error::{QuizError, Result, SourceError};
use crate::types::Question;

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a source for `url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the URL is not http(s), or `Source` if the
    /// HTTP client cannot be built.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(QuizError::InvalidInput(format!(
                "Question server URL must start with http:// or https://: {}",
                url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Question>> {
        tracing::debug!(url = %self.url, "requesting question pool");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(parse_pool(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
