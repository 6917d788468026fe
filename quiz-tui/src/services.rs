//! Service layer adapter for the TUI
//!
//! Bridges the async `QuestionSource` to the synchronous event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: owns the source and a tokio runtime
//! - Fetching: spawns an async task per request and reports the single
//!   outcome over a crossbeam channel the loop drains with `try_recv`
//! - Every fetch carries a fresh id so the reducer can drop outcomes of
//!   fetches that were superseded by a restart
//!
//! # Example
//!
//! ```no_run
//! use libquiz::source::mock::MockSource;
//! use quiz_tui::services::ServiceHandle;
//!
//! # fn example() -> quiz_tui::error::Result<()> {
//! let services = ServiceHandle::new(Box::new(MockSource::success(Vec::new())))?;
//!
//! let (fetch_id, outcome_rx) = services.fetch();
//! if let Ok(outcome) = outcome_rx.recv() {
//!     assert_eq!(outcome.fetch_id, fetch_id);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver};
use libquiz::source::QuestionSource;
use libquiz::Question;

use crate::app::Action;
use crate::error::Result;

/// Result of one fetch, tagged with the id returned by `ServiceHandle::fetch`
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub fetch_id: String,
    pub result: std::result::Result<Vec<Question>, String>,
}

impl From<FetchOutcome> for Action {
    fn from(outcome: FetchOutcome) -> Self {
        Action::FetchCompleted {
            fetch_id: outcome.fetch_id,
            result: outcome.result,
        }
    }
}

/// Service handle for TUI operations
///
/// Uses a tokio runtime to run fetches without blocking the UI.
pub struct ServiceHandle {
    source: Arc<dyn QuestionSource>,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a new service handle around a question source
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(source: Box<dyn QuestionSource>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            source: Arc::from(source),
            runtime,
        })
    }

    /// Where questions come from, for the status line
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Fetch the question pool in the background
    ///
    /// Returns immediately with the fetch id and a receiver that yields
    /// exactly one `FetchOutcome`. If the task dies before reporting, the
    /// receiver disconnects instead.
    pub fn fetch(&self) -> (String, Receiver<FetchOutcome>) {
        let (tx, rx) = bounded(1);
        let fetch_id = uuid::Uuid::new_v4().to_string();

        let source = Arc::clone(&self.source);
        let id = fetch_id.clone();

        self.runtime.spawn(async move {
            tracing::info!(fetch_id = %id, source = %source.describe(), "fetching questions");

            let result = match source.fetch().await {
                Ok(pool) => {
                    tracing::info!(fetch_id = %id, count = pool.len(), "questions received");
                    Ok(pool)
                }
                Err(e) => {
                    tracing::warn!(fetch_id = %id, error = %e, "question fetch failed");
                    Err(e.to_string())
                }
            };

            // Receiver dropped means nobody waits for this fetch anymore
            let _ = tx.send(FetchOutcome {
                fetch_id: id,
                result,
            });
        });

        (fetch_id, rx)
    }
}
