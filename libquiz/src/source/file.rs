//! JSON file question source

use async_trait::async_trait;
use std::path::PathBuf;

use super::{parse_pool, QuestionSource};
use crate::error::{Result, SourceError};
use crate::types::Question;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Question>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {}", self.path.display(), e)))?;

        Ok(parse_pool(&content)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
