//! Configuration management for Quizcast

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::session::{SessionSettings, SECS_PER_QUESTION};

pub const DEFAULT_SOURCE_URL: &str = "http://localhost:5000/questions";
pub const DEFAULT_SOURCE_TIMEOUT: &str = "10s";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Question server endpoint
    pub url: String,
    /// Local JSON pool; takes precedence over `url`
    pub file: Option<String>,
    /// Request timeout in humantime notation ("10s", "1m")
    pub timeout: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub seconds_per_question: u32,
    /// Fixed shuffle seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            file: None,
            timeout: DEFAULT_SOURCE_TIMEOUT.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seconds_per_question: SECS_PER_QUESTION,
            seed: None,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.timeout).map_err(|e| {
            ConfigError::InvalidValue {
                field: "source.timeout".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl SessionConfig {
    pub fn settings(&self) -> SessionSettings {
        SessionSettings {
            seconds_per_question: self.seconds_per_question,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.session.seconds_per_question == 0 {
            return Err(ConfigError::InvalidValue {
                field: "session.seconds_per_question".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if self.source.url.trim().is_empty() && self.source.file.is_none() {
            return Err(ConfigError::MissingField("source.url".to_string()).into());
        }
        self.source.timeout()?;
        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("QUIZ_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("quizcast").join("config.toml"))
}
