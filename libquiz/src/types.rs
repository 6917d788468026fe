//! Core types for Quizcast

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SourceError;

/// A single trivia question as delivered by the question source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question", alias = "text")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctOption")]
    pub correct_option: usize,
    pub points: u32,
    pub difficulty: Difficulty,
}

impl Question {
    /// Check the record is answerable: at least two options and a correct
    /// option that indexes into them.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.options.len() < 2 {
            return Err(format!(
                "needs at least two options, found {}",
                self.options.len()
            ));
        }
        if self.correct_option >= self.options.len() {
            return Err(format!(
                "correct option {} is out of range for {} options",
                self.correct_option,
                self.options.len()
            ));
        }
        Ok(())
    }

    pub fn is_correct(&self, chosen: usize) -> bool {
        chosen == self.correct_option
    }
}

/// Validate every record of a pool, reporting the first bad one
pub fn validate_pool(pool: &[Question]) -> std::result::Result<(), SourceError> {
    for (index, question) in pool.iter().enumerate() {
        question
            .validate()
            .map_err(|reason| SourceError::InvalidQuestion { index, reason })?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Difficulty filter applied when a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            Self::All => true,
            Self::Easy => difficulty == Difficulty::Easy,
            Self::Medium => difficulty == Difficulty::Medium,
            Self::Hard => difficulty == Difficulty::Hard,
        }
    }

    /// Next filter in display order, wrapping back to `All`
    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Easy,
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::Easy,
            Difficulty::Medium => Self::Medium,
            Difficulty::Hard => Self::Hard,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(format!(
                "Invalid difficulty: '{}'. Valid options: all, easy, medium, hard",
                s
            )),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
