//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rounds needed to win a match unless configured otherwise.
pub const DEFAULT_WINNING_SCORE: u32 = 5;

/// How the opening side of a match is chosen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum FirstMoverPolicy {
    /// The human always opens.
    #[strum(to_string = "human", serialize = "player")]
    #[serde(alias = "human", alias = "player")]
    AlwaysHuman,
    /// The computer always opens.
    #[strum(to_string = "computer")]
    #[serde(alias = "computer")]
    AlwaysComputer,
    /// Ask the human before each match.
    #[default]
    #[strum(to_string = "ask", serialize = "choose")]
    #[serde(alias = "choose")]
    Ask,
}

/// Settings for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct MatchConfig {
    /// Round wins that end the match.
    winning_score: u32,
    /// How the opening side is chosen.
    first_mover: FirstMoverPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            first_mover: FirstMoverPolicy::default(),
        }
    }
}

impl MatchConfig {
    /// Checks that the configuration can produce a finished match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `winning_score` is zero.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_score == 0 {
            return Err(ConfigError::new(
                "winning_score must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
