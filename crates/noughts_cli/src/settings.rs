//! Settings file loading and command-line overrides.

use crate::cli::Cli;
use noughts_core::{ConfigError, MatchConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Log file used when neither the settings file nor the flags name one.
pub const DEFAULT_LOG_FILE: &str = "noughts.log";

/// Everything the binary needs before the first prompt.
///
/// ```toml
/// log_file = "noughts.log"
///
/// [match]
/// winning_score = 5
/// first_mover = "ask"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Match rules.
    #[serde(rename = "match")]
    pub game: MatchConfig,
    /// Trace output destination.
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(config = ?settings.game, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise starts from defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of file values and validates.
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(score) = cli.winning_score {
            self.game = self.game.with_winning_score(score);
        }
        if let Some(policy) = cli.first_mover {
            self.game = self.game.with_first_mover(policy);
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
        self.game.validate()?;
        Ok(self)
    }

    /// Trace output destination, falling back to [`DEFAULT_LOG_FILE`].
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}
