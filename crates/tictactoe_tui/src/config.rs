//! Application configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe::StartingPlayerPolicy;
use tracing::instrument;

/// Settings for the terminal game.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Who opens each match after a restart.
    starting_player: StartingPlayerPolicy,

    /// How long the loop waits for input before redrawing, in milliseconds.
    poll_interval_ms: u64,

    /// Where log output goes; the terminal itself belongs to the UI.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            starting_player: StartingPlayerPolicy::AlwaysX,
            poll_interval_ms: 100,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Logging is not set up yet when this runs, so it reports only through
    /// its return value.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.poll_interval_ms == 0 {
            return Err(ConfigError::new("poll_interval_ms must be positive"));
        }
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file settings.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if cli.alternate_start {
            self.starting_player = StartingPlayerPolicy::Alternate;
        }
        if let Some(ms) = cli.poll_ms {
            self.poll_interval_ms = ms;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        self
    }

    /// The input polling cadence.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
