//! Game settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// User-configurable settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize, new)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Answer to the rematch prompt that starts another round.
    #[serde(default = "default_rematch_token")]
    rematch_token: String,

    /// Whether to print the rules banner when the session starts.
    #[serde(default = "default_show_rules")]
    show_rules: bool,
}

fn default_rematch_token() -> String {
    "д".to_string()
}

fn default_show_rules() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(default_rematch_token(), default_show_rules())
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        if settings.rematch_token.trim().is_empty() {
            return Err(ConfigError::new("rematch_token must not be empty".to_string()));
        }

        info!(rematch_token = %settings.rematch_token, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Turns off the rules banner.
    pub fn without_rules(mut self) -> Self {
        self.show_rules = false;
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
