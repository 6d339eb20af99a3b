//! Client configuration: where the judge lives and where settings are kept.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Environment variable overriding the judge base URL.
pub const JUDGE_URL_ENV: &str = "MASTERMIND_JUDGE_URL";
/// Environment variable overriding the settings file path.
pub const SETTINGS_PATH_ENV: &str = "MASTERMIND_SETTINGS_PATH";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "MASTERMIND_TIMEOUT_SECS";

/// Paths of the three judge operations, appended to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct JudgeEndpoints {
    /// Allocates a session.
    start: String,
    /// Creates the secret.
    generate: String,
    /// Judges a guess.
    evaluate: String,
}

impl Default for JudgeEndpoints {
    fn default() -> Self {
        Self {
            start: "/mm_start".to_string(),
            generate: "/mm_gen".to_string(),
            evaluate: "/mm_judge".to_string(),
        }
    }
}

/// Connection settings for the judging service.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct JudgeConfig {
    /// Base URL, without a trailing slash.
    base_url: String,

    /// Operation paths.
    endpoints: JudgeEndpoints,

    /// Per-request timeout in seconds.
    timeout_secs: u64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.r.cx/api".to_string(),
            endpoints: JudgeEndpoints::default(),
            timeout_secs: 10,
        }
    }
}

impl JudgeConfig {
    /// Creates a configuration for a judge at `base_url` with default paths.
    #[instrument]
    pub fn new(base_url: impl Into<String> + std::fmt::Debug) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of an operation path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Top-level client configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct ClientConfig {
    /// Judging service connection.
    judge: JudgeConfig,

    /// File holding the persisted player settings.
    settings_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            judge: JudgeConfig::default(),
            settings_path: PathBuf::from("mastermind_settings.json"),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(base_url = %config.judge.base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path` if given, else from `default_path` if it exists,
    /// else uses built-in defaults.
    ///
    /// # Errors
    ///
    /// An explicitly requested file must exist and parse.
    #[instrument]
    pub fn load(path: Option<&Path>, default_path: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if default_path.exists() => Self::from_file(default_path),
            None => {
                info!(
                    "Config file not found at {}, using defaults",
                    default_path.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the timeout override is not a number.
    #[instrument(skip(self, lookup))]
    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(JUDGE_URL_ENV) {
            info!(url = %url, "Overriding judge URL");
            self.judge.base_url = url;
        }
        if let Some(path) = lookup(SETTINGS_PATH_ENV) {
            info!(path = %path, "Overriding settings path");
            self.settings_path = PathBuf::from(path);
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            self.judge.timeout_secs = secs.trim().parse().map_err(|e| {
                warn!(value = %secs, "Invalid timeout override");
                ConfigError::new(format!("{} must be a number of seconds: {}", TIMEOUT_ENV, e))
            })?;
        }
        Ok(self)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::apply_overrides`].
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
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
