//! Settings persistence: one JSON object in one well-known file.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use strictly_mastermind::Settings;
use tracing::{debug, info, instrument, warn};

/// Reads and writes the player's settings.
///
/// The file holds exactly `{"alphabetSize", "codeLength", "allowDuplicates"}`.
/// Reads fail soft; writes are synchronous and last-write-wins.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store backed by the file at `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating SettingsStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the saved settings, or the defaults.
    ///
    /// A missing, unreadable, malformed or out-of-range file yields the
    /// defaults and is never reported as an error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Settings {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved settings, using defaults");
                return Settings::default();
            }
            Err(e) => {
                warn!(error = %e, "Unreadable settings file, using defaults");
                return Settings::default();
            }
        };

        let settings = match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Malformed settings file, using defaults");
                return Settings::default();
            }
        };

        if let Err(e) = settings.validate() {
            warn!(error = %e, "Saved settings out of range, using defaults");
            return Settings::default();
        }

        info!(%settings, "Settings loaded");
        settings
    }

    /// Persists `settings`, replacing whatever was saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the settings are invalid or the file cannot
    /// be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        settings
            .validate()
            .map_err(|e| StoreError::new(format!("Refusing to save invalid settings: {}", e)))?;

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| StoreError::new(format!("Failed to serialize settings: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::new(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(&self.path, json).map_err(|e| {
            StoreError::new(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        info!(%settings, "Settings saved");
        Ok(())
    }

    /// Removes saved settings so the next load yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if an existing file cannot be removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Saved settings removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::new(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// Settings persistence error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
