//! Unified path management for mockgram files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/mockgram/          # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/mockgram/     # Data directory (overridable)
//! ├── storage/                 # Key-value entries, one file per key
//! │   └── instagramProfileData.value
//! └── logs/
//!     └── mockgram.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR_NAME: &str = "mockgram";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for mockgram_core::MockgramError {
    fn from(err: PathError) -> Self {
        mockgram_core::MockgramError::config(err.to_string())
    }
}

/// Path resolution for mockgram.
///
/// The data directory can be overridden (CLI flag or `data_dir` in the
/// config); everything stored at runtime lives below it.
#[derive(Debug, Clone, Default)]
pub struct MockgramPaths {
    data_override: Option<PathBuf>,
}

impl MockgramPaths {
    /// Creates a resolver, optionally pinning the data directory.
    pub fn new(data_override: Option<PathBuf>) -> Self {
        Self { data_override }
    }

    /// Returns the mockgram configuration directory (e.g. `~/.config/mockgram/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the data directory, honoring the override.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = &self.data_override {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the directory holding key-value entries.
    pub fn storage_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("storage"))
    }

    /// Returns the directory for rolling log files.
    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("logs"))
    }
}
