//! Application configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::storage::PROFILE_STORAGE_KEY;

fn default_storage_key() -> String {
    PROFILE_STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Root configuration read from `config.toml`.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Key the profile record is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Overrides the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Default tracing filter for the log file
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed for the feed's like counters; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            data_dir: None,
            log_level: default_log_level(),
            feed_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "instagramProfileData");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str("feed_seed = 7\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.feed_seed, Some(7));
        assert_eq!(config.log_level, "debug");
        assert!(config.data_dir.is_none());
    }
}
