//! `config.toml` access with an in-process cache.

use crate::paths::MockgramPaths;
use crate::storage::AtomicTomlFile;
use mockgram_core::config::AppConfig;
use mockgram_core::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Reads [`AppConfig`] once and serves clones until invalidated.
///
/// A missing file yields the defaults; a malformed one is an error, so a
/// typo in `config.toml` is reported instead of silently ignored.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<AppConfig>>,
    cached: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
            cached: Arc::default(),
        }
    }

    /// Service over the platform `config.toml`.
    pub fn from_paths(paths: &MockgramPaths) -> Result<Self> {
        Ok(Self::new(paths.config_file()?))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        let cached = self
            .cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(config) = cached {
            return Ok(config);
        }

        let config = self.file.load()?.unwrap_or_default();
        tracing::debug!(
            "[ConfigService] Read {} (storage_key: {}, log_level: {})",
            self.file.path().display(),
            config.storage_key,
            config.log_level
        );
        self.remember(&config);
        Ok(config)
    }

    /// Writes `config` and makes it the cached value.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        self.file.save(config)?;
        self.remember(config);
        Ok(())
    }

    /// Drops the cached value; the next read goes to disk.
    pub fn invalidate_cache(&self) {
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn remember(&self, config: &AppConfig) {
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
    }
}
