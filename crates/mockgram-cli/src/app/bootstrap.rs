//! Composition root: resolves settings and wires the concrete adapters.

use anyhow::{Context, Result};
use mockgram_application::{Navigator, ProfileStore};
use mockgram_core::config::AppConfig;
use mockgram_infrastructure::paths::MockgramPaths;
use mockgram_infrastructure::{ConfigService, FileKeyValueStore, KeyValueProfileRepository};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Command-line overrides; each wins over the matching config value.
#[derive(Debug, Default)]
pub struct Options {
    pub data_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub seed: Option<u64>,
}

/// Resolved settings and the persistence adapter.
pub struct App {
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub log_level: String,
    pub feed_seed: Option<u64>,
    pub repository: Arc<KeyValueProfileRepository>,
}

impl App {
    /// Opens the store from whatever is persisted.
    pub fn open_store(&self) -> Arc<ProfileStore> {
        Arc::new(ProfileStore::open(self.repository.clone()))
    }

    /// A navigator at `/` over a freshly opened store.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.open_store()).with_feed_seed(self.feed_seed)
    }
}

/// Reads the configuration and builds the [`App`].
///
/// Nothing is logged here: the subscriber is installed afterwards, once the
/// log directory is known.
pub fn bootstrap(options: Options) -> Result<App> {
    let config = load_config(options.config_file.as_deref())?;
    resolve(options, config)
}

fn load_config(config_file: Option<&Path>) -> Result<AppConfig> {
    let service = match config_file {
        Some(path) => ConfigService::new(path.to_path_buf()),
        None => ConfigService::from_paths(&MockgramPaths::new(None))
            .context("Failed to locate config.toml")?,
    };
    service
        .get_config()
        .with_context(|| format!("Failed to read {}", service.path().display()))
}

fn resolve(options: Options, config: AppConfig) -> Result<App> {
    let paths = MockgramPaths::new(options.data_dir.or(config.data_dir));
    let data_dir = paths.data_dir().context("Failed to resolve data directory")?;
    let logs_dir = paths.logs_dir().context("Failed to resolve log directory")?;
    let storage_dir = paths
        .storage_dir()
        .context("Failed to resolve storage directory")?;

    let store = Arc::new(FileKeyValueStore::new(storage_dir));
    let repository = Arc::new(KeyValueProfileRepository::with_key(
        store,
        config.storage_key,
    ));

    Ok(App {
        data_dir,
        logs_dir,
        log_level: options.log_level.unwrap_or(config.log_level),
        feed_seed: options.seed.or(config.feed_seed),
        repository,
    })
}
