//! Persistence adapter for the profile record.
//!
//! The record is stored as one JSON string under a fixed key of a
//! [`KeyValueStore`]. There is no schema version: anything that does not
//! decode into a complete record is treated as corrupt and replaced by the
//! default sample on load.

use mockgram_core::error::Result;
use mockgram_core::profile::{ProfileRecord, ProfileRepository, default_profile};
use mockgram_core::storage::{KeyValueStore, PROFILE_STORAGE_KEY};
use std::sync::Arc;

/// [`ProfileRepository`] backed by a key-value store.
#[derive(Clone)]
pub struct KeyValueProfileRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValueProfileRepository {
    /// Creates a repository using the standard `instagramProfileData` key.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, PROFILE_STORAGE_KEY)
    }

    /// Creates a repository using a custom key.
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored text as-is.
    pub fn raw(&self) -> Result<Option<String>> {
        self.store.get(&self.key)
    }

    /// Loads and decodes the stored record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))`: a complete record was stored
    /// - `Ok(None)`: nothing is stored under the key
    /// - `Err`: the store failed or the value does not decode
    pub fn try_load(&self) -> Result<Option<ProfileRecord>> {
        match self.store.get(&self.key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Encodes and stores the record, reporting failures.
    pub fn try_save(&self, record: &ProfileRecord) -> Result<()> {
        let text = serde_json::to_string(record)?;
        self.store.set(&self.key, &text)
    }
}

impl ProfileRepository for KeyValueProfileRepository {
    fn load(&self) -> ProfileRecord {
        match self.try_load() {
            Ok(Some(record)) => {
                tracing::debug!(
                    "[ProfileRepository] Loaded profile '{}' ({} posts)",
                    record.username,
                    record.post_count()
                );
                record
            }
            Ok(None) => {
                tracing::info!(
                    "[ProfileRepository] No stored profile under '{}', using default",
                    self.key
                );
                default_profile()
            }
            Err(e) => {
                tracing::warn!(
                    "[ProfileRepository] Discarding stored profile under '{}': {}",
                    self.key,
                    e
                );
                default_profile()
            }
        }
    }

    fn save(&self, record: &ProfileRecord) {
        if let Err(e) = self.try_save(record) {
            tracing::warn!(
                "[ProfileRepository] Failed to save profile under '{}': {}",
                self.key,
                e
            );
        }
    }
}
