//! Directory-backed key-value store.

use mockgram_core::MockgramError;
use mockgram_core::error::Result;
use mockgram_core::storage::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::atomic_file::{FileLock, write_atomic};

const VALUE_EXTENSION: &str = "value";

/// Key-value store keeping one file per key in a directory.
///
/// Keys are mapped to file names by replacing every character outside
/// `[A-Za-z0-9_-]` with `_`, so `a.b` and `a_b` share an entry. Writes are
/// atomic (temporary file + rename) and serialized through a lock file.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let name = sanitize_key(key)?;
        Ok(self.dir.join(format!("{}.{}", name, VALUE_EXTENSION)))
    }
}

fn sanitize_key(key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(MockgramError::invalid_input("storage key must not be empty"));
    }
    Ok(key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect())
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _lock = FileLock::acquire(&path)?;
        write_atomic(&path, value.as_bytes())?;
        tracing::debug!(
            "[FileKeyValueStore] Wrote {} bytes to {}",
            value.len(),
            path.display()
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        assert_eq!(store.get("instagramProfileData").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("storage"));

        store.set("instagramProfileData", "{\"a\":1}").unwrap();
        assert_eq!(
            store.get("instagramProfileData").unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        store.set("instagramProfileData", "overwritten").unwrap();
        assert_eq!(
            store.get("instagramProfileData").unwrap().as_deref(),
            Some("overwritten")
        );
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_key_sanitizing() {
        let store = FileKeyValueStore::new("/data");
        assert_eq!(
            store.path_for("../etc/passwd").unwrap(),
            PathBuf::from("/data/___etc_passwd.value")
        );
        assert_eq!(
            store.path_for("instagramProfileData").unwrap(),
            PathBuf::from("/data/instagramProfileData.value")
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let store = FileKeyValueStore::new("/data");
        let err = store.get("").unwrap_err();
        assert!(matches!(err, MockgramError::InvalidInput(_)));
    }

    #[test]
    fn test_no_leftover_files_after_set() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        store.set("key", "value").unwrap();

        let names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["key.value".to_string()]);
    }
}
