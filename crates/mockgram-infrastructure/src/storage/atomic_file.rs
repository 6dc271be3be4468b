//! Atomic file writes and the TOML file handle built on them.

use mockgram_core::MockgramError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtomicFileError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("TOML encode error: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("Failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AtomicFileError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<AtomicFileError> for MockgramError {
    fn from(e: AtomicFileError) -> Self {
        match e {
            AtomicFileError::Io { path, source } => MockgramError::io(format!(
                "{}: {} (kind: {:?})",
                path.display(),
                source,
                source.kind()
            )),
            AtomicFileError::Parse { source, .. } => source.into(),
            AtomicFileError::Encode(source) => source.into(),
            lock @ AtomicFileError::Lock { .. } => MockgramError::storage(lock.to_string()),
        }
    }
}

/// Writes `contents` to `path` all-or-nothing.
///
/// The bytes go to a hidden `.{name}.tmp` sibling, are fsynced, and the
/// sibling is renamed over the target. Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), AtomicFileError> {
    let (dir, file_name) = match (path.parent(), path.file_name()) {
        (Some(dir), Some(file_name)) => (dir, file_name),
        _ => {
            return Err(AtomicFileError::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a file path"),
            ));
        }
    };
    ensure_dir(dir)?;

    let tmp_path = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));
    let written = File::create(&tmp_path).and_then(|mut tmp| {
        tmp.write_all(contents)?;
        tmp.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(AtomicFileError::io(&tmp_path, e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        AtomicFileError::io(path, e)
    })
}

fn ensure_dir(dir: &Path) -> Result<(), AtomicFileError> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| AtomicFileError::io(dir, e))
}

/// A TOML document on disk, read whole and replaced atomically.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the document.
    ///
    /// A missing or blank file is `Ok(None)`; unreadable or malformed
    /// content is an error.
    pub fn load(&self) -> Result<Option<T>, AtomicFileError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AtomicFileError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| AtomicFileError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    pub fn save(&self, data: &T) -> Result<(), AtomicFileError> {
        let text = toml::to_string_pretty(data)?;
        write_atomic(&self.path, text.as_bytes())
    }
}

/// Exclusive advisory lock on `<path>.lock`, released on drop.
///
/// The lock file itself stays on disk so every process locks the same inode.
pub(crate) struct FileLock {
    _file: File,
}

impl FileLock {
    pub(crate) fn acquire(path: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = path.with_extension("lock");
        if let Some(dir) = lock_path.parent() {
            ensure_dir(dir)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| AtomicFileError::io(&lock_path, e))?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(|source| AtomicFileError::Lock {
                path: lock_path.clone(),
                source,
            })?;
        }

        Ok(FileLock { _file: file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<TestConfig>::new(temp_dir.path().join("test.toml"));

        let config = TestConfig {
            name: "test".to_string(),
            count: 42,
        };
        file.save(&config).unwrap();

        assert_eq!(file.load().unwrap(), Some(config));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<TestConfig>::new(temp_dir.path().join("nonexistent.toml"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_blank_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.toml");
        fs::write(&path, "  \n").unwrap();
        let file = AtomicTomlFile::<TestConfig>::new(path);
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("value.json");

        write_atomic(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temp_dir.path().join("nested").join(".value.json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("value.txt");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_file_lock_keeps_lock_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("value.json");
        {
            let _lock = FileLock::acquire(&path).unwrap();
            assert!(temp_dir.path().join("value.lock").exists());
        }
        assert!(temp_dir.path().join("value.lock").exists());

        // Released on drop, so it can be taken again
        let _again = FileLock::acquire(&path).unwrap();
    }
}
