//! Error type shared by the library crates.
//!
//! Only a few paths surface errors to a user: reading an image to attach,
//! out-of-range edits and the CLI's explicit storage commands. Loading and
//! saving the profile swallow their errors after logging them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MockgramError {
    /// File system failure, with the `io::ErrorKind` folded into the message
    #[error("IO error: {message}")]
    Io { message: String },

    /// Stored or configured text did not decode (or a value did not encode)
    #[error("Cannot decode {format}: {message}")]
    Serialization {
        format: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    /// The key-value store refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// An edit addressed a highlight or post that does not exist
    #[error("Index {index} is out of range for {collection} (length {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MockgramError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// `Ok` when `index` addresses an element of a `len`-long collection.
    pub fn check_index(collection: &'static str, index: usize, len: usize) -> Result<()> {
        if index < len {
            return Ok(());
        }
        Err(Self::IndexOutOfRange {
            collection,
            index,
            len,
        })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    fn decode(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            format,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for MockgramError {
    fn from(err: std::io::Error) -> Self {
        Self::io(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for MockgramError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode("JSON", err)
    }
}

impl From<toml::de::Error> for MockgramError {
    fn from(err: toml::de::Error) -> Self {
        Self::decode("TOML", err)
    }
}

impl From<toml::ser::Error> for MockgramError {
    fn from(err: toml::ser::Error) -> Self {
        Self::decode("TOML", err)
    }
}

pub type Result<T> = std::result::Result<T, MockgramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(MockgramError::check_index("posts", 0, 1).is_ok());

        let err = MockgramError::check_index("posts", 3, 3).unwrap_err();
        assert!(err.is_index_out_of_range());
        assert_eq!(
            err.to_string(),
            "Index 3 is out of range for posts (length 3)"
        );
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MockgramError = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_json_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MockgramError = parse.into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Cannot decode JSON"));
    }
}
