//! Embedded images picked from local files.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use std::path::Path;

use crate::error::Result;

/// Raw bytes of a user-selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    /// File name without directories
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PickedImage {
    /// Encodes the image as a self-contained `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            BASE64_STANDARD.encode(&self.bytes)
        )
    }
}

/// Where an attached image ends up in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    Profile,
    Highlight(usize),
    Post(usize),
}

/// Source of local image files.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Reads the file at `source`.
    async fn read(&self, source: &Path) -> Result<PickedImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_uri() {
        let image = PickedImage {
            name: "dot.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: b"hello".to_vec(),
        };
        assert_eq!(image.to_data_uri(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_to_data_uri_empty_payload() {
        let image = PickedImage {
            name: "empty.gif".to_string(),
            mime_type: "image/gif".to_string(),
            bytes: Vec::new(),
        };
        assert_eq!(image.to_data_uri(), "data:image/gif;base64,");
    }
}
