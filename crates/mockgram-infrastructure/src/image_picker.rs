//! Filesystem-backed image picker.

use async_trait::async_trait;
use mockgram_core::MockgramError;
use mockgram_core::error::Result;
use mockgram_core::image::{ImagePicker, PickedImage};
use std::path::Path;

/// Reads images from local paths, guessing the MIME type from the extension.
///
/// Only `image/*` types are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImagePicker;

impl FsImagePicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImagePicker for FsImagePicker {
    async fn read(&self, source: &Path) -> Result<PickedImage> {
        let mime = mime_guess::from_path(source).first_or_octet_stream();
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(MockgramError::invalid_input(format!(
                "{} is not an image ({})",
                source.display(),
                mime
            )));
        }

        let bytes = tokio::fs::read(source).await.map_err(|e| {
            MockgramError::io(format!("Failed to read {}: {}", source.display(), e))
        })?;

        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        tracing::debug!(
            "[FsImagePicker] Read {} ({}, {} bytes)",
            name,
            mime,
            bytes.len()
        );

        Ok(PickedImage {
            name,
            mime_type: mime.essence_str().to_string(),
            bytes,
        })
    }
}
