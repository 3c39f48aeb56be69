// SPDX-License-Identifier: MPL-2.0
//! Files handed to the editor by the file picker or drag-and-drop.

use crate::error::Result;
use image_rs::ImageFormat;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Content type used when the format cannot be inferred.
pub const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// A (filename, content type, bytes) triple as produced by the operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

impl RawFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, inferring its content type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Io`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(file_name, content_type_for_path(path), bytes))
    }

    /// Whether the declared content type is an image type.
    pub fn is_image(&self) -> bool {
        is_image_content_type(&self.content_type)
    }
}

/// Infers a MIME type from a file extension using the `image` format table.
pub fn content_type_for_path(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_CONTENT_TYPE)
}

/// `image/*` check, ASCII case-insensitive.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}
