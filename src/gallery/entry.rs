// SPDX-License-Identifier: MPL-2.0
//! One image known to the editor.

use super::decode::PreviewImage;
use std::fmt;
use std::sync::Arc;

/// Opaque identity assigned when an entry enters a collection.
///
/// Never reused within a collection and never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an entry's image lives.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Newly selected file, held in memory until the form is submitted.
    LocalPending {
        file_name: String,
        content_type: String,
        bytes: Arc<[u8]>,
    },
    /// Image already stored by the server.
    Remote { locator: String },
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::LocalPending {
                file_name,
                content_type,
                bytes,
            } => f
                .debug_struct("LocalPending")
                .field("file_name", file_name)
                .field("content_type", content_type)
                .field("len", &bytes.len())
                .finish(),
            ImageSource::Remote { locator } => {
                f.debug_struct("Remote").field("locator", locator).finish()
            }
        }
    }
}

/// What the grid can draw for an entry.
#[derive(Debug, Clone)]
pub enum Preview {
    /// Local bytes are still being decoded.
    Decoding,
    /// Decoded thumbnail of local bytes.
    Ready(PreviewImage),
    /// Stored image, displayed through its locator.
    Locator(String),
}

#[derive(Debug, Clone)]
pub struct ImageEntry {
    id: EntryId,
    source: ImageSource,
    preview: Preview,
}

impl ImageEntry {
    pub(super) fn local(
        id: EntryId,
        file_name: String,
        content_type: String,
        bytes: Arc<[u8]>,
    ) -> Self {
        Self {
            id,
            source: ImageSource::LocalPending {
                file_name,
                content_type,
                bytes,
            },
            preview: Preview::Decoding,
        }
    }

    pub(super) fn remote(id: EntryId, locator: String) -> Self {
        Self {
            id,
            preview: Preview::Locator(locator.clone()),
            source: ImageSource::Remote { locator },
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub(super) fn set_preview(&mut self, preview: Preview) {
        self.preview = preview;
    }

    /// Locator of a stored image, `None` for pending uploads.
    pub fn locator(&self) -> Option<&str> {
        match &self.source {
            ImageSource::Remote { locator } => Some(locator),
            ImageSource::LocalPending { .. } => None,
        }
    }

    /// Original file name of a pending upload, `None` for stored images.
    pub fn file_name(&self) -> Option<&str> {
        match &self.source {
            ImageSource::LocalPending { file_name, .. } => Some(file_name),
            ImageSource::Remote { .. } => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.source, ImageSource::Remote { .. })
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self.preview, Preview::Decoding)
    }

    /// Short human-readable label (file name or locator).
    pub fn label(&self) -> &str {
        match &self.source {
            ImageSource::LocalPending { file_name, .. } => file_name,
            ImageSource::Remote { locator } => locator,
        }
    }
}
