// SPDX-License-Identifier: MPL-2.0
//! Gallery editor message/effect types re-exported by the facade.

use crate::error::Error;
use crate::gallery::{EntryId, PreviewImage, RawFile};
use std::path::PathBuf;

/// Messages emitted by the editor widgets and its background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Add images" button pressed.
    AddImagesPressed,
    /// Files chosen in the picker or dropped on the window.
    FilesSelected(Vec<PathBuf>),
    /// A batch of selected files finished reading.
    FilesRead { batch: u64, files: Vec<RawFile> },
    /// Background preview decode finished.
    PreviewDecoded {
        id: EntryId,
        result: Result<PreviewImage, Error>,
    },
    /// Make this entry the main image.
    PromoteToMain(EntryId),
    /// Drop this entry from the collection.
    Remove(EntryId),
}

/// Side effects the host should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the native picker; results come back as [`Message::FilesSelected`].
    OpenFilePicker,
}
