// SPDX-License-Identifier: MPL-2.0
//! Product image collection: the state behind the gallery editor.
//!
//! This module has no UI dependencies beyond the preview image handle. It owns
//! the ordered entries, the positional main image, ingestion of new files,
//! and the form field value the server consumes.

pub mod collection;
pub mod decode;
pub mod entry;
pub mod locator;
pub mod raw_file;
pub mod submission;

pub use collection::{DecodeOutcome, DecodeRequest, ImageCollection};
pub use decode::PreviewImage;
pub use entry::{EntryId, ImageEntry, ImageSource, Preview};
pub use raw_file::RawFile;
pub use submission::{FormSubmission, OrderSlot, PendingUpload, SubmissionOptions};

/// Which product form hosts the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFlow {
    /// New product: every image is a pending upload.
    #[default]
    Create,
    /// Existing product: starts from its stored image locators.
    Edit,
}
