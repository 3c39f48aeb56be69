// SPDX-License-Identifier: MPL-2.0
//! Everything the product form sends to the server for its images.
//!
//! The hidden field value alone cannot carry new files. A [`FormSubmission`]
//! pairs it with the pending uploads and an order manifest so the server can
//! interleave stored images and new uploads in display order.

use super::collection::ImageCollection;
use super::entry::ImageSource;
use super::FormFlow;
use crate::error::Result;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::DynamicImage;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Knobs applied while building a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOptions {
    pub placeholder_prefix: String,
    /// Re-encode uploads as JPEG before sending them.
    pub normalize_uploads: bool,
    pub jpeg_quality: u8,
}

/// New file bytes sent alongside the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

/// One position of the final display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderSlot {
    /// A stored image kept by the form.
    Existing { locator: String },
    /// Index into [`FormSubmission::uploads`].
    Upload { index: usize },
}

#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub flow: FormFlow,
    /// Value written to the hidden images field.
    pub images_field: String,
    /// Pending uploads, in display order.
    pub uploads: Vec<PendingUpload>,
    /// Full display order; position 0 is the main image.
    pub order: Vec<OrderSlot>,
}

impl FormSubmission {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builds the submission for the current state of `collection`.
///
/// Entries whose preview is still decoding are included: their bytes are
/// known from ingestion. Uploads carry their original bytes; re-encoding is
/// left to [`finalize`] so this stays cheap enough for the update loop.
pub fn prepare(
    collection: &ImageCollection,
    flow: FormFlow,
    options: &SubmissionOptions,
) -> FormSubmission {
    let images_field = collection.serialize(flow, &options.placeholder_prefix);
    let mut uploads = Vec::new();
    let mut order = Vec::with_capacity(collection.len());

    for entry in collection.entries() {
        match entry.source() {
            ImageSource::Remote { locator } => order.push(OrderSlot::Existing {
                locator: locator.clone(),
            }),
            ImageSource::LocalPending {
                file_name,
                content_type,
                bytes,
            } => {
                let upload = PendingUpload {
                    file_name: file_name.clone(),
                    content_type: content_type.clone(),
                    bytes: Arc::clone(bytes),
                };
                order.push(OrderSlot::Upload {
                    index: uploads.len(),
                });
                uploads.push(upload);
            }
        }
    }

    FormSubmission {
        flow,
        images_field,
        uploads,
        order,
    }
}

/// Applies upload normalization from `options` on the blocking thread pool.
///
/// Returns `submission` unchanged when normalization is disabled or there is
/// nothing to upload.
pub async fn finalize(submission: FormSubmission, options: SubmissionOptions) -> FormSubmission {
    if !options.normalize_uploads || submission.uploads.is_empty() {
        return submission;
    }

    let fallback = submission.clone();
    let quality = options.jpeg_quality;
    match tokio::task::spawn_blocking(move || normalize(submission, quality)).await {
        Ok(submission) => submission,
        Err(err) => {
            tracing::warn!(error = %err, "normalization task failed, sending original uploads");
            fallback
        }
    }
}

/// Re-encodes every upload as JPEG at `quality`. CPU-bound.
pub fn normalize(mut submission: FormSubmission, quality: u8) -> FormSubmission {
    submission.uploads = submission
        .uploads
        .into_iter()
        .map(|upload| normalize_upload(upload, quality))
        .collect();
    submission
}

/// Re-encodes an upload as JPEG, keeping the original on failure.
fn normalize_upload(upload: PendingUpload, quality: u8) -> PendingUpload {
    match encode_jpeg(&upload.bytes, quality) {
        Ok(bytes) => PendingUpload {
            file_name: jpeg_file_name(&upload.file_name),
            content_type: JPEG_CONTENT_TYPE.to_string(),
            bytes: bytes.into(),
        },
        Err(err) => {
            tracing::warn!(file = %upload.file_name, error = %err, "sending upload without normalization");
            upload
        }
    }
}

/// Decodes `bytes` and encodes them as an RGB JPEG at `quality`.
///
/// Alpha is dropped, as JPEG cannot carry it.
///
/// # Errors
///
/// Returns [`crate::error::Error::Decode`] if the bytes cannot be decoded or
/// encoded.
pub fn encode_jpeg(bytes: &[u8], quality: u8) -> Result<Vec<u8>> {
    let img = image_rs::load_from_memory(bytes)?;
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)?;
    Ok(out)
}

fn jpeg_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    format!("{stem}.jpg")
}
