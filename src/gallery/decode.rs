// SPDX-License-Identifier: MPL-2.0
//! Local decoding of newly selected files into preview thumbnails.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::sync::Arc;

/// Decoded, displayable thumbnail of a pending upload.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl PreviewImage {
    /// Creates a preview from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes encoded image bytes and downsizes them to fit `max_edge`.
///
/// Images already smaller than `max_edge` keep their size.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image or the
/// image has an empty dimension.
pub fn decode_preview(bytes: &[u8], max_edge: u32) -> Result<PreviewImage> {
    let img = image_rs::load_from_memory(bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    let img = if width > max_edge || height > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(PreviewImage::from_rgba(width, height, pixels))
}

/// Runs [`decode_preview`] on the blocking thread pool.
pub async fn decode_preview_async(bytes: Arc<[u8]>, max_edge: u32) -> Result<PreviewImage> {
    tokio::task::spawn_blocking(move || decode_preview(&bytes, max_edge))
        .await
        .map_err(|err| Error::Decode(format!("decode task failed: {err}")))?
}
