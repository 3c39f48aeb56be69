// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Serialization**: Placeholder locators written by the create flow
//! - **Previews**: Thumbnail decoding and grid layout
//! - **Uploads**: Re-encoding of newly selected files before submission

// ==========================================================================
// Serialization Defaults
// ==========================================================================

/// Prefix of the placeholder locator written for files that are not stored yet.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "/static/images/";

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default edge length (px) of decoded preview thumbnails.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 160;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u32 = 48;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

/// Default number of tiles per grid row.
pub const DEFAULT_GRID_COLUMNS: u16 = 4;

/// Minimum number of tiles per grid row.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of tiles per grid row.
pub const MAX_GRID_COLUMNS: u16 = 8;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// JPEG quality used when normalizing uploads (matches the server media store).
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Lowest accepted JPEG quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Highest accepted JPEG quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_default_is_within_bounds() {
        assert!((MIN_THUMBNAIL_SIZE..=MAX_THUMBNAIL_SIZE).contains(&DEFAULT_THUMBNAIL_SIZE));
    }

    #[test]
    fn grid_columns_default_is_within_bounds() {
        assert!((MIN_GRID_COLUMNS..=MAX_GRID_COLUMNS).contains(&DEFAULT_GRID_COLUMNS));
    }

    #[test]
    fn jpeg_quality_default_is_within_bounds() {
        assert!((MIN_JPEG_QUALITY..=MAX_JPEG_QUALITY).contains(&DEFAULT_JPEG_QUALITY));
    }

    #[test]
    fn placeholder_prefix_ends_with_separator() {
        assert!(DEFAULT_PLACEHOLDER_PREFIX.ends_with('/'));
    }
}
