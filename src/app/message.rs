// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::FormSubmission;
use crate::ui::gallery_editor;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Editor messages are forwarded
/// unchanged so the editor keeps a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(gallery_editor::Message),
    /// Result from the image picker; `None` when the dialog was cancelled.
    FilesPicked(Option<Vec<PathBuf>>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Submit button pressed.
    Submit,
    /// Submission finished upload normalization in the background.
    SubmissionPrepared(FormSubmission),
    DismissWarning,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PRODUCT_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Images field of an existing product. When present the editor starts in
    /// the edit flow.
    pub existing: Option<String>,
}
