// SPDX-License-Identifier: MPL-2.0
//! Product image gallery editor.
//!
//! This module follows the "state down, messages up" pattern: the host owns a
//! [`State`], forwards [`Message`]s to [`State::handle_message`], runs the
//! returned task and reacts to the returned [`Effect`]. Each instance is
//! independent, so a screen can host several editors.
//!
//! The grid is rebuilt from the collection on every update; see
//! [`view::GalleryModel`] for the pure part of rendering.

mod messages;
pub mod view;


pub use messages::{Effect, Message};
pub use view::{GalleryModel, TileModel, TilePreview, ViewContext};

use crate::config::{
    GalleryConfig, DEFAULT_GRID_COLUMNS, DEFAULT_JPEG_QUALITY, DEFAULT_PLACEHOLDER_PREFIX,
    DEFAULT_THUMBNAIL_SIZE, MAX_GRID_COLUMNS, MAX_JPEG_QUALITY, MAX_THUMBNAIL_SIZE,
    MIN_GRID_COLUMNS, MIN_JPEG_QUALITY, MIN_THUMBNAIL_SIZE,
};
use crate::gallery::{
    decode, submission, FormFlow, FormSubmission, ImageCollection, RawFile, SubmissionOptions,
};
use iced::{Element, Task};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Resolved editor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Edge length (px) of decoded previews.
    pub thumbnail_size: u32,
    /// Tiles per grid row.
    pub columns: u16,
    /// Directory stored locators are resolved against for previews.
    pub media_root: Option<PathBuf>,
    pub submission: SubmissionOptions,
}

impl Options {
    /// Resolves optional settings, clamping out-of-range values.
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            thumbnail_size: config
                .thumbnail_size
                .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
                .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE),
            columns: config
                .columns
                .unwrap_or(DEFAULT_GRID_COLUMNS)
                .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS),
            media_root: config.media_root.clone(),
            submission: SubmissionOptions {
                placeholder_prefix: config
                    .placeholder_prefix
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PLACEHOLDER_PREFIX.to_string()),
                normalize_uploads: config.normalize_uploads.unwrap_or(true),
                jpeg_quality: config
                    .jpeg_quality
                    .unwrap_or(DEFAULT_JPEG_QUALITY)
                    .clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY),
            },
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::from_config(&GalleryConfig::default())
    }
}

/// Local UI state for one gallery editor.
#[derive(Debug, Clone)]
pub struct State {
    collection: ImageCollection,
    flow: FormFlow,
    options: Options,
    /// Sequence number handed to the next file read.
    next_batch: u64,
    /// Sequence number of the next read batch allowed into the collection.
    next_batch_to_ingest: u64,
    /// Read batches that finished ahead of an earlier one.
    read_batches: BTreeMap<u64, Vec<RawFile>>,
}

impl State {
    fn with_collection(collection: ImageCollection, flow: FormFlow, options: Options) -> Self {
        Self {
            collection,
            flow,
            options,
            next_batch: 0,
            next_batch_to_ingest: 0,
            read_batches: BTreeMap::new(),
        }
    }

    /// Editor for a new product, starting empty.
    pub fn for_create(options: Options) -> Self {
        Self::with_collection(ImageCollection::new(), FormFlow::Create, options)
    }

    /// Editor for an existing product, populated from the images field value.
    pub fn for_edit(images_field: &str, options: Options) -> Self {
        Self::with_collection(
            ImageCollection::from_locators(images_field),
            FormFlow::Edit,
            options,
        )
    }

    pub fn collection(&self) -> &ImageCollection {
        &self.collection
    }

    pub fn flow(&self) -> FormFlow {
        self.flow
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Update the state and report an [`Effect`] plus follow-up work.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::AddImagesPressed => (Effect::OpenFilePicker, Task::none()),
            Message::FilesSelected(paths) => (Effect::None, self.read_files(paths)),
            Message::FilesRead { batch, files } => (Effect::None, self.accept_batch(batch, files)),
            Message::PreviewDecoded { id, result } => {
                let outcome = self.collection.complete_decode(id, result);
                tracing::trace!(%id, ?outcome, "preview decode handled");
                (Effect::None, Task::none())
            }
            Message::PromoteToMain(id) => {
                match self.collection.position_of(id) {
                    Some(position) => {
                        self.collection.promote_to_main(position);
                    }
                    None => tracing::debug!(%id, "promote for unknown entry"),
                }
                (Effect::None, Task::none())
            }
            Message::Remove(id) => {
                match self.collection.position_of(id) {
                    Some(position) => {
                        self.collection.remove(position);
                    }
                    None => tracing::debug!(%id, "remove for unknown entry"),
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// Adds files to the collection and starts one decode task per image.
    pub fn ingest(&mut self, files: Vec<RawFile>) -> Task<Message> {
        let max_edge = self.options.thumbnail_size;
        let requests = self.collection.ingest(files);

        Task::batch(requests.into_iter().map(|request| {
            let id = request.id;
            Task::perform(
                decode::decode_preview_async(request.bytes, max_edge),
                move |result| Message::PreviewDecoded { id, result },
            )
        }))
    }

    fn read_files(&mut self, paths: Vec<PathBuf>) -> Task<Message> {
        if paths.is_empty() {
            return Task::none();
        }

        let batch = self.next_batch;
        self.next_batch += 1;
        Task::perform(read_raw_files(paths), move |files| Message::FilesRead {
            batch,
            files,
        })
    }

    /// Ingests read batches strictly in selection order.
    fn accept_batch(&mut self, batch: u64, files: Vec<RawFile>) -> Task<Message> {
        self.read_batches.insert(batch, files);

        let mut tasks = Vec::new();
        while let Some(files) = self.read_batches.remove(&self.next_batch_to_ingest) {
            self.next_batch_to_ingest += 1;
            tasks.push(self.ingest(files));
        }
        Task::batch(tasks)
    }

    /// Current value of the hidden images field.
    pub fn images_field(&self) -> String {
        self.collection
            .serialize(self.flow, &self.options.submission.placeholder_prefix)
    }

    /// Builds what the form sends when it is submitted, with uploads not yet
    /// normalized; pass it to [`submission::finalize`] off the update loop.
    pub fn submit(&self) -> FormSubmission {
        submission::prepare(&self.collection, self.flow, &self.options.submission)
    }

    pub fn view<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        view::view(GalleryModel::from_collection(&self.collection), &self.options, ctx)
    }
}

/// Reads selected paths on the blocking pool, skipping unreadable files.
async fn read_raw_files(paths: Vec<PathBuf>) -> Vec<RawFile> {
    let read = tokio::task::spawn_blocking(move || {
        paths
            .iter()
            .filter_map(|path| match RawFile::from_path(path) {
                Ok(file) => Some(file),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
                    None
                }
            })
            .collect::<Vec<_>>()
    });

    read.await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "file read task failed");
        Vec::new()
    })
}
