// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.

use super::Message;
use crate::gallery::{submission, FormSubmission};
use crate::i18n::fluent::I18n;
use crate::ui::gallery_editor::{self, Effect};
use iced::Task;
use std::path::PathBuf;

/// Extensions offered by the image picker filter.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

/// Mutable slices of `App` the handlers work on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub editor: &'a mut gallery_editor::State,
    pub last_submission: &'a mut Option<FormSubmission>,
    pub warning: &'a mut Option<String>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Editor(message) => handle_editor_message(ctx, message),
        Message::FilesPicked(Some(paths)) => select_files(ctx, paths),
        Message::FilesPicked(None) => {
            tracing::debug!("image picker cancelled");
            Task::none()
        }
        Message::FileDropped(path) => select_files(ctx, vec![path]),
        Message::Submit => handle_submit(ctx),
        Message::SubmissionPrepared(submission) => {
            handle_submission_prepared(ctx, submission);
            Task::none()
        }
        Message::DismissWarning => {
            *ctx.warning = None;
            Task::none()
        }
    }
}

fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_editor::Message,
) -> Task<Message> {
    let (effect, task) = ctx.editor.handle_message(message);
    let task = task.map(Message::Editor);

    match effect {
        Effect::None => task,
        Effect::OpenFilePicker => Task::batch([task, handle_open_file_dialog(ctx.i18n)]),
    }
}

fn select_files(ctx: &mut UpdateContext<'_>, paths: Vec<PathBuf>) -> Task<Message> {
    tracing::debug!(count = paths.len(), "files selected");
    handle_editor_message(ctx, gallery_editor::Message::FilesSelected(paths))
}

fn handle_open_file_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("gallery-picker-title");
    let filter_name = i18n.tr("gallery-picker-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::FilesPicked,
    )
}

fn handle_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let prepared = ctx.editor.submit();
    let options = ctx.editor.options().submission.clone();
    tracing::debug!(uploads = prepared.uploads.len(), "preparing submission");

    Task::perform(
        submission::finalize(prepared, options),
        Message::SubmissionPrepared,
    )
}

fn handle_submission_prepared(ctx: &mut UpdateContext<'_>, submission: FormSubmission) {
    tracing::info!(
        flow = ?submission.flow,
        images_field = %submission.images_field,
        uploads = submission.uploads.len(),
        order = ?submission.order,
        "form submitted"
    );
    *ctx.last_submission = Some(submission);
}
