// SPDX-License-Identifier: MPL-2.0
//! Preview grid for the gallery editor.
//!
//! [`GalleryModel::from_collection`] decides what each tile shows and which
//! actions it offers; [`view`] only lays the model out. Actions carry the
//! entry's [`EntryId`], so a press always targets the entry that was drawn,
//! wherever it sits when the message is handled.

use super::{Message, Options};
use crate::gallery::{EntryId, ImageCollection, ImageEntry, Preview};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, Column, Row, Space, Text};
use iced::{Alignment, Element, Length};
use std::path::{Component, Path, PathBuf};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// What a tile draws in its preview area.
#[derive(Debug, Clone)]
pub enum TilePreview {
    Decoding,
    Image(image::Handle),
    Locator(String),
}

#[derive(Debug, Clone)]
pub struct TileModel {
    pub id: EntryId,
    pub position: usize,
    pub label: String,
    pub is_main: bool,
    /// Whether the "set as main" action is offered.
    pub can_promote: bool,
    pub preview: TilePreview,
}

impl TileModel {
    fn from_entry(position: usize, entry: &ImageEntry) -> Self {
        let preview = match entry.preview() {
            Preview::Decoding => TilePreview::Decoding,
            Preview::Ready(image) => TilePreview::Image(image.handle.clone()),
            Preview::Locator(locator) => TilePreview::Locator(locator.clone()),
        };

        Self {
            id: entry.id(),
            position,
            label: entry.label().to_string(),
            is_main: position == 0,
            can_promote: position != 0,
            preview,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GalleryModel {
    pub tiles: Vec<TileModel>,
}

impl GalleryModel {
    pub fn from_collection(collection: &ImageCollection) -> Self {
        Self {
            tiles: collection
                .entries()
                .iter()
                .enumerate()
                .map(|(position, entry)| TileModel::from_entry(position, entry))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

pub fn view<'a>(model: GalleryModel, options: &Options, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .push(Text::new(ctx.i18n.tr_count("gallery-count", "count", model.len())).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("gallery-add-images")).size(typography::BODY))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::primary)
                .on_press(Message::AddImagesPressed),
        )
        .align_y(Alignment::Center);

    let body: Element<'a, Message> = if model.is_empty() {
        container(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .padding(spacing::LG)
            .center_x(Length::Fill)
            .into()
    } else {
        grid(model, options, ctx)
    };

    container(
        Column::new()
            .push(header)
            .push(body)
            .spacing(spacing::MD)
            .padding(spacing::MD),
    )
    .style(styles::container::panel)
    .width(Length::Fill)
    .into()
}

fn grid<'a>(model: GalleryModel, options: &Options, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = usize::from(options.columns.max(1));
    let mut rows = Column::new().spacing(spacing::SM);
    let mut tiles = model.tiles.into_iter().peekable();

    while tiles.peek().is_some() {
        let row = tiles
            .by_ref()
            .take(columns)
            .fold(Row::new().spacing(spacing::SM), |row, tile| {
                row.push(tile_view(tile, options, ctx))
            });
        rows = rows.push(row);
    }

    rows.into()
}

fn tile_view<'a>(tile: TileModel, options: &Options, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let edge = options.thumbnail_size as f32;

    let preview: Element<'a, Message> = match tile.preview {
        TilePreview::Image(handle) => image(handle).width(edge).height(edge).into(),
        TilePreview::Locator(locator) => match resolve_locator(options.media_root.as_deref(), &locator) {
            Some(path) => image(image::Handle::from_path(path)).width(edge).height(edge).into(),
            None => placeholder(Text::new(locator).size(typography::CAPTION), edge),
        },
        TilePreview::Decoding => placeholder(
            Text::new(ctx.i18n.tr("gallery-decoding")).size(typography::CAPTION),
            edge,
        ),
    };

    let badge: Element<'a, Message> = if tile.is_main {
        container(Text::new(ctx.i18n.tr("gallery-main-badge")).size(typography::CAPTION))
            .padding([0.0, spacing::XS])
            .center_y(sizing::BADGE_HEIGHT)
            .style(styles::container::main_badge)
            .into()
    } else {
        Space::new().height(sizing::BADGE_HEIGHT).into()
    };

    let mut actions = Row::new().spacing(spacing::XXS);
    if tile.can_promote {
        actions = actions.push(
            button(Text::new(ctx.i18n.tr("gallery-set-main")).size(typography::CAPTION))
                .style(styles::button::tile_action)
                .on_press(Message::PromoteToMain(tile.id)),
        );
    }
    actions = actions.push(
        button(Text::new(ctx.i18n.tr("gallery-remove")).size(typography::CAPTION))
            .style(styles::button::tile_remove)
            .on_press(Message::Remove(tile.id)),
    );

    container(
        Column::new()
            .push(badge)
            .push(preview)
            .push(Text::new(tile.label).size(typography::CAPTION))
            .push(actions)
            .spacing(spacing::XXS)
            .align_x(Alignment::Center),
    )
    .padding(spacing::XS)
    .style(styles::container::tile(tile.is_main))
    .into()
}

fn placeholder<'a>(content: Text<'a>, edge: f32) -> Element<'a, Message> {
    container(content)
        .center(Length::Fixed(edge))
        .style(styles::container::preview_placeholder)
        .into()
}

/// Maps a stored locator onto `media_root`, if one is configured.
///
/// URLs with a scheme are not resolvable locally. Locators must stay inside
/// `media_root`: `..` segments and absolute prefixes resolve to nothing.
pub fn resolve_locator(media_root: Option<&Path>, locator: &str) -> Option<PathBuf> {
    let root = media_root?;
    if locator.contains("://") {
        return None;
    }

    let relative = Path::new(locator.trim_start_matches('/'));
    let contained = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if !contained {
        return None;
    }
    Some(root.join(relative))
}
