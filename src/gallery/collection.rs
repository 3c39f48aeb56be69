// SPDX-License-Identifier: MPL-2.0
//! Ordered image collection with a positional main image.
//!
//! The entry at index 0 is the main image. There is no stored flag: moving an
//! entry to the front is all it takes to make it main.
//!
//! New files reserve their slot when they are ingested, in call order, and the
//! slot is filled in place once its preview decode resolves. Display order is
//! therefore independent of decode completion order.

use super::decode::PreviewImage;
use super::entry::{EntryId, ImageEntry, Preview};
use super::locator;
use super::raw_file::RawFile;
use super::FormFlow;
use crate::error::Result;
use std::sync::Arc;

/// Work item produced by [`ImageCollection::ingest`] for each reserved slot.
#[derive(Debug, Clone)]
pub struct DecodeRequest {
    pub id: EntryId,
    pub bytes: Arc<[u8]>,
}

/// Outcome of [`ImageCollection::complete_decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The slot now shows its decoded preview.
    Filled,
    /// Decoding failed and the slot was dropped.
    Dropped,
    /// The entry was removed before its decode finished.
    Orphaned,
}

#[derive(Debug, Clone, Default)]
pub struct ImageCollection {
    entries: Vec<ImageEntry>,
    next_id: u64,
}

impl ImageCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection of stored images from a form field value.
    #[must_use]
    pub fn from_locators(value: &str) -> Self {
        let mut collection = Self::new();
        collection.load_existing(value);
        collection
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The main image, if any.
    pub fn main(&self) -> Option<&ImageEntry> {
        self.entries.first()
    }

    /// Current position of the entry with `id`.
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Number of entries whose preview is still being decoded.
    pub fn pending_decodes(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_decoding()).count()
    }

    /// Replaces the entries with stored images parsed from a form field value.
    ///
    /// Returns the number of entries created. An empty value yields an empty
    /// collection.
    pub fn load_existing(&mut self, value: &str) -> usize {
        let locators = locator::split(value);
        self.entries.clear();
        self.entries.reserve(locators.len());
        for locator in locators {
            let id = self.allocate_id();
            self.entries.push(ImageEntry::remote(id, locator));
        }
        tracing::debug!(count = self.entries.len(), "loaded existing images");
        self.entries.len()
    }

    /// Reserves a slot for every image file, in order, and returns the
    /// decode work for those slots. Non-image files are skipped.
    pub fn ingest<I>(&mut self, files: I) -> Vec<DecodeRequest>
    where
        I: IntoIterator<Item = RawFile>,
    {
        let mut requests = Vec::new();
        for file in files {
            if !file.is_image() {
                tracing::debug!(
                    file = %file.file_name,
                    content_type = %file.content_type,
                    "skipping non-image file"
                );
                continue;
            }

            let id = self.allocate_id();
            requests.push(DecodeRequest {
                id,
                bytes: Arc::clone(&file.bytes),
            });
            self.entries.push(ImageEntry::local(
                id,
                file.file_name,
                file.content_type,
                file.bytes,
            ));
        }
        requests
    }

    /// Fills or drops the slot reserved for `id` once its decode resolves.
    pub fn complete_decode(&mut self, id: EntryId, result: Result<PreviewImage>) -> DecodeOutcome {
        let Some(position) = self.position_of(id) else {
            tracing::debug!(%id, "decode finished for a removed entry");
            return DecodeOutcome::Orphaned;
        };

        match result {
            Ok(preview) => {
                self.entries[position].set_preview(Preview::Ready(preview));
                DecodeOutcome::Filled
            }
            Err(err) => {
                let entry = self.entries.remove(position);
                tracing::warn!(file = %entry.label(), error = %err, "dropping undecodable image");
                DecodeOutcome::Dropped
            }
        }
    }

    /// Moves the entry at `position` to the front, making it the main image.
    ///
    /// Other entries keep their relative order. Returns `false` if `position`
    /// is out of range.
    pub fn promote_to_main(&mut self, position: usize) -> bool {
        if position >= self.entries.len() {
            tracing::debug!(position, len = self.entries.len(), "ignoring promote");
            return false;
        }
        self.entries[..=position].rotate_right(1);
        true
    }

    /// Removes the entry at `position`. The next entry becomes main when the
    /// main image is removed.
    pub fn remove(&mut self, position: usize) -> Option<ImageEntry> {
        if position >= self.entries.len() {
            tracing::debug!(position, len = self.entries.len(), "ignoring remove");
            return None;
        }
        Some(self.entries.remove(position))
    }

    /// Locators of stored images, in display order.
    pub fn remote_locators(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(ImageEntry::locator)
    }

    /// Produces the form field value for `flow`.
    ///
    /// - [`FormFlow::Edit`]: stored locators only, in display order. Pending
    ///   uploads travel separately (see [`super::submission`]).
    /// - [`FormFlow::Create`]: every entry, pending uploads mapped to
    ///   `placeholder_prefix + file_name` (see [`locator::placeholder`]).
    pub fn serialize(&self, flow: FormFlow, placeholder_prefix: &str) -> String {
        match flow {
            FormFlow::Edit => locator::join(self.remote_locators()),
            FormFlow::Create => locator::join(self.entries.iter().map(|entry| {
                match entry.file_name() {
                    Some(file_name) => locator::placeholder(placeholder_prefix, file_name),
                    None => entry.label().to_string(),
                }
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const PREFIX: &str = "/static/images/";

    fn image_file(name: &str) -> RawFile {
        RawFile::new(name, "image/png", name.as_bytes().to_vec())
    }

    fn labels(collection: &ImageCollection) -> Vec<&str> {
        collection.entries().iter().map(ImageEntry::label).collect()
    }

    fn preview() -> PreviewImage {
        PreviewImage::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn new_collection_is_empty() {
        let collection = ImageCollection::new();
        assert!(collection.is_empty());
        assert!(collection.main().is_none());
    }

    #[test]
    fn load_existing_empty_value_yields_no_entries() {
        let collection = ImageCollection::from_locators("");
        assert!(collection.is_empty());
    }

    #[test]
    fn load_existing_creates_remote_entries_in_order() {
        let collection = ImageCollection::from_locators("a,b,c");
        assert_eq!(labels(&collection), vec!["a", "b", "c"]);
        assert!(collection.entries().iter().all(ImageEntry::is_remote));
        assert_eq!(collection.main().map(ImageEntry::label), Some("a"));
    }

    #[test]
    fn load_existing_replaces_previous_entries() {
        let mut collection = ImageCollection::from_locators("a,b");
        let count = collection.load_existing("c");
        assert_eq!(count, 1);
        assert_eq!(labels(&collection), vec!["c"]);
    }

    #[test]
    fn ingest_reserves_one_slot_per_image_file() {
        let mut collection = ImageCollection::new();
        let requests = collection.ingest(vec![
            image_file("a.png"),
            RawFile::new("notes.txt", "text/plain", b"hello".to_vec()),
            image_file("b.png"),
        ]);

        assert_eq!(requests.len(), 2);
        assert_eq!(labels(&collection), vec!["a.png", "b.png"]);
        assert_eq!(collection.pending_decodes(), 2);
    }

    #[test]
    fn ingest_only_non_images_adds_nothing() {
        let mut collection = ImageCollection::new();
        let requests = collection.ingest(vec![RawFile::new(
            "doc.pdf",
            "application/pdf",
            b"%PDF".to_vec(),
        )]);
        assert!(requests.is_empty());
        assert!(collection.is_empty());
    }

    #[test]
    fn identities_are_unique_and_never_reused() {
        let mut collection = ImageCollection::from_locators("a,b");
        let first_ids: Vec<_> = collection.entries().iter().map(ImageEntry::id).collect();
        collection.remove(0);
        collection.ingest(vec![image_file("c.png")]);

        let mut ids: Vec<_> = collection.entries().iter().map(ImageEntry::id).collect();
        assert!(!ids.contains(&first_ids[0]));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), collection.len());
    }

    #[test]
    fn out_of_order_decodes_keep_ingestion_order() {
        let mut collection = ImageCollection::new();
        let requests = collection.ingest(vec![image_file("a.png"), image_file("b.png")]);

        assert_eq!(
            collection.complete_decode(requests[1].id, Ok(preview())),
            DecodeOutcome::Filled
        );
        assert_eq!(
            collection.complete_decode(requests[0].id, Ok(preview())),
            DecodeOutcome::Filled
        );

        assert_eq!(labels(&collection), vec!["a.png", "b.png"]);
        assert_eq!(collection.pending_decodes(), 0);
    }

    #[test]
    fn failed_decode_drops_the_slot() {
        let mut collection = ImageCollection::new();
        let requests = collection.ingest(vec![image_file("a.png"), image_file("b.png")]);

        let outcome =
            collection.complete_decode(requests[0].id, Err(Error::Decode("corrupt".into())));

        assert_eq!(outcome, DecodeOutcome::Dropped);
        assert_eq!(labels(&collection), vec!["b.png"]);
    }

    #[test]
    fn decode_for_removed_entry_is_orphaned() {
        let mut collection = ImageCollection::new();
        let requests = collection.ingest(vec![image_file("a.png")]);
        collection.remove(0);

        let outcome = collection.complete_decode(requests[0].id, Ok(preview()));

        assert_eq!(outcome, DecodeOutcome::Orphaned);
        assert!(collection.is_empty());
    }

    #[test]
    fn promote_moves_entry_to_front_preserving_others() {
        let mut collection = ImageCollection::from_locators("a,b,c,d");
        assert!(collection.promote_to_main(2));
        assert_eq!(labels(&collection), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn promote_main_is_a_no_op() {
        let mut collection = ImageCollection::from_locators("a,b");
        assert!(collection.promote_to_main(0));
        assert_eq!(labels(&collection), vec!["a", "b"]);
    }

    #[test]
    fn promote_out_of_range_is_ignored() {
        let mut collection = ImageCollection::from_locators("a,b");
        assert!(!collection.promote_to_main(2));
        assert_eq!(labels(&collection), vec!["a", "b"]);
    }

    #[test]
    fn remove_drops_exactly_one_entry() {
        let mut collection = ImageCollection::from_locators("a,b,c");
        let removed = collection.remove(1).expect("entry should exist");
        assert_eq!(removed.label(), "b");
        assert_eq!(labels(&collection), vec!["a", "c"]);
    }

    #[test]
    fn removing_main_promotes_next_entry() {
        let mut collection = ImageCollection::from_locators("a,b,c");
        collection.remove(0);
        assert_eq!(collection.main().map(ImageEntry::label), Some("b"));
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut collection = ImageCollection::from_locators("a");
        assert!(collection.remove(5).is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn edit_serialization_round_trips_remote_order() {
        let collection = ImageCollection::from_locators("x,y,z");
        let value = collection.serialize(FormFlow::Edit, PREFIX);
        let reloaded = ImageCollection::from_locators(&value);
        assert_eq!(labels(&reloaded), vec!["x", "y", "z"]);
    }

    #[test]
    fn edit_serialization_follows_promotion() {
        let mut collection = ImageCollection::from_locators("img1.jpg,img2.jpg");
        collection.promote_to_main(1);
        assert_eq!(collection.serialize(FormFlow::Edit, PREFIX), "img2.jpg,img1.jpg");
    }

    #[test]
    fn edit_serialization_excludes_pending_uploads() {
        let mut collection = ImageCollection::from_locators("a.jpg");
        collection.ingest(vec![image_file("new.png")]);
        collection.promote_to_main(1);
        assert_eq!(collection.serialize(FormFlow::Edit, PREFIX), "a.jpg");
    }

    #[test]
    fn create_serialization_uses_placeholders_in_ingestion_order() {
        let mut collection = ImageCollection::new();
        collection.ingest(vec![image_file("a.png"), image_file("b.png")]);
        assert_eq!(
            collection.serialize(FormFlow::Create, PREFIX),
            "/static/images/a.png,/static/images/b.png"
        );
    }

    #[test]
    fn empty_collection_serializes_to_empty_value() {
        let collection = ImageCollection::new();
        assert_eq!(collection.serialize(FormFlow::Edit, PREFIX), "");
        assert_eq!(collection.serialize(FormFlow::Create, PREFIX), "");
    }

    #[test]
    fn create_serialization_keeps_one_locator_per_file_with_comma_in_name() {
        let mut collection = ImageCollection::new();
        collection.ingest(vec![image_file("front, left.png"), image_file("b.png")]);

        let field = collection.serialize(FormFlow::Create, PREFIX);

        assert_eq!(locator::split(&field).len(), 2);
        assert_eq!(ImageCollection::from_locators(&field).len(), collection.len());
    }
}
