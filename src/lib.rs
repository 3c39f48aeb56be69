// SPDX-License-Identifier: MPL-2.0
//! `product_gallery` is an editor for the ordered image collection of a
//! product form, built with the Iced GUI framework.
//!
//! The first image of the collection is the product's main image. The
//! [`gallery`] module holds the collection model and form serialization,
//! independent of any UI; [`ui::gallery_editor`] renders it and drives the
//! asynchronous file reading and preview decoding.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
