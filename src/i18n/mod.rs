// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The locale is
//! picked from the CLI, then the config file, then the system, falling back to
//! `en-US` when none of them has a bundle.

pub mod fluent;
