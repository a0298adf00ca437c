// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language-keyed string registry for Loom.
//!
//! A [`Registry`] maps language codes to collections of string entries. An
//! entry is either a literal value or a function of the lookup props, which
//! lets a single key render differently per call.
//!
//! - [`Registry::register`] stores a collection, replacing any previous one
//!   for that code.
//! - [`Registry::derive`] copies a collection under a new code and layers
//!   overrides on top.
//! - [`Registry::accessor`] returns an [`Accessor`] bound to one code. It
//!   resolves either a plain key or a props object naming the key in its
//!   `id` (or `string`) field, the form used by view components.
//!
//! There is no fallback between languages: a missing key resolves to
//! `None`, and an unregistered language is a [`StringsError`].
//!
//! # Example
//!
//! ```
//! use loom_common_strings::{Entry, Props, Registry};
//!
//! let registry = Registry::new();
//! registry.register("en", [
//!     ("HELLO", Entry::from("Hello")),
//!     ("GREET", Entry::computed(|p| format!("Hi {}", p.get_str("name").unwrap_or("")).into())),
//! ]);
//! registry.derive("en", "en-AU", [("HELLO", "G'day")]);
//!
//! let strings = registry.accessor("en-AU");
//! assert_eq!(strings.get("HELLO").unwrap().unwrap(), "G'day");
//!
//! // Component form
//! let props = Props::new().insert("id", "GREET").insert("name", "Ann");
//! assert_eq!(strings.render(&props).unwrap().unwrap(), "Hi Ann");
//! ```

mod accessor;
mod catalog;
mod entry;
mod error;
mod global;
mod props;
mod registry;

pub use accessor::{Accessor, Lookup, ID_FIELD, STRING_FIELD};
pub use catalog::{Catalog, LanguageSpec, CATALOG_ENV};
pub use entry::{Collection, ComputeFn, Entry};
pub use error::{StringsError, StringsResult};
pub use global::{accessor, derive, global, register};
pub use props::Props;
pub use registry::Registry;
