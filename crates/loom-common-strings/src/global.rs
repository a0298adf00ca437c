// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide default registry.
//!
//! Prefer passing a [`Registry`] explicitly; these helpers exist for code
//! that wants one shared dictionary for the whole process.

use once_cell::sync::Lazy;

use crate::accessor::Accessor;
use crate::entry::Entry;
use crate::registry::Registry;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry. Lives until the process exits.
pub fn global() -> &'static Registry {
	&GLOBAL
}

/// [`Registry::register`] on the global registry.
pub fn register<C, I, K, E>(code: C, entries: I)
where
	C: Into<String>,
	I: IntoIterator<Item = (K, E)>,
	K: Into<String>,
	E: Into<Entry>,
{
	GLOBAL.register(code, entries);
}

/// [`Registry::derive`] on the global registry.
pub fn derive<S, N, I, K, E>(source_code: S, new_code: N, overrides: I)
where
	S: AsRef<str>,
	N: Into<String>,
	I: IntoIterator<Item = (K, E)>,
	K: Into<String>,
	E: Into<Entry>,
{
	GLOBAL.derive(source_code, new_code, overrides);
}

/// [`Registry::accessor`] on the global registry.
pub fn accessor(code: impl Into<String>) -> Accessor {
	GLOBAL.accessor(code)
}
