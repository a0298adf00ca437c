// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the string registry.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for string registry operations.
pub type StringsResult<T> = Result<T, StringsError>;

/// Errors raised by accessors and catalog loading.
///
/// A key missing from a registered language is not an error; accessors
/// return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum StringsError {
	/// An accessor was used for a code that has no registered collection.
	#[error("language '{0}' is not registered")]
	UnregisteredLanguage(String),

	/// I/O error reading a catalog file
	#[error("I/O error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// TOML parsing error in a catalog file
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// TOML parsing error in inline catalog text
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Catalog validation error
	#[error("Validation error: {0}")]
	Validation(String),
}

impl StringsError {
	/// Create a validation error
	pub fn validation(msg: impl Into<String>) -> Self {
		Self::Validation(msg.into())
	}

	/// Returns true if this error reports an unregistered language.
	pub fn is_unregistered(&self) -> bool {
		matches!(self, Self::UnregisteredLanguage(_))
	}
}
