// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! TOML string catalogs.
//!
//! A catalog lists languages in the order they are applied to a registry.
//! A language with `extends` is derived from an earlier one, otherwise it is
//! registered from scratch:
//!
//! ```toml
//! [[language]]
//! code = "en"
//! [language.strings]
//! HELLO = "Hello"
//! COLOR = "Color"
//!
//! [[language]]
//! code = "en-GB"
//! extends = "en"
//! [language.strings]
//! COLOR = "Colour"
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{StringsError, StringsResult};
use crate::registry::Registry;

/// Environment variable naming a catalog file for [`Catalog::from_env`].
pub const CATALOG_ENV: &str = "LOOM_STRINGS_CATALOG";

/// A parsed catalog file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
	#[serde(default, rename = "language")]
	pub languages: Vec<LanguageSpec>,
}

/// One `[[language]]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageSpec {
	pub code: String,
	/// Code this language is derived from.
	#[serde(default)]
	pub extends: Option<String>,
	#[serde(default)]
	pub strings: BTreeMap<String, toml::Value>,
}

impl LanguageSpec {
	/// The strings as literal JSON values. Datetimes become their TOML text.
	pub fn entries(&self) -> impl Iterator<Item = (String, Value)> + '_ {
		self.strings
			.iter()
			.map(|(key, value)| (key.clone(), toml_to_json(value)))
	}
}

fn toml_to_json(value: &toml::Value) -> Value {
	match value {
		toml::Value::String(s) => Value::String(s.clone()),
		toml::Value::Integer(i) => Value::from(*i),
		// Non-finite floats have no JSON form and become null.
		toml::Value::Float(f) => Value::from(*f),
		toml::Value::Boolean(b) => Value::Bool(*b),
		toml::Value::Datetime(dt) => Value::String(dt.to_string()),
		toml::Value::Array(items) => Value::Array(items.iter().map(toml_to_json).collect()),
		toml::Value::Table(table) => Value::Object(
			table
				.iter()
				.map(|(k, v)| (k.clone(), toml_to_json(v)))
				.collect(),
		),
	}
}

impl Catalog {
	pub fn from_toml_str(text: &str) -> StringsResult<Self> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: impl AsRef<Path>) -> StringsResult<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|source| StringsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = toml::from_str(&text).map_err(|source| StringsError::TomlParse {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), "loaded string catalog");
		Ok(catalog)
	}

	/// Loads the catalog named by `LOOM_STRINGS_CATALOG`.
	///
	/// Returns `Ok(None)` when the variable is unset or empty.
	pub fn from_env() -> StringsResult<Option<Self>> {
		Self::load_optional(std::env::var(CATALOG_ENV).ok())
	}

	fn load_optional(path: Option<String>) -> StringsResult<Option<Self>> {
		match path.filter(|p| !p.trim().is_empty()) {
			Some(path) => Self::load(path).map(Some),
			None => Ok(None),
		}
	}

	/// Checks the catalog against the codes already present in `registry`.
	///
	/// Codes must be non-empty, and `extends` must name a code defined
	/// earlier in the catalog or already registered.
	pub fn validate(&self, registry: &Registry) -> StringsResult<()> {
		let mut known: HashSet<String> = registry.codes().into_iter().collect();

		for (index, language) in self.languages.iter().enumerate() {
			if language.code.trim().is_empty() {
				return Err(StringsError::validation(format!(
					"language #{} has an empty code",
					index + 1
				)));
			}
			if let Some(parent) = &language.extends {
				if !known.contains(parent) {
					return Err(StringsError::validation(format!(
						"language '{}' extends unknown language '{}'",
						language.code, parent
					)));
				}
			}
			known.insert(language.code.clone());
		}

		Ok(())
	}

	/// Validates, then registers or derives every language in order.
	///
	/// Nothing is applied if validation fails.
	pub fn apply(&self, registry: &Registry) -> StringsResult<()> {
		self.validate(registry)?;

		for language in &self.languages {
			let strings = language.entries();
			match &language.extends {
				Some(parent) => registry.derive(parent, language.code.clone(), strings),
				None => registry.register(language.code.clone(), strings),
			}
		}

		debug!(languages = self.languages.len(), "applied string catalog");
		Ok(())
	}
}
