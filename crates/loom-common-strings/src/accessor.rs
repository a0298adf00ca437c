// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolvers bound to a single language code.

use std::borrow::Cow;

use serde_json::{Number, Value};
use tracing::{trace, warn};

use crate::error::{StringsError, StringsResult};
use crate::props::Props;
use crate::registry::Registry;

/// Props field naming the key in the component form.
pub const ID_FIELD: &str = "id";

/// Props field consulted when [`ID_FIELD`] does not name a key.
pub const STRING_FIELD: &str = "string";

/// What an accessor is asked to resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
	/// Direct form: an explicit key plus props for computed entries.
	Key { key: String, props: Props },
	/// Component form: the props carry the key in an `id` field, or a
	/// `string` field when `id` names nothing, and are passed whole to
	/// computed entries.
	Ref(Props),
}

impl Lookup {
	pub fn key(key: impl Into<String>) -> Self {
		Self::Key {
			key: key.into(),
			props: Props::new(),
		}
	}

	pub fn key_with(key: impl Into<String>, props: Props) -> Self {
		Self::Key {
			key: key.into(),
			props,
		}
	}

	/// The key this lookup names, if any.
	///
	/// In the component form a truthy number or boolean in `id` or `string`
	/// names the key by its text (`42` names `"42"`). Empty strings, `0`,
	/// `false`, `null`, arrays and objects name nothing.
	pub fn key_name(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Key { key, .. } => Some(Cow::Borrowed(key.as_str())),
			Self::Ref(props) => field_key(props, ID_FIELD).or_else(|| field_key(props, STRING_FIELD)),
		}
	}

	pub fn props(&self) -> &Props {
		match self {
			Self::Key { props, .. } | Self::Ref(props) => props,
		}
	}
}

fn field_key<'a>(props: &'a Props, field: &str) -> Option<Cow<'a, str>> {
	match props.get(field)? {
		Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
		Value::Bool(true) => Some(Cow::Borrowed("true")),
		Value::Number(n) => number_key(n).map(Cow::Owned),
		_ => None,
	}
}

// Integral floats print without a fraction, so `2.0` names `"2"`.
fn number_key(n: &Number) -> Option<String> {
	if let Some(i) = n.as_i64() {
		return (i != 0).then(|| i.to_string());
	}
	if let Some(u) = n.as_u64() {
		return Some(u.to_string());
	}
	let f = n.as_f64()?;
	if f == 0.0 {
		None
	} else if f.fract() == 0.0 && f.abs() < 1e15 {
		Some(format!("{}", f as i64))
	} else {
		Some(f.to_string())
	}
}

impl From<&str> for Lookup {
	fn from(key: &str) -> Self {
		Self::key(key)
	}
}

impl From<String> for Lookup {
	fn from(key: String) -> Self {
		Self::key(key)
	}
}

impl From<Props> for Lookup {
	fn from(props: Props) -> Self {
		Self::Ref(props)
	}
}

/// A resolver for the strings of one language.
///
/// Accessors hold a handle to their registry and look the language up on
/// every call, so they may be created before the language is registered.
///
/// # Example
///
/// ```
/// use loom_common_strings::{Entry, Props, Registry};
///
/// let registry = Registry::new();
/// let strings = registry.accessor("en");
///
/// registry.register("en", [
///     ("HELLO", Entry::from("Hello")),
///     ("GREET", Entry::computed(|p| format!("Hi {}", p.get_str("name").unwrap_or("")).into())),
/// ]);
///
/// assert_eq!(strings.get("HELLO").unwrap().unwrap(), "Hello");
///
/// let props = Props::new().insert("id", "GREET").insert("name", "Ann");
/// assert_eq!(strings.render(&props).unwrap().unwrap(), "Hi Ann");
///
/// assert!(strings.get("NOPE").unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Accessor {
	registry: Registry,
	code: String,
}

impl Accessor {
	pub(crate) fn new(registry: Registry, code: String) -> Self {
		Self { registry, code }
	}

	pub fn code(&self) -> &str {
		&self.code
	}

	/// Resolves a lookup against the current collection for this code.
	///
	/// Computed entries are invoked with the lookup's props. Returns
	/// `Ok(None)` when the key is absent and
	/// [`StringsError::UnregisteredLanguage`] when the code has no collection.
	pub fn resolve(&self, lookup: impl Into<Lookup>) -> StringsResult<Option<Value>> {
		let lookup = lookup.into();

		let Some(key) = lookup.key_name() else {
			if !self.registry.contains(&self.code) {
				return Err(self.unregistered());
			}
			trace!(code = %self.code, "lookup names no key");
			return Ok(None);
		};

		match self.registry.entry(&self.code, &key) {
			None => Err(self.unregistered()),
			Some(None) => {
				trace!(code = %self.code, key = %key, "string key not found");
				Ok(None)
			}
			Some(Some(entry)) => Ok(Some(entry.resolve(lookup.props()))),
		}
	}

	/// Direct form with empty props.
	pub fn get(&self, key: &str) -> StringsResult<Option<Value>> {
		self.resolve(Lookup::key(key))
	}

	/// Direct form with explicit props.
	pub fn get_with(&self, key: &str, props: &Props) -> StringsResult<Option<Value>> {
		self.resolve(Lookup::key_with(key, props.clone()))
	}

	/// Component form: the key comes from the props' `id` or `string` field.
	pub fn render(&self, props: &Props) -> StringsResult<Option<Value>> {
		self.resolve(Lookup::Ref(props.clone()))
	}

	/// Like [`Accessor::get`], keeping only string results.
	pub fn get_str(&self, key: &str) -> StringsResult<Option<String>> {
		Ok(self.get(key)?.and_then(|value| match value {
			Value::String(s) => Some(s),
			_ => None,
		}))
	}

	fn unregistered(&self) -> StringsError {
		warn!(code = %self.code, "accessor used for unregistered language");
		StringsError::UnregisteredLanguage(self.code.clone())
	}
}
