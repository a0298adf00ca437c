// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Parameter objects handed to computed entries.

use serde_json::{Map, Value};

/// The parameter object an accessor passes to a computed entry.
///
/// In the component form of a lookup the props also carry the key, in an
/// `id` or `string` field.
///
/// # Example
///
/// ```
/// use loom_common_strings::Props;
///
/// let props = Props::new()
///     .insert("id", "GREET")
///     .insert("name", "Ann")
///     .insert("count", 3);
///
/// assert_eq!(props.get_str("name"), Some("Ann"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
	inner: Map<String, Value>,
}

impl Props {
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Adds a field, replacing any previous value under the same name.
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// Layers `other` on top of these props. Fields in `other` win.
	pub fn merge(mut self, other: Props) -> Self {
		self.inner.extend(other.inner);
		self
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	/// Gets a field only if it holds a JSON string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.inner.get(key).and_then(Value::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.inner)
	}
}

impl From<Props> for Value {
	fn from(props: Props) -> Self {
		props.into_value()
	}
}

/// Non-object values produce empty props.
impl From<Value> for Props {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(inner) => Self { inner },
			_ => Self::new(),
		}
	}
}

impl From<Map<String, Value>> for Props {
	fn from(inner: Map<String, Value>) -> Self {
		Self { inner }
	}
}

impl<K, V> FromIterator<(K, V)> for Props
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			inner: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}
