// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! String entries: literal values or functions of the lookup props.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::props::Props;

/// Signature of a computed entry.
pub type ComputeFn = dyn Fn(&Props) -> Value + Send + Sync;

/// All entries registered under one language code.
pub type Collection = HashMap<String, Entry>;

/// A value stored under a key within a collection.
///
/// Cloning is cheap: computed entries share their function.
#[derive(Clone)]
pub enum Entry {
	/// A fixed value, returned as is.
	Literal(Value),
	/// A function invoked with the lookup props on every resolution.
	Computed(Arc<ComputeFn>),
}

impl Entry {
	pub fn literal(value: impl Into<Value>) -> Self {
		Self::Literal(value.into())
	}

	/// Wraps a function producing the value from the lookup props.
	///
	/// ```
	/// use loom_common_strings::{Entry, Props};
	///
	/// let greet = Entry::computed(|props| {
	///     format!("Hi {}", props.get_str("name").unwrap_or_default()).into()
	/// });
	/// assert_eq!(greet.resolve(&Props::new().insert("name", "Ann")), "Hi Ann");
	/// ```
	pub fn computed<F>(f: F) -> Self
	where
		F: Fn(&Props) -> Value + Send + Sync + 'static,
	{
		Self::Computed(Arc::new(f))
	}

	pub fn is_computed(&self) -> bool {
		matches!(self, Self::Computed(_))
	}

	/// Produces the entry's value for the given props.
	pub fn resolve(&self, props: &Props) -> Value {
		match self {
			Self::Literal(value) => value.clone(),
			Self::Computed(f) => f(props),
		}
	}
}

impl fmt::Debug for Entry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
			Self::Computed(_) => f.write_str("Computed(<fn>)"),
		}
	}
}

impl From<Value> for Entry {
	fn from(value: Value) -> Self {
		Self::Literal(value)
	}
}

impl From<&str> for Entry {
	fn from(value: &str) -> Self {
		Self::Literal(Value::String(value.to_string()))
	}
}

impl From<String> for Entry {
	fn from(value: String) -> Self {
		Self::Literal(Value::String(value))
	}
}
