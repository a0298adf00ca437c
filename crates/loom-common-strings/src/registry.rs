// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The language-keyed store of string collections.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::accessor::Accessor;
use crate::entry::{Collection, Entry};

/// A store mapping language codes to string collections.
///
/// Clones share the same store, so an [`Accessor`] handed out earlier sees
/// every later `register` or `derive`.
///
/// # Example
///
/// ```
/// use loom_common_strings::Registry;
///
/// let registry = Registry::new();
/// registry.register("en", [("HELLO", "Hello"), ("COLOR", "Color")]);
/// registry.derive("en", "en-GB", [("COLOR", "Colour")]);
///
/// let strings = registry.accessor("en-GB");
/// assert_eq!(strings.get("HELLO").unwrap().unwrap(), "Hello");
/// assert_eq!(strings.get("COLOR").unwrap().unwrap(), "Colour");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
	languages: Arc<RwLock<HashMap<String, Collection>>>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `entries` as the collection for `code`.
	///
	/// Any collection previously registered under `code` is replaced
	/// entirely. Duplicate keys in `entries` resolve to the last one.
	pub fn register<C, I, K, E>(&self, code: C, entries: I)
	where
		C: Into<String>,
		I: IntoIterator<Item = (K, E)>,
		K: Into<String>,
		E: Into<Entry>,
	{
		let code = code.into();
		let collection = collect_entries(entries);
		debug!(code = %code, entries = collection.len(), "registering string collection");
		self.write().insert(code, collection);
	}

	/// Creates or replaces `new_code` as a copy of `source_code` with
	/// `overrides` layered on top.
	///
	/// An unregistered `source_code` is treated as empty. The source
	/// collection is left untouched.
	pub fn derive<S, N, I, K, E>(&self, source_code: S, new_code: N, overrides: I)
	where
		S: AsRef<str>,
		N: Into<String>,
		I: IntoIterator<Item = (K, E)>,
		K: Into<String>,
		E: Into<Entry>,
	{
		let source_code = source_code.as_ref();
		let new_code = new_code.into();
		let overrides = collect_entries(overrides);

		let mut languages = self.write();
		let mut collection = match languages.get(source_code) {
			Some(source) => source.clone(),
			None => {
				debug!(source = %source_code, "deriving from unregistered language");
				Collection::new()
			}
		};
		let overridden = overrides.len();
		collection.extend(overrides);

		debug!(
			source = %source_code,
			code = %new_code,
			entries = collection.len(),
			overridden,
			"deriving string collection"
		);
		languages.insert(new_code, collection);
	}

	/// Returns a resolver bound to `code`.
	///
	/// The code does not need to be registered yet; it is looked up each
	/// time the accessor resolves a key.
	pub fn accessor(&self, code: impl Into<String>) -> Accessor {
		Accessor::new(self.clone(), code.into())
	}

	pub fn contains(&self, code: &str) -> bool {
		self.read().contains_key(code)
	}

	/// Registered language codes, sorted.
	pub fn codes(&self) -> Vec<String> {
		let mut codes: Vec<String> = self.read().keys().cloned().collect();
		codes.sort();
		codes
	}

	/// Keys registered under `code`, sorted. `None` if `code` is unregistered.
	pub fn keys(&self, code: &str) -> Option<Vec<String>> {
		let languages = self.read();
		let mut keys: Vec<String> = languages.get(code)?.keys().cloned().collect();
		keys.sort();
		Some(keys)
	}

	/// Looks up one entry.
	///
	/// The outer `Option` reports whether `code` is registered, the inner one
	/// whether it holds `key`. The entry is cloned so no lock is held by the
	/// caller.
	pub(crate) fn entry(&self, code: &str, key: &str) -> Option<Option<Entry>> {
		self.read()
			.get(code)
			.map(|collection| collection.get(key).cloned())
	}

	// Poisoning is recovered: every write leaves the map in a consistent state.
	fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Collection>> {
		self.languages.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Collection>> {
		self.languages.write().unwrap_or_else(PoisonError::into_inner)
	}
}

fn collect_entries<I, K, E>(entries: I) -> Collection
where
	I: IntoIterator<Item = (K, E)>,
	K: Into<String>,
	E: Into<Entry>,
{
	entries
		.into_iter()
		.map(|(k, e)| (k.into(), e.into()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::{json, Value};
	use std::collections::BTreeMap;

	fn literal(registry: &Registry, code: &str, key: &str) -> Option<Value> {
		registry
			.entry(code, key)
			.flatten()
			.map(|e| e.resolve(&Default::default()))
	}

	#[test]
	fn test_register_and_contains() {
		let registry = Registry::new();
		assert!(!registry.contains("en"));

		registry.register("en", [("HELLO", "Hello")]);
		assert!(registry.contains("en"));
		assert_eq!(literal(&registry, "en", "HELLO"), Some(json!("Hello")));
	}

	#[test]
	fn test_register_replaces_collection() {
		let registry = Registry::new();
		registry.register("en", [("HELLO", "Hello"), ("BYE", "Bye")]);
		registry.register("en", [("HELLO", "Hi")]);

		assert_eq!(literal(&registry, "en", "HELLO"), Some(json!("Hi")));
		assert_eq!(literal(&registry, "en", "BYE"), None);
		assert_eq!(registry.keys("en"), Some(vec!["HELLO".to_string()]));
	}

	#[test]
	fn test_register_duplicate_keys_last_wins() {
		let registry = Registry::new();
		registry.register("en", [("K", "first"), ("K", "second")]);
		assert_eq!(literal(&registry, "en", "K"), Some(json!("second")));
	}

	#[test]
	fn test_register_empty_collection() {
		let registry = Registry::new();
		registry.register("xx", Vec::<(String, Entry)>::new());
		assert!(registry.contains("xx"));
		assert_eq!(registry.keys("xx"), Some(vec![]));
	}

	#[test]
	fn test_derive_overrides_and_inherits() {
		let registry = Registry::new();
		registry.register("en", [("HELLO", "Hello"), ("COLOR", "Color")]);
		registry.derive("en", "en-GB", [("COLOR", "Colour"), ("LIFT", "Lift")]);

		assert_eq!(literal(&registry, "en-GB", "HELLO"), Some(json!("Hello")));
		assert_eq!(literal(&registry, "en-GB", "COLOR"), Some(json!("Colour")));
		assert_eq!(literal(&registry, "en-GB", "LIFT"), Some(json!("Lift")));
	}

	#[test]
	fn test_derive_leaves_source_untouched() {
		let registry = Registry::new();
		registry.register("en", [("COLOR", "Color")]);
		registry.derive("en", "en-GB", [("COLOR", "Colour"), ("LIFT", "Lift")]);

		assert_eq!(literal(&registry, "en", "COLOR"), Some(json!("Color")));
		assert_eq!(literal(&registry, "en", "LIFT"), None);
	}

	#[test]
	fn test_derive_from_unregistered_source_is_empty_base() {
		let registry = Registry::new();
		registry.derive("missing", "new", [("A", "a")]);

		assert!(!registry.contains("missing"));
		assert_eq!(registry.keys("new"), Some(vec!["A".to_string()]));
	}

	#[test]
	fn test_derive_replaces_existing_target() {
		let registry = Registry::new();
		registry.register("en", [("A", "a")]);
		registry.register("en-GB", [("OLD", "old")]);
		registry.derive("en", "en-GB", Vec::<(String, Entry)>::new());

		assert_eq!(registry.keys("en-GB"), Some(vec!["A".to_string()]));
	}

	#[test]
	fn test_derive_onto_itself() {
		let registry = Registry::new();
		registry.register("en", [("A", "a"), ("B", "b")]);
		registry.derive("en", "en", [("B", "bee")]);

		assert_eq!(literal(&registry, "en", "A"), Some(json!("a")));
		assert_eq!(literal(&registry, "en", "B"), Some(json!("bee")));
	}

	#[test]
	fn test_derive_is_a_snapshot() {
		let registry = Registry::new();
		registry.register("en", [("A", "a")]);
		registry.derive("en", "en-GB", Vec::<(String, Entry)>::new());
		registry.register("en", [("A", "changed")]);

		assert_eq!(literal(&registry, "en-GB", "A"), Some(json!("a")));
	}

	#[test]
	fn test_codes_sorted() {
		let registry = Registry::new();
		registry.register("es", [("A", "a")]);
		registry.register("en", [("A", "a")]);
		registry.derive("en", "ar", [("A", "b")]);

		assert_eq!(registry.codes(), vec!["ar", "en", "es"]);
	}

	#[test]
	fn test_keys_unregistered() {
		assert_eq!(Registry::new().keys("en"), None);
	}

	#[test]
	fn test_clones_share_store() {
		let registry = Registry::new();
		let clone = registry.clone();
		clone.register("en", [("A", "a")]);

		assert!(registry.contains("en"));
	}

	#[test]
	fn test_independent_registries_are_isolated() {
		let first = Registry::new();
		let second = Registry::new();
		first.register("en", [("A", "a")]);

		assert!(!second.contains("en"));
	}

	#[test]
	fn test_registry_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Registry>();
	}

	#[test]
	fn test_concurrent_registration() {
		let registry = Registry::new();
		let handles: Vec<_> = (0..8)
			.map(|i| {
				let registry = registry.clone();
				std::thread::spawn(move || {
					registry.register(format!("lang{i}"), [("N", json!(i))]);
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}

		assert_eq!(registry.codes().len(), 8);
		assert_eq!(literal(&registry, "lang3", "N"), Some(json!(3)));
	}

	proptest! {
		/// Every registered key resolves to its value.
		#[test]
		fn registered_entries_resolve(entries in proptest::collection::btree_map("[A-Z_]{1,8}", "[a-zA-Z ]{0,16}", 0..16)) {
			let registry = Registry::new();
			registry.register("en", entries.clone());

			for (key, value) in &entries {
				prop_assert_eq!(literal(&registry, "en", key), Some(json!(value)));
			}
			prop_assert_eq!(registry.keys("en").map(|k| k.len()), Some(entries.len()));
		}

		/// A derived collection holds the override where present, else the source.
		#[test]
		fn derive_is_shallow_merge(
			source in proptest::collection::btree_map("[A-Z]{1,4}", "[a-z]{1,8}", 0..12),
			overrides in proptest::collection::btree_map("[A-Z]{1,4}", "[0-9]{1,8}", 0..12),
		) {
			let registry = Registry::new();
			registry.register("src", source.clone());
			registry.derive("src", "dst", overrides.clone());

			let mut expected: BTreeMap<String, String> = source.clone();
			expected.extend(overrides);

			let keys = registry.keys("dst").unwrap_or_default();
			prop_assert_eq!(keys.len(), expected.len());
			for (key, value) in &expected {
				prop_assert_eq!(literal(&registry, "dst", key), Some(json!(value)));
			}
			for (key, value) in &source {
				prop_assert_eq!(literal(&registry, "src", key), Some(json!(value)));
			}
		}
	}
}
