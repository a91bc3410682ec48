//! In-memory metadata containers and tag tables.

use std::sync::Arc;

use obscura_core::{
	FromMetadataValue, Key, KeyDef, MetadataContainer, MetadataValue, Section, TagResolver,
};
use rustc_hash::FxHashMap;

use crate::registry;

/// An in-memory metadata container bound to one section.
///
/// Writable by its owner; readers observe repeatable values through
/// [`MetadataContainer`]. Typed reads of a mismatched binding (set through
/// [`set_value`](Self::set_value) with the wrong variant) report absence.
#[derive(Debug, Clone)]
pub struct MetadataStore {
	section: Section,
	values: FxHashMap<Box<str>, MetadataValue>,
}

impl MetadataStore {
	/// Creates an empty store for `section`.
	pub fn new(section: Section) -> Self {
		Self {
			section,
			values: FxHashMap::default(),
		}
	}

	/// Binds `value` to `key`, replacing any previous binding.
	pub fn set<T>(&mut self, key: &Key<T>, value: T)
	where
		T: FromMetadataValue + Into<MetadataValue>,
	{
		self.values.insert(Box::from(key.name()), value.into());
	}

	/// Binds a dynamic value to `name` without a typed handle.
	pub fn set_value(&mut self, name: &str, value: MetadataValue) {
		self.values.insert(Box::from(name), value);
	}

	/// Removes the binding for `name`, returning the previous value.
	pub fn unset(&mut self, name: &str) -> Option<MetadataValue> {
		self.values.remove(name)
	}

	/// Number of bound fields.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true when no field is bound.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Lists the public keys of this store's section that currently hold a
	/// value.
	///
	/// The slice is shared and immutable. Every element, queried back
	/// against this store, yields a present value; each key appears once.
	/// Order is unspecified.
	pub fn keys(&self) -> Arc<[&'static KeyDef]> {
		registry::section_keys(self.section, Some(self)).into()
	}
}

impl MetadataContainer for MetadataStore {
	fn section(&self) -> Section {
		self.section
	}

	fn get_dyn(&self, name: &str) -> Option<MetadataValue> {
		self.values.get(name).cloned()
	}
}

/// A name-to-tag mapping usable as a [`TagResolver`].
///
/// Tag assignment is external to this crate; a `TagTable` is typically built
/// once from whatever assigns tags (a HAL vendor table, a test fixture) and
/// then treated as read-only. Resolving a name that was never inserted is a
/// caller error and panics.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
	tags: FxHashMap<Box<str>, u32>,
}

impl TagTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Assigns `tag` to `name`, replacing any previous assignment.
	pub fn insert(&mut self, name: impl Into<Box<str>>, tag: u32) {
		self.tags.insert(name.into(), tag);
	}

	/// Returns the tag assigned to `name`, if any.
	pub fn get(&self, name: &str) -> Option<u32> {
		self.tags.get(name).copied()
	}
}

impl<S: Into<Box<str>>> FromIterator<(S, u32)> for TagTable {
	fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
		Self {
			tags: iter.into_iter().map(|(name, tag)| (name.into(), tag)).collect(),
		}
	}
}

impl TagResolver for TagTable {
	fn resolve_tag(&self, name: &str) -> u32 {
		match self.tags.get(name) {
			Some(&tag) => tag,
			None => panic!("no tag registered for metadata key {name:?}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::keys;
	use crate::vocab;

	#[test]
	fn test_typed_set_get_round_trip() {
		let mut store = MetadataStore::new(Section::Characteristics);
		store.set(&keys::LENS_FACING, vocab::LENS_FACING_BACK);

		assert_eq!(store.get(&keys::LENS_FACING), Some(vocab::LENS_FACING_BACK));
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn test_absent_key_reads_as_none() {
		let store = MetadataStore::new(Section::Request);
		assert_eq!(store.get(&keys::FLASH_MODE), None);
		assert!(store.get_dyn("android.flash.mode").is_none());
	}

	#[test]
	fn test_reads_are_repeatable() {
		let mut store = MetadataStore::new(Section::Request);
		store.set(&keys::SENSOR_EXPOSURE_TIME, 33_333_333i64);

		let first = store.get(&keys::SENSOR_EXPOSURE_TIME);
		let second = store.get(&keys::SENSOR_EXPOSURE_TIME);
		assert_eq!(first, second);
	}

	#[test]
	fn test_type_mismatch_reads_as_absent() {
		let mut store = MetadataStore::new(Section::Characteristics);
		store.set_value("android.lens.facing", MetadataValue::Str("bad".into()));

		// Present dynamically, absent through the typed handle.
		assert!(store.get_dyn("android.lens.facing").is_some());
		assert_eq!(store.get(&keys::LENS_FACING), None);
	}

	#[test]
	fn test_keys_lists_only_present_public_keys() {
		let mut store = MetadataStore::new(Section::Request);
		store.set(&keys::CONTROL_AE_MODE, vocab::CONTROL_AE_MODE_ON);
		store.set(&keys::FLASH_MODE, vocab::FLASH_MODE_TORCH);
		// Hidden key: bound, but must not be enumerated.
		store.set(&keys::LED_TRANSMIT, 1u8);

		let listed = store.keys();
		let names: Vec<_> = listed.iter().map(|d| d.name()).collect();
		assert_eq!(names.len(), 2);
		assert!(names.contains(&"android.control.aeMode"));
		assert!(names.contains(&"android.flash.mode"));

		// Every listed key queries back to a present value.
		for def in listed.iter() {
			assert!(store.get_dyn(def.name()).is_some());
		}
	}

	#[test]
	fn test_keys_updates_with_bindings() {
		let mut store = MetadataStore::new(Section::Request);
		assert!(store.keys().is_empty());

		store.set(&keys::FLASH_MODE, vocab::FLASH_MODE_SINGLE);
		assert_eq!(store.keys().len(), 1);

		store.unset("android.flash.mode");
		assert!(store.keys().is_empty());
	}

	#[test]
	fn test_tag_table_resolves() {
		let table: TagTable = [("android.lens.facing", 0x0005_0005u32)]
			.into_iter()
			.collect();
		assert_eq!(table.resolve_tag("android.lens.facing"), 0x0005_0005);
		assert_eq!(table.get("android.flash.mode"), None);
	}

	#[test]
	#[should_panic(expected = "no tag registered")]
	fn test_tag_table_panics_on_unknown_name() {
		TagTable::new().resolve_tag("android.unknown.key");
	}

	#[test]
	fn test_builtin_handles_cache_tags() {
		let mut table = TagTable::new();
		table.insert("android.scaler.availableMaxDigitalZoom", 0x000d_0004);

		let tag = keys::SCALER_AVAILABLE_MAX_DIGITAL_ZOOM.tag(&table);
		assert_eq!(tag, 0x000d_0004);
		// Cached: an empty table would now panic if it were consulted again.
		let empty = TagTable::new();
		assert_eq!(keys::SCALER_AVAILABLE_MAX_DIGITAL_ZOOM.tag(&empty), tag);
	}
}
