//! Process-wide key registry.
//!
//! Key definitions declared with [`metadata_key!`](crate::metadata_key) are
//! collected at link time and indexed once, on first use. The registry is an
//! explicit table: what keys exist is decided entirely by declarations, not
//! by scanning anything at runtime.

use std::sync::LazyLock;

use obscura_core::{KeyDef, MetadataContainer, Section, Visibility};
use rustc_hash::FxHashMap;

/// Inventory registration wrapper for key definitions.
pub struct KeyReg(pub &'static KeyDef);

inventory::collect!(KeyReg);

struct KeyIndex {
	by_name: FxHashMap<&'static str, &'static KeyDef>,
	ordered: Vec<&'static KeyDef>,
}

static INDEX: LazyLock<KeyIndex> = LazyLock::new(build_index);

fn build_index() -> KeyIndex {
	let mut by_name = FxHashMap::default();
	let mut ordered = Vec::new();

	for reg in inventory::iter::<KeyReg> {
		let def = reg.0;
		if let Some(existing) = by_name.insert(def.name(), def) {
			// Two definitions for one name is a programming error in the
			// declarations, not recoverable input.
			tracing::error!(name = def.name(), "duplicate metadata key registration");
			panic!(
				"duplicate metadata key registration: {:?} ({:?} vs {:?})",
				def.name(),
				existing.value_type(),
				def.value_type(),
			);
		}
		ordered.push(def);
	}

	tracing::debug!(keys = ordered.len(), "metadata key index built");
	KeyIndex { by_name, ordered }
}

/// Finds a registered key definition by name.
pub fn find(name: &str) -> Option<&'static KeyDef> {
	INDEX.by_name.get(name).copied()
}

/// Returns every registered key definition, hidden ones included.
pub fn all() -> impl Iterator<Item = &'static KeyDef> {
	INDEX.ordered.iter().copied()
}

/// Lists the public key definitions declared on `section`.
///
/// With an `instance`, keys whose value is currently absent in the instance
/// are filtered out, so every returned key is guaranteed to yield a present
/// value when queried against it. The result follows registration order,
/// which callers must treat as unspecified.
pub fn section_keys(
	section: Section,
	instance: Option<&dyn MetadataContainer>,
) -> Vec<&'static KeyDef> {
	INDEX
		.ordered
		.iter()
		.copied()
		.filter(|def| def.section() == Some(section))
		.filter(|def| def.visibility() == Visibility::Public)
		.filter(|def| match instance {
			None => true,
			Some(container) => container.get_dyn(def.name()).is_some(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use obscura_core::{MetadataValue, ValueType};

	use super::*;
	use crate::keys;

	struct FixedContainer {
		section: Section,
		present: Vec<&'static str>,
	}

	impl MetadataContainer for FixedContainer {
		fn section(&self) -> Section {
			self.section
		}

		fn get_dyn(&self, name: &str) -> Option<MetadataValue> {
			self.present
				.iter()
				.any(|p| *p == name)
				.then(|| MetadataValue::I32(0))
		}
	}

	#[test]
	fn test_find_registered_key() {
		let def = find("android.lens.facing").expect("builtin key registered");
		assert_eq!(def.value_type(), ValueType::I32);
		assert_eq!(def.section(), Some(Section::Characteristics));
	}

	#[test]
	fn test_find_unknown_key() {
		assert!(find("android.nonexistent.key").is_none());
	}

	#[test]
	fn test_all_includes_hidden_keys() {
		assert!(all().any(|def| def.visibility() == Visibility::Hidden));
	}

	#[test]
	fn test_registered_names_are_unique() {
		let mut names: Vec<_> = all().map(|def| def.name()).collect();
		let total = names.len();
		names.sort_unstable();
		names.dedup();
		assert_eq!(names.len(), total);
	}

	#[test]
	fn test_section_keys_unfiltered() {
		let defs = section_keys(Section::Characteristics, None);
		assert!(defs.iter().any(|d| d.name() == keys::LENS_FACING.name()));
		// Only the requested section.
		assert!(defs.iter().all(|d| d.section() == Some(Section::Characteristics)));
		// Hidden keys are never enumerated; android.led.availableLeds is a
		// characteristics key but marked hidden.
		assert!(defs.iter().all(|d| d.visibility() == Visibility::Public));
		assert!(!defs.iter().any(|d| d.name() == "android.led.availableLeds"));
		assert!(find("android.led.availableLeds").is_some());
	}

	#[test]
	fn test_section_keys_filtered_by_presence() {
		let container = FixedContainer {
			section: Section::Request,
			present: vec!["android.control.aeMode", "android.flash.mode"],
		};
		let defs = section_keys(Section::Request, Some(&container));

		let names: Vec<_> = defs.iter().map(|d| d.name()).collect();
		assert_eq!(names.len(), 2);
		assert!(names.contains(&"android.control.aeMode"));
		assert!(names.contains(&"android.flash.mode"));
	}

	#[test]
	fn test_section_keys_empty_instance() {
		let container = FixedContainer {
			section: Section::Result,
			present: vec![],
		};
		assert!(section_keys(Section::Result, Some(&container)).is_empty());
	}
}
