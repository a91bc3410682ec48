//! Key definitions and typed key handles.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::{FromMetadataValue, ValueType};

/// Which public metadata surface a key belongs to.
///
/// This replaces "the class the key constant is declared on": static
/// characteristics describe the device, request fields parameterize a
/// capture, result fields report what the pipeline actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
	/// Static device capabilities.
	Characteristics,
	/// Capture request parameters.
	Request,
	/// Capture result fields.
	Result,
}

impl core::fmt::Display for Section {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Characteristics => write!(f, "characteristics"),
			Self::Request => write!(f, "request"),
			Self::Result => write!(f, "result"),
		}
	}
}

/// Whether a key is part of the public enumeration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
	/// Listed by key enumeration.
	Public,
	/// Registered but excluded from enumeration.
	Hidden,
}

/// Errors from key construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
	/// Keys address fields by name; an empty name addresses nothing.
	#[error("key needs a non-empty name")]
	EmptyName,
}

/// Resolves a key name to the integer tag addressing the field in a
/// lower-level store.
///
/// Implementations must be pure: equal names resolve to equal tags for the
/// lifetime of the resolver. [`KeyDef::tag`] caches the first result and
/// never consults the resolver again, so an impure resolver would produce
/// keys that disagree with it. Behavior for names the resolver has never
/// registered is implementation-defined.
pub trait TagResolver {
	/// Returns the tag assigned to `name`.
	fn resolve_tag(&self, name: &str) -> u32;
}

/// Untyped definition of a metadata key.
///
/// A definition is the identity of a field: its name and declared wire type.
/// Equality is structural over `(name, value_type)` — section, visibility,
/// and description describe where the key is surfaced, not what it is.
/// Hashing uses the name only, deliberately coarser than equality: two keys
/// sharing a name but not a type collide in hash-based collections, which is
/// a performance concern rather than a correctness one.
///
/// The resolved tag is a one-shot cache, not part of the definition's
/// identity; it participates in neither equality nor hashing.
pub struct KeyDef {
	name: Cow<'static, str>,
	value_type: ValueType,
	section: Option<Section>,
	visibility: Visibility,
	description: &'static str,
	tag: OnceLock<u32>,
}

impl KeyDef {
	/// Builds a definition for a statically declared key.
	///
	/// Used by the `metadata_key!` declaration macro; prefer that macro over
	/// calling this directly.
	pub const fn builtin(
		name: &'static str,
		value_type: ValueType,
		section: Section,
		visibility: Visibility,
		description: &'static str,
	) -> Self {
		Self {
			name: Cow::Borrowed(name),
			value_type,
			section: Some(section),
			visibility,
			description,
			tag: OnceLock::new(),
		}
	}

	fn owned(name: String, value_type: ValueType) -> Self {
		Self {
			name: Cow::Owned(name),
			value_type,
			section: None,
			visibility: Visibility::Public,
			description: "",
			tag: OnceLock::new(),
		}
	}

	/// Returns the field name this key addresses (e.g. `android.lens.facing`).
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the declared wire type of the field's value.
	pub fn value_type(&self) -> ValueType {
		self.value_type
	}

	/// Returns the surface this key is declared on, or `None` for keys
	/// constructed at runtime.
	pub fn section(&self) -> Option<Section> {
		self.section
	}

	/// Returns whether this key is listed by enumeration.
	pub fn visibility(&self) -> Visibility {
		self.visibility
	}

	/// Returns the human-readable description.
	pub fn description(&self) -> &'static str {
		self.description
	}

	/// Returns the tag addressing this field in a lower-level store.
	///
	/// The first call resolves through `resolver` and caches the result for
	/// the definition's remaining lifetime; later calls return the cache
	/// without consulting the resolver. Concurrent first calls are safe: the
	/// resolver runs at most once per definition.
	pub fn tag<R: TagResolver + ?Sized>(&self, resolver: &R) -> u32 {
		*self.tag.get_or_init(|| resolver.resolve_tag(self.name()))
	}
}

impl PartialEq for KeyDef {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name && self.value_type == other.value_type
	}
}

impl Eq for KeyDef {}

impl Hash for KeyDef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// Name only: coarser than equality, consistent with it.
		self.name.hash(state);
	}
}

impl core::fmt::Debug for KeyDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("KeyDef")
			.field("name", &self.name)
			.field("value_type", &self.value_type)
			.field("section", &self.section)
			.field("visibility", &self.visibility)
			.finish()
	}
}

enum DefRepr {
	/// Statically declared definition.
	Static(&'static KeyDef),
	/// Definition constructed at runtime, owned by this handle.
	Owned(Arc<KeyDef>),
}

impl Clone for DefRepr {
	fn clone(&self) -> Self {
		match self {
			Self::Static(d) => Self::Static(d),
			Self::Owned(d) => Self::Owned(d.clone()),
		}
	}
}

/// Typed handle to a metadata key.
///
/// The type parameter is the Rust type of the field's value; it never
/// affects identity beyond the wire type it maps to, so a `Key<i32>` and a
/// `Key<f32>` with the same name compare unequal while two handles with the
/// same name and wire type compare equal regardless of how they were
/// obtained.
pub struct Key<T: FromMetadataValue> {
	def: DefRepr,
	_marker: PhantomData<fn() -> T>,
}

impl<T: FromMetadataValue> Clone for Key<T> {
	fn clone(&self) -> Self {
		Self {
			def: self.def.clone(),
			_marker: PhantomData,
		}
	}
}

impl<T: FromMetadataValue> Key<T> {
	/// Creates a key addressing `name` with the wire type of `T`.
	///
	/// The resulting key owns its definition and its own tag cache. Two keys
	/// created with equal arguments are equal but distinct instances.
	pub fn new(name: impl Into<String>) -> Result<Self, KeyError> {
		let name = name.into();
		if name.is_empty() {
			return Err(KeyError::EmptyName);
		}
		Ok(Self {
			def: DefRepr::Owned(Arc::new(KeyDef::owned(name, T::value_type()))),
			_marker: PhantomData,
		})
	}

	/// Creates a typed handle over a static definition.
	///
	/// The caller must ensure `def`'s wire type matches `T`; the
	/// `metadata_key!` macro is the only intended caller and guarantees it.
	pub const fn from_def(def: &'static KeyDef) -> Self {
		Self {
			def: DefRepr::Static(def),
			_marker: PhantomData,
		}
	}

	/// Returns the underlying untyped definition.
	pub fn def(&self) -> &KeyDef {
		match &self.def {
			DefRepr::Static(d) => d,
			DefRepr::Owned(d) => d,
		}
	}

	/// Returns the field name this key addresses.
	pub fn name(&self) -> &str {
		self.def().name()
	}

	/// Returns the declared wire type.
	pub fn value_type(&self) -> ValueType {
		self.def().value_type()
	}

	/// Returns the tag for this key, resolving and caching on first call.
	///
	/// See [`KeyDef::tag`].
	pub fn tag<R: TagResolver + ?Sized>(&self, resolver: &R) -> u32 {
		self.def().tag(resolver)
	}
}

impl<T: FromMetadataValue, U: FromMetadataValue> PartialEq<Key<U>> for Key<T> {
	fn eq(&self, other: &Key<U>) -> bool {
		self.def() == other.def()
	}
}

impl<T: FromMetadataValue> Eq for Key<T> {}

impl<T: FromMetadataValue> Hash for Key<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.def().hash(state);
	}
}

impl<T: FromMetadataValue> core::fmt::Debug for Key<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Key")
			.field("name", &self.name())
			.field("value_type", &self.value_type())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::hash_map::DefaultHasher;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	struct CountingResolver {
		calls: AtomicUsize,
		tag: u32,
	}

	impl CountingResolver {
		fn new(tag: u32) -> Self {
			Self {
				calls: AtomicUsize::new(0),
				tag,
			}
		}
	}

	impl TagResolver for CountingResolver {
		fn resolve_tag(&self, _name: &str) -> u32 {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.tag
		}
	}

	fn hash_of(key: &impl Hash) -> u64 {
		let mut hasher = DefaultHasher::new();
		key.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn test_new_preserves_name_and_type() {
		let key = Key::<i32>::new("android.lens.facing").unwrap();
		assert_eq!(key.name(), "android.lens.facing");
		assert_eq!(key.value_type(), ValueType::I32);
	}

	#[test]
	fn test_empty_name_rejected() {
		assert_eq!(Key::<i32>::new(""), Err(KeyError::EmptyName));
		assert_eq!(Key::<String>::new(String::new()), Err(KeyError::EmptyName));
	}

	#[test]
	fn test_equality_is_name_and_type() {
		let a = Key::<i32>::new("android.lens.facing").unwrap();
		let b = Key::<i32>::new("android.lens.facing").unwrap();
		let c = Key::<f32>::new("android.lens.facing").unwrap();
		let d = Key::<i32>::new("android.flash.mode").unwrap();

		assert_eq!(a, a.clone());
		assert_eq!(a, b);
		assert_eq!(b, a);
		assert_ne!(a, c); // same name, different wire type
		assert_ne!(a, d); // same wire type, different name
	}

	#[test]
	fn test_equality_is_transitive() {
		let a = Key::<i64>::new("android.sensor.exposureTime").unwrap();
		let b = a.clone();
		let c = Key::<i64>::new("android.sensor.exposureTime").unwrap();
		assert_eq!(a, b);
		assert_eq!(b, c);
		assert_eq!(a, c);
	}

	#[test]
	fn test_hash_is_name_only() {
		let a = Key::<i32>::new("android.lens.facing").unwrap();
		let b = Key::<i32>::new("android.lens.facing").unwrap();
		// Equal keys hash equal.
		assert_eq!(hash_of(&a), hash_of(&b));

		// Coarser than equality: a same-name key of a different type still
		// hashes equal even though it compares unequal.
		let c = Key::<f32>::new("android.lens.facing").unwrap();
		assert_ne!(a, c);
		assert_eq!(hash_of(&a), hash_of(&c));
	}

	#[test]
	fn test_equal_keys_are_distinct_instances() {
		let a = Key::<i32>::new("android.lens.facing").unwrap();
		let b = Key::<i32>::new("android.lens.facing").unwrap();
		assert_eq!(a, b);
		assert_eq!(hash_of(&a), hash_of(&b));
		assert!(!std::ptr::eq(a.def(), b.def()));
	}

	#[test]
	fn test_tag_resolved_once_and_cached() {
		let resolver = CountingResolver::new(0x0005_0002);
		let key = Key::<i32>::new("android.lens.facing").unwrap();

		assert_eq!(key.tag(&resolver), 0x0005_0002);
		assert_eq!(key.tag(&resolver), 0x0005_0002);
		assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_tag_cache_is_per_instance() {
		let resolver = CountingResolver::new(9);
		let a = Key::<i32>::new("android.lens.facing").unwrap();
		let b = Key::<i32>::new("android.lens.facing").unwrap();

		a.tag(&resolver);
		b.tag(&resolver);
		// Equal keys, separate caches: one resolution each.
		assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn test_clone_shares_the_tag_cache() {
		let resolver = CountingResolver::new(3);
		let a = Key::<i32>::new("android.lens.facing").unwrap();
		let b = a.clone();

		assert_eq!(a.tag(&resolver), 3);
		assert_eq!(b.tag(&resolver), 3);
		assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_static_def_handle() {
		static DEF: KeyDef = KeyDef::builtin(
			"android.control.mode",
			ValueType::I32,
			Section::Request,
			Visibility::Public,
			"Overall control mode",
		);
		let key: Key<i32> = Key::from_def(&DEF);
		assert_eq!(key.name(), "android.control.mode");
		assert_eq!(key.def().section(), Some(Section::Request));

		let dynamic = Key::<i32>::new("android.control.mode").unwrap();
		assert_eq!(key, dynamic);
		assert_eq!(dynamic.def().section(), None);
	}
}
