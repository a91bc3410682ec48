//! Camera metadata key registry
//!
//! Every field of the camera metadata table is addressed by a [`Key`]: a
//! named, typed identifier with a lazily resolved integer tag. This crate
//! provides:
//!
//! - The process-wide key registry ([`registry`]) — keys declared with
//!   [`metadata_key!`] are collected at link time into an explicit table,
//!   replacing runtime discovery of key constants
//! - Built-in key declarations grouped by subsystem ([`keys`])
//! - The enum-value vocabulary for built-in keys ([`vocab`])
//! - An in-memory container and tag table ([`MetadataStore`], [`TagTable`])
//!
//! ```ignore
//! use obscura_metadata::{keys, MetadataStore, MetadataContainer, Section, vocab};
//!
//! let mut chars = MetadataStore::new(Section::Characteristics);
//! chars.set(&keys::LENS_FACING, vocab::LENS_FACING_BACK);
//!
//! assert_eq!(chars.get(&keys::LENS_FACING), Some(vocab::LENS_FACING_BACK));
//! for def in chars.keys().iter() {
//!     println!("{} ({:?})", def.name(), def.value_type());
//! }
//! ```

mod builtins;
mod macros;
pub mod registry;
mod store;
pub mod vocab;

pub use obscura_core::{
	FromMetadataValue, Key, KeyDef, KeyError, MetadataContainer, MetadataValue, Rational, Section,
	TagResolver, ValueType, Visibility,
};
pub use registry::{all, find, section_keys};
pub use store::{MetadataStore, TagTable};

/// Typed handles for the built-in keys, grouped by subsystem.
pub mod keys {
	pub use crate::builtins::color_correction::*;
	pub use crate::builtins::control::*;
	pub use crate::builtins::flash::*;
	pub use crate::builtins::info::*;
	pub use crate::builtins::led::*;
	pub use crate::builtins::lens::*;
	pub use crate::builtins::noise_reduction::*;
	pub use crate::builtins::scaler::*;
	pub use crate::builtins::sensor::*;
	pub use crate::builtins::statistics::*;
	pub use crate::builtins::tonemap::*;
}

/// Rust value types keyed by their wire-type name.
///
/// Lets [`metadata_key!`] derive the handle's type parameter from the same
/// identifier that selects the [`ValueType`] variant.
pub mod ty {
	/// Unsigned byte.
	pub type Byte = u8;
	/// Signed 32-bit integer.
	pub type I32 = i32;
	/// Signed 64-bit integer.
	pub type I64 = i64;
	/// 32-bit float.
	pub type F32 = f32;
	/// 64-bit float.
	pub type F64 = f64;
	/// Exact rational.
	pub type Rational = obscura_core::Rational;
	/// UTF-8 string.
	pub type Str = String;
}
