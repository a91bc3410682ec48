//! Typed metadata keys
//!
//! Camera metadata is a flat table of named, typed fields: a capture request
//! carries the fields the client wants applied, a capture result carries the
//! fields the pipeline reported, and the static characteristics describe what
//! the device can do. This crate provides the pieces shared by everything
//! that touches that table:
//!
//! - The dynamic value model ([`MetadataValue`], [`ValueType`],
//!   [`FromMetadataValue`])
//! - Key definitions and typed handles ([`KeyDef`], [`Key`])
//! - The capabilities a key is used against ([`MetadataContainer`],
//!   [`TagResolver`])
//!
//! Key declaration and the process-wide registry live in `obscura-metadata`;
//! this crate carries no statics and no registration machinery.

mod container;
mod key;
mod value;

pub use container::MetadataContainer;
pub use key::{Key, KeyDef, KeyError, Section, TagResolver, Visibility};
pub use value::{FromMetadataValue, MetadataValue, Rational, ValueType};
