//! The container capability keys are queried against.

use crate::key::{Key, Section};
use crate::value::{FromMetadataValue, MetadataValue};

/// An opaque key/value store addressable by metadata keys.
///
/// Containers are read-repeatable: querying an equal key twice returns an
/// equal value for the container's lifetime. An absent key is a normal
/// outcome, reported as `None` rather than an error.
pub trait MetadataContainer {
	/// The metadata surface this container holds values for.
	fn section(&self) -> Section;

	/// Returns the value currently bound to `name`, or `None` when absent.
	fn get_dyn(&self, name: &str) -> Option<MetadataValue>;

	/// Typed lookup through a key handle.
	///
	/// Returns `None` when the key is absent or the stored value does not
	/// match the key's declared wire type.
	fn get<T: FromMetadataValue>(&self, key: &Key<T>) -> Option<T>
	where
		Self: Sized,
	{
		self.get_dyn(key.name()).and_then(|v| T::from_value(&v))
	}
}
