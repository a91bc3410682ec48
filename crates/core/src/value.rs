//! Dynamic value model for metadata containers.

use serde::{Deserialize, Serialize};

/// An exact rational value (numerator over denominator).
///
/// Used for fields like gain factors and exposure compensation steps where
/// the pipeline reports exact fractions rather than floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
	/// Numerator.
	pub numerator: i32,
	/// Denominator. Well-formed values keep this non-zero.
	pub denominator: i32,
}

impl Rational {
	/// Creates a rational from a numerator and denominator.
	pub const fn new(numerator: i32, denominator: i32) -> Self {
		Self {
			numerator,
			denominator,
		}
	}
}

impl core::fmt::Display for Rational {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}/{}", self.numerator, self.denominator)
	}
}

/// The declared wire type of a key's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
	/// Unsigned byte.
	Byte,
	/// Signed 32-bit integer. Enum-valued fields use this type.
	I32,
	/// Signed 64-bit integer.
	I64,
	/// 32-bit float.
	F32,
	/// 64-bit float.
	F64,
	/// Exact rational.
	Rational,
	/// UTF-8 string.
	Str,
}

/// The value currently bound to a key in a metadata container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
	/// Unsigned byte value.
	Byte(u8),
	/// Signed 32-bit integer value.
	I32(i32),
	/// Signed 64-bit integer value.
	I64(i64),
	/// 32-bit float value.
	F32(f32),
	/// 64-bit float value.
	F64(f64),
	/// Exact rational value.
	Rational(Rational),
	/// UTF-8 string value.
	Str(String),
}

impl MetadataValue {
	/// Returns the byte value if this is a `Byte` variant.
	pub fn as_byte(&self) -> Option<u8> {
		match self {
			MetadataValue::Byte(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `I32` variant.
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			MetadataValue::I32(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `I64` variant.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			MetadataValue::I64(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is an `F32` variant.
	pub fn as_f32(&self) -> Option<f32> {
		match self {
			MetadataValue::F32(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is an `F64` variant.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			MetadataValue::F64(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the rational value if this is a `Rational` variant.
	pub fn as_rational(&self) -> Option<Rational> {
		match self {
			MetadataValue::Rational(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `Str` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			MetadataValue::Str(v) => Some(v),
			_ => None,
		}
	}

	/// Returns true if this value matches the given wire type.
	pub fn matches_type(&self, ty: ValueType) -> bool {
		self.value_type() == ty
	}

	/// Returns the wire type of this value.
	pub fn value_type(&self) -> ValueType {
		match self {
			MetadataValue::Byte(_) => ValueType::Byte,
			MetadataValue::I32(_) => ValueType::I32,
			MetadataValue::I64(_) => ValueType::I64,
			MetadataValue::F32(_) => ValueType::F32,
			MetadataValue::F64(_) => ValueType::F64,
			MetadataValue::Rational(_) => ValueType::Rational,
			MetadataValue::Str(_) => ValueType::Str,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			MetadataValue::Byte(_) => "byte",
			MetadataValue::I32(_) => "i32",
			MetadataValue::I64(_) => "i64",
			MetadataValue::F32(_) => "f32",
			MetadataValue::F64(_) => "f64",
			MetadataValue::Rational(_) => "rational",
			MetadataValue::Str(_) => "str",
		}
	}
}

impl From<u8> for MetadataValue {
	fn from(v: u8) -> Self {
		MetadataValue::Byte(v)
	}
}

impl From<i32> for MetadataValue {
	fn from(v: i32) -> Self {
		MetadataValue::I32(v)
	}
}

impl From<i64> for MetadataValue {
	fn from(v: i64) -> Self {
		MetadataValue::I64(v)
	}
}

impl From<f32> for MetadataValue {
	fn from(v: f32) -> Self {
		MetadataValue::F32(v)
	}
}

impl From<f64> for MetadataValue {
	fn from(v: f64) -> Self {
		MetadataValue::F64(v)
	}
}

impl From<Rational> for MetadataValue {
	fn from(v: Rational) -> Self {
		MetadataValue::Rational(v)
	}
}

impl From<String> for MetadataValue {
	fn from(v: String) -> Self {
		MetadataValue::Str(v)
	}
}

impl From<&str> for MetadataValue {
	fn from(v: &str) -> Self {
		MetadataValue::Str(v.to_string())
	}
}

// Seal the FromMetadataValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for u8 {}
	impl Sealed for i32 {}
	impl Sealed for i64 {}
	impl Sealed for f32 {}
	impl Sealed for f64 {}
	impl Sealed for super::Rational {}
	impl Sealed for String {}
}

/// Trait for Rust types that can be extracted from a [`MetadataValue`].
///
/// Keys are parameterized over an implementor of this trait; it is what ties
/// a key's compile-time type to its declared [`ValueType`].
pub trait FromMetadataValue: sealed::Sealed + Sized {
	/// Extracts the value, returning `None` if the variant doesn't match.
	fn from_value(value: &MetadataValue) -> Option<Self>;

	/// Returns the wire type corresponding to this Rust type.
	fn value_type() -> ValueType;
}

impl FromMetadataValue for u8 {
	fn from_value(value: &MetadataValue) -> Option<Self> {
		value.as_byte()
	}

	fn value_type() -> ValueType {
		ValueType::Byte
	}
}

impl FromMetadataValue for i32 {
	fn from_value(value: &MetadataValue) -> Option<Self> {
		value.as_i32()
	}

	fn value_type() -> ValueType {
		ValueType::I32
	}
}

impl FromMetadataValue for i64 {
	fn from_value(value: &MetadataValue) -> Option<Self> {
		value.as_i64()
	}

	fn value_type() -> ValueType {
		ValueType::I64
	}
}

impl FromMetadataValue for f32 {
	fn from_value(value: &MetadataValue) -> Option<Self> {
		value.as_f32()
	}

	fn value_type() -> ValueType {
		ValueType::F32
	}
}

impl FromMetadataValue for f64 {
	fn from_value(value: &MetadataValue) -> Option<Self> {
		value.as_f64()
	}

	fn value_type() -> ValueType {
		ValueType::F64
	}
}

impl FromMetadataValue for Rational {
	fn from_value(value: &MetadataValue) -> Option<Self> {
		value.as_rational()
	}

	fn value_type() -> ValueType {
		ValueType::Rational
	}
}

impl FromMetadataValue for String {
	fn from_value(value: &MetadataValue) -> Option<Self> {
		value.as_str().map(|s| s.to_string())
	}

	fn value_type() -> ValueType {
		ValueType::Str
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accessors_match_variant() {
		assert_eq!(MetadataValue::I32(7).as_i32(), Some(7));
		assert_eq!(MetadataValue::I32(7).as_i64(), None);
		assert_eq!(MetadataValue::Str("x".into()).as_str(), Some("x"));
		assert_eq!(
			MetadataValue::Rational(Rational::new(1, 3)).as_rational(),
			Some(Rational::new(1, 3))
		);
	}

	#[test]
	fn test_matches_type() {
		assert!(MetadataValue::Byte(1).matches_type(ValueType::Byte));
		assert!(!MetadataValue::Byte(1).matches_type(ValueType::I32));
		assert!(MetadataValue::F64(0.5).matches_type(ValueType::F64));
	}

	#[test]
	fn test_from_value_respects_type() {
		let v = MetadataValue::from(42i32);
		assert_eq!(i32::from_value(&v), Some(42));
		assert_eq!(f32::from_value(&v), None);
		assert_eq!(String::from_value(&v), None);
	}

	#[test]
	fn test_rust_type_to_wire_type() {
		assert_eq!(u8::value_type(), ValueType::Byte);
		assert_eq!(i32::value_type(), ValueType::I32);
		assert_eq!(i64::value_type(), ValueType::I64);
		assert_eq!(f32::value_type(), ValueType::F32);
		assert_eq!(f64::value_type(), ValueType::F64);
		assert_eq!(Rational::value_type(), ValueType::Rational);
		assert_eq!(String::value_type(), ValueType::Str);
	}
}
