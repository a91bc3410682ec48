//! Registration macro for metadata keys.

/// Selects a provided visibility or falls back to public.
#[doc(hidden)]
#[macro_export]
macro_rules! __key_visibility {
	() => {
		$crate::Visibility::Public
	};
	($vis:ident) => {
		$crate::Visibility::$vis
	};
}

/// Declares a built-in metadata key.
///
/// This macro generates:
/// - A static [`KeyDef`](crate::KeyDef) registered with the process-wide
///   [`registry`](crate::registry)
/// - A public `static` typed [`Key`](crate::Key) handle
///
/// # Example
///
/// ```ignore
/// metadata_key!(LENS_FACING, {
///     name: "android.lens.facing",
///     type: I32,
///     section: Characteristics,
///     description: "Direction the camera faces relative to the device screen",
/// });
///
/// metadata_key!(LED_TRANSMIT, {
///     name: "android.led.transmit",
///     type: Byte,
///     section: Request,
///     description: "Whether the transmit LED is on when the camera streams",
///     visibility: Hidden,
/// });
///
/// // Use the generated typed handle:
/// let tag = LENS_FACING.tag(&resolver);
/// ```
///
/// The `type:` identifier selects both the [`ValueType`](crate::ValueType)
/// variant and the handle's Rust type (via [`ty`](crate::ty)). Keys marked
/// `visibility: Hidden` are registered but excluded from enumeration.
#[macro_export]
macro_rules! metadata_key {
	($handle:ident, {
		name: $name:literal,
		type: $type:ident,
		section: $section:ident,
		description: $desc:literal
		$(, visibility: $visibility:ident)?
		$(,)?
	}) => {
		paste::paste! {
			#[doc(hidden)]
			pub static [<DEF_ $handle>]: $crate::KeyDef = $crate::KeyDef::builtin(
				$name,
				$crate::ValueType::$type,
				$crate::Section::$section,
				$crate::__key_visibility!($($visibility)?),
				$desc,
			);

			inventory::submit! {
				$crate::registry::KeyReg(&[<DEF_ $handle>])
			}

			#[doc = $desc]
			#[doc = ""]
			#[doc = concat!("Typed handle for `", $name, "`.")]
			pub static $handle: $crate::Key<$crate::ty::$type> =
				$crate::Key::from_def(&[<DEF_ $handle>]);
		}
	};
}
