//! Device-level information keys.

crate::metadata_key!(INFO_SUPPORTED_HARDWARE_LEVEL, {
	name: "android.info.supportedHardwareLevel",
	type: I32,
	section: Characteristics,
	description: "Hardware level this device supports, limited or full",
});

crate::metadata_key!(INFO_VERSION, {
	name: "android.info.version",
	type: Str,
	section: Characteristics,
	description: "Manufacturer version string for the camera subsystem",
});
