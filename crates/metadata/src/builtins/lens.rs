//! Lens assembly keys.

crate::metadata_key!(LENS_FACING, {
	name: "android.lens.facing",
	type: I32,
	section: Characteristics,
	description: "Direction the camera faces relative to the device screen",
});

crate::metadata_key!(LENS_APERTURE, {
	name: "android.lens.aperture",
	type: F32,
	section: Request,
	description: "Aperture to use, as an f-number",
});

crate::metadata_key!(LENS_FOCAL_LENGTH, {
	name: "android.lens.focalLength",
	type: F32,
	section: Request,
	description: "Lens focal length in millimeters",
});

crate::metadata_key!(LENS_FOCUS_DISTANCE, {
	name: "android.lens.focusDistance",
	type: F32,
	section: Request,
	description: "Focus distance in diopters; 0 means infinity",
});

crate::metadata_key!(LENS_OPTICAL_STABILIZATION_MODE, {
	name: "android.lens.opticalStabilizationMode",
	type: I32,
	section: Request,
	description: "Whether optical image stabilization is enabled",
});

crate::metadata_key!(LENS_STATE, {
	name: "android.lens.state",
	type: I32,
	section: Result,
	description: "Whether any lens parameter is still changing",
});
