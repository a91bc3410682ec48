//! Output scaler keys.

crate::metadata_key!(SCALER_AVAILABLE_MAX_DIGITAL_ZOOM, {
	name: "android.scaler.availableMaxDigitalZoom",
	type: F32,
	section: Characteristics,
	description: "Maximum digital zoom ratio the scaler supports",
});
