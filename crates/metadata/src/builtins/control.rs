//! Auto-exposure, auto-focus, and auto-white-balance control keys.

crate::metadata_key!(CONTROL_AE_ANTIBANDING_MODE, {
	name: "android.control.aeAntibandingMode",
	type: I32,
	section: Request,
	description: "Flicker-avoidance mode for auto-exposure",
});

crate::metadata_key!(CONTROL_AE_EXPOSURE_COMPENSATION, {
	name: "android.control.aeExposureCompensation",
	type: I32,
	section: Request,
	description: "Exposure adjustment in compensation steps",
});

crate::metadata_key!(CONTROL_AE_MODE, {
	name: "android.control.aeMode",
	type: I32,
	section: Request,
	description: "Auto-exposure mode",
});

crate::metadata_key!(CONTROL_AF_MODE, {
	name: "android.control.afMode",
	type: I32,
	section: Request,
	description: "Auto-focus mode",
});

crate::metadata_key!(CONTROL_AWB_MODE, {
	name: "android.control.awbMode",
	type: I32,
	section: Request,
	description: "Auto-white-balance mode",
});

crate::metadata_key!(CONTROL_CAPTURE_INTENT, {
	name: "android.control.captureIntent",
	type: I32,
	section: Request,
	description: "What the capture is ultimately used for",
});

crate::metadata_key!(CONTROL_EFFECT_MODE, {
	name: "android.control.effectMode",
	type: I32,
	section: Request,
	description: "Color effect applied to the capture",
});

crate::metadata_key!(CONTROL_MODE, {
	name: "android.control.mode",
	type: I32,
	section: Request,
	description: "Overall 3A control mode",
});

crate::metadata_key!(CONTROL_SCENE_MODE, {
	name: "android.control.sceneMode",
	type: I32,
	section: Request,
	description: "Preset scene mode, active when the control mode selects it",
});

crate::metadata_key!(CONTROL_AE_STATE, {
	name: "android.control.aeState",
	type: I32,
	section: Result,
	description: "Current auto-exposure state machine state",
});

crate::metadata_key!(CONTROL_AF_STATE, {
	name: "android.control.afState",
	type: I32,
	section: Result,
	description: "Current auto-focus state machine state",
});

crate::metadata_key!(CONTROL_AWB_STATE, {
	name: "android.control.awbState",
	type: I32,
	section: Result,
	description: "Current auto-white-balance state machine state",
});
