//! Enum-value vocabulary for the built-in keys.
//!
//! Integer-typed keys take their values from these named constants. The
//! table is plain data mirrored from the platform metadata definitions; it
//! carries no behavior and values must never be renumbered.

// android.lens.facing

/// The camera faces the same direction as the device screen.
pub const LENS_FACING_FRONT: i32 = 0;
/// The camera faces the opposite direction of the device screen.
pub const LENS_FACING_BACK: i32 = 1;

// android.lens.opticalStabilizationMode

/// Optical stabilization disabled.
pub const LENS_OPTICAL_STABILIZATION_MODE_OFF: i32 = 0;
/// Optical stabilization enabled.
pub const LENS_OPTICAL_STABILIZATION_MODE_ON: i32 = 1;

// android.lens.state

/// Lens parameters are settled.
pub const LENS_STATE_STATIONARY: i32 = 0;
/// One or more lens parameters are still changing.
pub const LENS_STATE_MOVING: i32 = 1;

// android.led.availableLeds

/// The transmit LED is available.
pub const LED_AVAILABLE_LEDS_TRANSMIT: i32 = 0;

// android.info.supportedHardwareLevel

/// Baseline feature set.
pub const INFO_SUPPORTED_HARDWARE_LEVEL_LIMITED: i32 = 0;
/// Full per-frame control feature set.
pub const INFO_SUPPORTED_HARDWARE_LEVEL_FULL: i32 = 1;

// android.colorCorrection.mode

/// Use the client-supplied transform matrix and gains.
pub const COLOR_CORRECTION_MODE_TRANSFORM_MATRIX: i32 = 0;
/// Device-chosen color conversion, must not slow down the frame rate.
pub const COLOR_CORRECTION_MODE_FAST: i32 = 1;
/// Highest-quality color conversion, frame rate may drop.
pub const COLOR_CORRECTION_MODE_HIGH_QUALITY: i32 = 2;

// android.control.aeAntibandingMode

pub const CONTROL_AE_ANTIBANDING_MODE_OFF: i32 = 0;
pub const CONTROL_AE_ANTIBANDING_MODE_50HZ: i32 = 1;
pub const CONTROL_AE_ANTIBANDING_MODE_60HZ: i32 = 2;
pub const CONTROL_AE_ANTIBANDING_MODE_AUTO: i32 = 3;

// android.control.aeMode

/// Auto-exposure disabled; exposure is controlled by the request fields.
pub const CONTROL_AE_MODE_OFF: i32 = 0;
/// Auto-exposure active, flash not used.
pub const CONTROL_AE_MODE_ON: i32 = 1;
/// Auto-exposure active, flash fired at capture time when needed.
pub const CONTROL_AE_MODE_ON_AUTO_FLASH: i32 = 2;
/// Auto-exposure active, flash always fired at capture time.
pub const CONTROL_AE_MODE_ON_ALWAYS_FLASH: i32 = 3;
/// Like auto-flash, with red-eye reduction before the capture.
pub const CONTROL_AE_MODE_ON_AUTO_FLASH_REDEYE: i32 = 4;

// android.control.afMode

/// Auto-focus disabled; focus distance is controlled by the request.
pub const CONTROL_AF_MODE_OFF: i32 = 0;
/// Basic single-shot auto-focus.
pub const CONTROL_AF_MODE_AUTO: i32 = 1;
/// Close-in focus scan.
pub const CONTROL_AF_MODE_MACRO: i32 = 2;
/// Continuous focus optimized for video.
pub const CONTROL_AF_MODE_CONTINUOUS_VIDEO: i32 = 3;
/// Continuous focus optimized for still capture.
pub const CONTROL_AF_MODE_CONTINUOUS_PICTURE: i32 = 4;
/// Extended depth of field; no active focusing.
pub const CONTROL_AF_MODE_EDOF: i32 = 5;

// android.control.awbMode

pub const CONTROL_AWB_MODE_OFF: i32 = 0;
pub const CONTROL_AWB_MODE_AUTO: i32 = 1;
pub const CONTROL_AWB_MODE_INCANDESCENT: i32 = 2;
pub const CONTROL_AWB_MODE_FLUORESCENT: i32 = 3;
pub const CONTROL_AWB_MODE_WARM_FLUORESCENT: i32 = 4;
pub const CONTROL_AWB_MODE_DAYLIGHT: i32 = 5;
pub const CONTROL_AWB_MODE_CLOUDY_DAYLIGHT: i32 = 6;
pub const CONTROL_AWB_MODE_TWILIGHT: i32 = 7;
pub const CONTROL_AWB_MODE_SHADE: i32 = 8;

// android.control.captureIntent

pub const CONTROL_CAPTURE_INTENT_CUSTOM: i32 = 0;
pub const CONTROL_CAPTURE_INTENT_PREVIEW: i32 = 1;
pub const CONTROL_CAPTURE_INTENT_STILL_CAPTURE: i32 = 2;
pub const CONTROL_CAPTURE_INTENT_VIDEO_RECORD: i32 = 3;
pub const CONTROL_CAPTURE_INTENT_VIDEO_SNAPSHOT: i32 = 4;
pub const CONTROL_CAPTURE_INTENT_ZERO_SHUTTER_LAG: i32 = 5;

// android.control.effectMode

pub const CONTROL_EFFECT_MODE_OFF: i32 = 0;
pub const CONTROL_EFFECT_MODE_MONO: i32 = 1;
pub const CONTROL_EFFECT_MODE_NEGATIVE: i32 = 2;
pub const CONTROL_EFFECT_MODE_SOLARIZE: i32 = 3;
pub const CONTROL_EFFECT_MODE_SEPIA: i32 = 4;
pub const CONTROL_EFFECT_MODE_POSTERIZE: i32 = 5;
pub const CONTROL_EFFECT_MODE_WHITEBOARD: i32 = 6;
pub const CONTROL_EFFECT_MODE_BLACKBOARD: i32 = 7;
pub const CONTROL_EFFECT_MODE_AQUA: i32 = 8;

// android.control.mode

/// 3A routines disabled; the request fields apply directly.
pub const CONTROL_MODE_OFF: i32 = 0;
/// Individual 3A routines run according to their own mode fields.
pub const CONTROL_MODE_AUTO: i32 = 1;
/// The scene mode drives the 3A routines.
pub const CONTROL_MODE_USE_SCENE_MODE: i32 = 2;

// android.control.sceneMode

pub const CONTROL_SCENE_MODE_DISABLED: i32 = 0;
pub const CONTROL_SCENE_MODE_FACE_PRIORITY: i32 = 1;
pub const CONTROL_SCENE_MODE_ACTION: i32 = 2;
pub const CONTROL_SCENE_MODE_PORTRAIT: i32 = 3;
pub const CONTROL_SCENE_MODE_LANDSCAPE: i32 = 4;
pub const CONTROL_SCENE_MODE_NIGHT: i32 = 5;
pub const CONTROL_SCENE_MODE_NIGHT_PORTRAIT: i32 = 6;
pub const CONTROL_SCENE_MODE_THEATRE: i32 = 7;
pub const CONTROL_SCENE_MODE_BEACH: i32 = 8;
pub const CONTROL_SCENE_MODE_SNOW: i32 = 9;
pub const CONTROL_SCENE_MODE_SUNSET: i32 = 10;
pub const CONTROL_SCENE_MODE_STEADYPHOTO: i32 = 11;
pub const CONTROL_SCENE_MODE_FIREWORKS: i32 = 12;
pub const CONTROL_SCENE_MODE_SPORTS: i32 = 13;
pub const CONTROL_SCENE_MODE_PARTY: i32 = 14;
pub const CONTROL_SCENE_MODE_CANDLELIGHT: i32 = 15;
pub const CONTROL_SCENE_MODE_BARCODE: i32 = 16;

// android.control.aeState

pub const CONTROL_AE_STATE_INACTIVE: i32 = 0;
pub const CONTROL_AE_STATE_SEARCHING: i32 = 1;
pub const CONTROL_AE_STATE_CONVERGED: i32 = 2;
pub const CONTROL_AE_STATE_LOCKED: i32 = 3;
pub const CONTROL_AE_STATE_FLASH_REQUIRED: i32 = 4;
pub const CONTROL_AE_STATE_PRECAPTURE: i32 = 5;

// android.control.afState

pub const CONTROL_AF_STATE_INACTIVE: i32 = 0;
pub const CONTROL_AF_STATE_PASSIVE_SCAN: i32 = 1;
pub const CONTROL_AF_STATE_PASSIVE_FOCUSED: i32 = 2;
pub const CONTROL_AF_STATE_ACTIVE_SCAN: i32 = 3;
pub const CONTROL_AF_STATE_FOCUSED_LOCKED: i32 = 4;
pub const CONTROL_AF_STATE_NOT_FOCUSED_LOCKED: i32 = 5;
pub const CONTROL_AF_STATE_PASSIVE_UNFOCUSED: i32 = 6;

// android.control.awbState

pub const CONTROL_AWB_STATE_INACTIVE: i32 = 0;
pub const CONTROL_AWB_STATE_SEARCHING: i32 = 1;
pub const CONTROL_AWB_STATE_CONVERGED: i32 = 2;
pub const CONTROL_AWB_STATE_LOCKED: i32 = 3;

// android.flash.mode

/// Flash does not fire.
pub const FLASH_MODE_OFF: i32 = 0;
/// Flash fires once for this capture.
pub const FLASH_MODE_SINGLE: i32 = 1;
/// Flash is held on continuously.
pub const FLASH_MODE_TORCH: i32 = 2;

// android.flash.state

pub const FLASH_STATE_UNAVAILABLE: i32 = 0;
pub const FLASH_STATE_CHARGING: i32 = 1;
pub const FLASH_STATE_READY: i32 = 2;
pub const FLASH_STATE_FIRED: i32 = 3;

// android.noiseReduction.mode

/// No noise filtering.
pub const NOISE_REDUCTION_MODE_OFF: i32 = 0;
/// Filtering that must not slow down the frame rate.
pub const NOISE_REDUCTION_MODE_FAST: i32 = 1;
/// Highest-quality filtering, frame rate may drop.
pub const NOISE_REDUCTION_MODE_HIGH_QUALITY: i32 = 2;

// android.statistics.faceDetectMode

pub const STATISTICS_FACE_DETECT_MODE_OFF: i32 = 0;
/// Face rectangles and confidences only.
pub const STATISTICS_FACE_DETECT_MODE_SIMPLE: i32 = 1;
/// Rectangles, confidences, landmarks, and face ids.
pub const STATISTICS_FACE_DETECT_MODE_FULL: i32 = 2;

// android.statistics.lensShadingMapMode

pub const STATISTICS_LENS_SHADING_MAP_MODE_OFF: i32 = 0;
pub const STATISTICS_LENS_SHADING_MAP_MODE_ON: i32 = 1;

// android.statistics.sceneFlicker

pub const STATISTICS_SCENE_FLICKER_NONE: i32 = 0;
pub const STATISTICS_SCENE_FLICKER_50HZ: i32 = 1;
pub const STATISTICS_SCENE_FLICKER_60HZ: i32 = 2;

// android.tonemap.mode

/// Use the client-supplied tonemap curve.
pub const TONEMAP_MODE_CONTRAST_CURVE: i32 = 0;
/// Device-chosen curve, must not slow down the frame rate.
pub const TONEMAP_MODE_FAST: i32 = 1;
/// Highest-quality curve, frame rate may drop.
pub const TONEMAP_MODE_HIGH_QUALITY: i32 = 2;
