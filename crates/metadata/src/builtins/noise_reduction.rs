//! Noise reduction pipeline keys.

crate::metadata_key!(NOISE_REDUCTION_MODE, {
	name: "android.noiseReduction.mode",
	type: I32,
	section: Request,
	description: "Noise filtering mode applied to the capture",
});
