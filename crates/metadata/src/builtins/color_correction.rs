//! Color correction pipeline keys.

crate::metadata_key!(COLOR_CORRECTION_MODE, {
	name: "android.colorCorrection.mode",
	type: I32,
	section: Request,
	description: "How the color mapping from sensor RGB to output RGB is chosen",
});
