//! Tonemap curve keys.

crate::metadata_key!(TONEMAP_MODE, {
	name: "android.tonemap.mode",
	type: I32,
	section: Request,
	description: "How the tonemap curve for this capture is chosen",
});
