//! Statistics generation keys.

crate::metadata_key!(STATISTICS_FACE_DETECT_MODE, {
	name: "android.statistics.faceDetectMode",
	type: I32,
	section: Request,
	description: "Face detection unit mode",
});

crate::metadata_key!(STATISTICS_LENS_SHADING_MAP_MODE, {
	name: "android.statistics.lensShadingMapMode",
	type: I32,
	section: Request,
	description: "Whether the lens shading map is attached to results",
});

crate::metadata_key!(STATISTICS_SCENE_FLICKER, {
	name: "android.statistics.sceneFlicker",
	type: I32,
	section: Result,
	description: "Illuminant flicker the pipeline detected in this frame",
});
