//! Image sensor keys.

crate::metadata_key!(SENSOR_BASE_GAIN_FACTOR, {
	name: "android.sensor.baseGainFactor",
	type: Rational,
	section: Characteristics,
	description: "Gain factor from electrons to raw units at unity gain",
});

crate::metadata_key!(SENSOR_EXPOSURE_TIME, {
	name: "android.sensor.exposureTime",
	type: I64,
	section: Request,
	description: "Exposure duration in nanoseconds",
});

crate::metadata_key!(SENSOR_FRAME_DURATION, {
	name: "android.sensor.frameDuration",
	type: I64,
	section: Request,
	description: "Minimum frame duration in nanoseconds",
});

crate::metadata_key!(SENSOR_SENSITIVITY, {
	name: "android.sensor.sensitivity",
	type: I32,
	section: Request,
	description: "Analog plus digital gain, in ISO arithmetic units",
});

crate::metadata_key!(SENSOR_TIMESTAMP, {
	name: "android.sensor.timestamp",
	type: I64,
	section: Result,
	description: "Start-of-exposure timestamp in nanoseconds",
});
