//! Flash unit keys.

crate::metadata_key!(FLASH_INFO_AVAILABLE, {
	name: "android.flash.info.available",
	type: Byte,
	section: Characteristics,
	description: "Whether a flash unit is available on this device",
});

crate::metadata_key!(FLASH_MODE, {
	name: "android.flash.mode",
	type: I32,
	section: Request,
	description: "Flash firing mode when auto-exposure is not in charge of it",
});

crate::metadata_key!(FLASH_STATE, {
	name: "android.flash.state",
	type: I32,
	section: Result,
	description: "Current flash unit state",
});
