//! Indicator LED keys. Not part of the public enumeration surface.

crate::metadata_key!(LED_TRANSMIT, {
	name: "android.led.transmit",
	type: Byte,
	section: Request,
	description: "Whether the transmit LED is on while the camera streams",
	visibility: Hidden,
});

crate::metadata_key!(LED_AVAILABLE_LEDS, {
	name: "android.led.availableLeds",
	type: Byte,
	section: Characteristics,
	description: "Which LEDs are available on this device",
	visibility: Hidden,
});
