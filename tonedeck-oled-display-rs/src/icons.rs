//! Packed pixel data for the icon catalog.
//!
//! One bit per pixel, row-major, most significant bit first, each row
//! padded to a whole byte (`ceil(width / 8)` bytes per row). A set bit is
//! a lit pixel. The byte arrays are produced by the asset tooling from the
//! artwork; regenerate rather than hand-edit.

/// Digital input selector, 32×20: square wave in a rounded frame.
pub const INPUT_SELECT_DIGITAL_BITS: [u8; 80] = [
    0x3f, 0xff, 0xff, 0xfc,
    0x40, 0x00, 0x00, 0x02,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x3f, 0x83, 0xf1,
    0x80, 0x20, 0x82, 0x01,
    0x80, 0x20, 0x82, 0x01,
    0x80, 0x20, 0x82, 0x01,
    0x80, 0x20, 0x82, 0x01,
    0x80, 0x20, 0x82, 0x01,
    0x80, 0x20, 0x82, 0x01,
    0x80, 0x20, 0x82, 0x01,
    0x80, 0x20, 0x82, 0x01,
    0x8f, 0xe0, 0xfe, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x40, 0x00, 0x00, 0x02,
    0x3f, 0xff, 0xff, 0xfc,
];

/// Analog input selector, 32×20: sine wave in a rounded frame.
pub const INPUT_SELECT_ANALOG_BITS: [u8; 80] = [
    0x3f, 0xff, 0xff, 0xfc,
    0x40, 0x00, 0x00, 0x02,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x81, 0x00, 0x10, 0x01,
    0x82, 0x80, 0x28, 0x01,
    0x84, 0x40, 0x44, 0x01,
    0x84, 0x40, 0x42, 0x01,
    0x88, 0x20, 0x82, 0x01,
    0x88, 0x20, 0x82, 0x01,
    0x80, 0x20, 0x81, 0x01,
    0x80, 0x11, 0x01, 0x11,
    0x80, 0x0a, 0x00, 0xa1,
    0x80, 0x04, 0x00, 0x41,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x80, 0x00, 0x00, 0x01,
    0x40, 0x00, 0x00, 0x02,
    0x3f, 0xff, 0xff, 0xfc,
];

/// Speaker muted, 32×20: speaker cone with a cross.
pub const SPEAKER_MUTED_BITS: [u8; 80] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x02, 0x00, 0x00,
    0x00, 0x06, 0x00, 0x00,
    0x00, 0x0e, 0x00, 0x00,
    0x00, 0x1e, 0x00, 0x00,
    0x00, 0x3e, 0x18, 0x0c,
    0x00, 0x7e, 0x0c, 0x18,
    0x3f, 0xfe, 0x06, 0x30,
    0x3f, 0xfe, 0x03, 0x60,
    0x3f, 0xfe, 0x01, 0xc0,
    0x3f, 0xfe, 0x01, 0xc0,
    0x3f, 0xfe, 0x03, 0x60,
    0x3f, 0xfe, 0x06, 0x30,
    0x00, 0x7e, 0x0c, 0x18,
    0x00, 0x3e, 0x18, 0x0c,
    0x00, 0x1e, 0x00, 0x00,
    0x00, 0x0e, 0x00, 0x00,
    0x00, 0x06, 0x00, 0x00,
    0x00, 0x02, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Speaker playing, 32×20: speaker cone with three sound arcs.
pub const SPEAKER_PLAYING_BITS: [u8; 80] = [
    0x00, 0x00, 0x01, 0x80,
    0x00, 0x02, 0x00, 0x40,
    0x00, 0x06, 0x00, 0x60,
    0x00, 0x0e, 0x06, 0x20,
    0x00, 0x1e, 0x02, 0x10,
    0x00, 0x3e, 0x01, 0x10,
    0x00, 0x7e, 0x31, 0x18,
    0x3f, 0xfe, 0x18, 0x88,
    0x3f, 0xfe, 0x08, 0x88,
    0x3f, 0xfe, 0x08, 0x88,
    0x3f, 0xfe, 0x08, 0x88,
    0x3f, 0xfe, 0x08, 0x88,
    0x3f, 0xfe, 0x18, 0x88,
    0x00, 0x7e, 0x31, 0x18,
    0x00, 0x3e, 0x01, 0x10,
    0x00, 0x1e, 0x02, 0x10,
    0x00, 0x0e, 0x06, 0x20,
    0x00, 0x06, 0x00, 0x60,
    0x00, 0x02, 0x00, 0x40,
    0x00, 0x00, 0x01, 0x80,
];

/// Alarm clock, 32×37: twin-bell clock face.
pub const ALARM_BITS: [u8; 148] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x1f, 0x00, 0x00, 0xf8,
    0x3f, 0x87, 0xe1, 0xfc,
    0x7f, 0xc1, 0x83, 0xfe,
    0xff, 0xe1, 0x87, 0xff,
    0xff, 0xe1, 0x87, 0xff,
    0xff, 0xe0, 0x07, 0xff,
    0xff, 0xe0, 0x07, 0xff,
    0xff, 0x9f, 0xf9, 0xff,
    0x00, 0x7f, 0xfe, 0x00,
    0x00, 0xf0, 0x0f, 0x00,
    0x01, 0xc1, 0x83, 0x80,
    0x03, 0x81, 0x81, 0xc0,
    0x07, 0x01, 0x80, 0xe0,
    0x06, 0x01, 0x80, 0x60,
    0x0e, 0x01, 0x80, 0x70,
    0x0c, 0x01, 0x80, 0x30,
    0x0c, 0x01, 0x80, 0x30,
    0x0c, 0x01, 0x80, 0x30,
    0x0c, 0x01, 0xfe, 0x30,
    0x0c, 0x01, 0xfe, 0x30,
    0x0c, 0x00, 0x00, 0x30,
    0x0c, 0x00, 0x00, 0x30,
    0x0c, 0x00, 0x00, 0x30,
    0x0e, 0x00, 0x00, 0x70,
    0x06, 0x00, 0x00, 0x60,
    0x07, 0x00, 0x00, 0xe0,
    0x03, 0x80, 0x01, 0xc0,
    0x01, 0xc0, 0x03, 0x80,
    0x00, 0xf0, 0x0f, 0x00,
    0x00, 0x7f, 0xfe, 0x00,
    0x00, 0xdf, 0xf9, 0x80,
    0x01, 0x80, 0x00, 0xc0,
    0x03, 0x00, 0x00, 0x60,
    0x06, 0x00, 0x00, 0x30,
    0x0c, 0x00, 0x00, 0x18,
];

/// Boot logo, 96×32: wordmark over a decaying waveform.
pub const LOGO_BITS: [u8; 384] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x7f, 0xe1, 0xf8, 0x60, 0x67, 0xfe,
    0x7f, 0x87, 0xfe, 0x1f, 0x86, 0x06,
    0x7f, 0xe1, 0xf8, 0x60, 0x67, 0xfe,
    0x7f, 0x87, 0xfe, 0x1f, 0x86, 0x06,
    0x06, 0x06, 0x06, 0x78, 0x66, 0x00,
    0x60, 0x66, 0x00, 0x60, 0x66, 0x18,
    0x06, 0x06, 0x06, 0x78, 0x66, 0x00,
    0x60, 0x66, 0x00, 0x60, 0x66, 0x18,
    0x06, 0x06, 0x06, 0x66, 0x66, 0x00,
    0x60, 0x66, 0x00, 0x60, 0x06, 0x60,
    0x06, 0x06, 0x06, 0x66, 0x66, 0x00,
    0x60, 0x66, 0x00, 0x60, 0x06, 0x60,
    0x06, 0x06, 0x06, 0x61, 0xe7, 0xf8,
    0x60, 0x67, 0xf8, 0x60, 0x07, 0x80,
    0x06, 0x06, 0x06, 0x61, 0xe7, 0xf8,
    0x60, 0x67, 0xf8, 0x60, 0x07, 0x80,
    0x06, 0x06, 0x06, 0x60, 0x66, 0x00,
    0x60, 0x66, 0x00, 0x60, 0x06, 0x60,
    0x06, 0x06, 0x06, 0x60, 0x66, 0x00,
    0x60, 0x66, 0x00, 0x60, 0x06, 0x60,
    0x06, 0x06, 0x06, 0x60, 0x66, 0x00,
    0x60, 0x66, 0x00, 0x60, 0x66, 0x18,
    0x06, 0x06, 0x06, 0x60, 0x66, 0x00,
    0x60, 0x66, 0x00, 0x60, 0x66, 0x18,
    0x06, 0x01, 0xf8, 0x60, 0x67, 0xfe,
    0x7f, 0x87, 0xfe, 0x1f, 0x86, 0x06,
    0x06, 0x01, 0xf8, 0x60, 0x67, 0xfe,
    0x7f, 0x87, 0xfe, 0x1f, 0x86, 0x06,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x08, 0x01, 0x80,
    0x38, 0x03, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x14, 0x02, 0x40,
    0x48, 0x04, 0x80, 0x60, 0x00, 0x00,
    0x00, 0x01, 0xe0, 0x22, 0x04, 0x20,
    0x44, 0x08, 0x80, 0x90, 0x04, 0x00,
    0x3f, 0x02, 0x10, 0x42, 0x08, 0x20,
    0x82, 0x08, 0x40, 0x88, 0x1b, 0x84,
    0x00, 0xcc, 0x08, 0x81, 0x08, 0x20,
    0x82, 0x10, 0x21, 0x04, 0x20, 0x78,
    0x00, 0x30, 0x04, 0x80, 0x88, 0x10,
    0x82, 0x20, 0x22, 0x03, 0xc0, 0x00,
    0x00, 0x00, 0x03, 0x00, 0x90, 0x09,
    0x01, 0x20, 0x14, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x60, 0x0e,
    0x00, 0xc0, 0x08, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
