//! Device color palette, RGB565.
//!
//! The muted variants are tuned for the panel's gamma rather than
//! being pure primaries; readouts use the `*_UI` colors so they sit
//! comfortably against [`BACKGROUND`].

/// Screen background.
pub const BACKGROUND: u16 = st7789::color::BLACK;

/// Primary readout text.
pub const TEXT: u16 = st7789::color::WHITE;

/// Dim chrome: separators, inactive labels, bar troughs.
pub const GRAY_UI: u16 = 0x2965;

/// Alert readings (over-current, over-temperature).
pub const RED_UI: u16 = 0xF227;

/// Warning readings.
pub const YELLOW_UI: u16 = 0xFEA9;

/// Voltage readouts.
pub const BLUE_UI: u16 = 0x7D1F;

/// Secondary voltage accents.
pub const BLUE_UI_2: u16 = 0x055E;

/// Nominal / in-range readings.
pub const GREEN_UI: u16 = 0x5EE7;

/// Accent for selections.
pub const PINK: u16 = 0xFEDB;

/// Accent for headers.
pub const SKYBLUE: u16 = 0x07FE;
