// ST7789 command definitions

// Power and mode
pub const SLEEP_IN: u8 = 0x10; // Enter minimum power mode
pub const SLEEP_OUT: u8 = 0x11; // Exit sleep, booster on
pub const INVERSION_OFF: u8 = 0x20; // Disable display inversion
pub const INVERSION_ON: u8 = 0x21; // Enable display inversion
pub const DISPLAY_OFF: u8 = 0x28; // Blank the panel output
pub const DISPLAY_ON: u8 = 0x29; // Enable panel output

// Memory addressing
pub const COLUMN_ADDRESS_SET: u8 = 0x2A; // Window column bounds
pub const ROW_ADDRESS_SET: u8 = 0x2B; // Window row bounds
pub const MEMORY_WRITE: u8 = 0x2C; // Arm pixel-data burst
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36; // Scan order / orientation
pub const PIXEL_FORMAT: u8 = 0x3A; // Color depth (0x05 = 16bpp)

// Panel driving
pub const PORCH_CONTROL: u8 = 0xB2; // Front/back porch timing
pub const GATE_CONTROL: u8 = 0xB7; // Gate voltages
pub const VCOM_SETTING: u8 = 0xBB; // VCOM level
pub const LCM_CONTROL: u8 = 0xC0; // LCM inversion/scan control
pub const VDV_VRH_ENABLE: u8 = 0xC2; // Enable VDV/VRH register write
pub const VRH_SET: u8 = 0xC3; // VRH voltage
pub const FRAME_RATE_CONTROL: u8 = 0xC6; // Frame rate in normal mode
pub const POWER_CONTROL_1: u8 = 0xD0; // AVDD/AVCL/VDS levels
pub const GATE_SLEEP_CONTROL: u8 = 0xD6; // Gate output level in sleep-in

// Gamma correction
pub const POSITIVE_GAMMA: u8 = 0xE0; // Positive voltage gamma curve
pub const NEGATIVE_GAMMA: u8 = 0xE1; // Negative voltage gamma curve
