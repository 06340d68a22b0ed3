//! RGB565 color constants and packing.
//!
//! Colors are opaque 16-bit RGB565 scalars, transmitted on the bus
//! most-significant byte first. The palette matches the values the
//! panel was tuned with.

/// Pack 8-bit channel values into RGB565.
pub const fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

pub const WHITE: u16 = 0xFFFF;
pub const BLACK: u16 = 0x0000;
pub const RED: u16 = 0xF800;
pub const YELLOW: u16 = 0xFFE0;
pub const GRAY: u16 = 0x9CF3;
pub const ORANGE: u16 = 0xFD00;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_primaries() {
        assert_eq!(rgb565(0xFF, 0x00, 0x00), RED);
        assert_eq!(rgb565(0xFF, 0xFF, 0xFF), WHITE);
        assert_eq!(rgb565(0x00, 0x00, 0x00), BLACK);
        assert_eq!(rgb565(0xFF, 0xFF, 0x00), YELLOW);
    }
}
