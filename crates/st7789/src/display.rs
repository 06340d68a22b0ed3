//! Core display operations: addressing window, pixel streaming,
//! controller bring-up and power control.

use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;

use crate::command::*;
use crate::config::{Config, Orientation};
use crate::error::Error;
use crate::interface::{DisplayInterface, MAX_FILL_CHUNK};

/// Largest byte count one bulk blit chunk may carry.
///
/// One less than the fill limit so a chunk always carries whole
/// big-endian pixel words.
pub const MAX_BLIT_CHUNK: usize = 65534;

/// Positive voltage gamma curve, tuned for the 172x320 glass.
const GAMMA_POSITIVE: [u8; 14] = [
    0xF0, 0x04, 0x08, 0x0A, 0x0A, 0x05, 0x25, 0x33, 0x3C, 0x24, 0x0E, 0x0F, 0x27, 0x2F,
];

/// Negative voltage gamma curve.
const GAMMA_NEGATIVE: [u8; 14] = [
    0xF0, 0x02, 0x06, 0x06, 0x04, 0x22, 0x25, 0x32, 0x3B, 0x3A, 0x15, 0x17, 0x2D, 0x37,
];

/// Rectangular addressing window in logical panel coordinates.
///
/// Bounds are inclusive and normalized at construction, so
/// `x_start <= x_end` and `y_start <= y_end` always hold. Regions are
/// built per draw call and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x_start: u16,
    pub y_start: u16,
    pub x_end: u16,
    pub y_end: u16,
}

impl Region {
    /// Create a region from two corners, in any order.
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self {
            x_start: x0.min(x1),
            y_start: y0.min(y1),
            x_end: x0.max(x1),
            y_end: y0.max(y1),
        }
    }

    /// Single-pixel region.
    pub fn pixel(x: u16, y: u16) -> Self {
        Self {
            x_start: x,
            y_start: y,
            x_end: x,
            y_end: y,
        }
    }

    /// Width in pixels (at least 1).
    pub fn width(&self) -> u32 {
        (self.x_end - self.x_start) as u32 + 1
    }

    /// Height in pixels (at least 1).
    pub fn height(&self) -> u32 {
        (self.y_end - self.y_start) as u32 + 1
    }

    /// Number of pixels the window will accept after a memory-write.
    pub fn pixel_count(&self) -> u32 {
        self.width() * self.height()
    }
}

/// Core display driver for the ST7789
///
/// All drawing resolves to an addressing window followed by a pixel
/// burst. The driver assumes a single logical writer; nothing here
/// arbitrates concurrent access to the bus or the window state.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Release the underlying interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Logical panel width in pixels
    pub fn width(&self) -> u16 {
        self.config.dimensions.width
    }

    /// Logical panel height in pixels
    pub fn height(&self) -> u16 {
        self.config.dimensions.height
    }

    fn send_command(&mut self, command: u8) -> Result<(), Error<I>> {
        self.interface.send_command(command).map_err(Error::Interface)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Error<I>> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    fn send_data16(&mut self, word: u16) -> Result<(), Error<I>> {
        self.interface.send_data16(word).map_err(Error::Interface)
    }

    /// Hardware-reset the controller and run the full bring-up
    /// sequence, leaving the panel on and cleared to `color`.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D, color: u16) -> Result<(), Error<I>> {
        log::debug!("st7789: reset and bring-up");
        self.interface.reset(delay);
        delay.delay_ms(120);

        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(120);

        self.send_command(MEMORY_ACCESS_CONTROL)?;
        self.send_data(&[self.config.orientation.madctl()])?;

        // 16 bits per pixel
        self.send_command(PIXEL_FORMAT)?;
        self.send_data(&[0x05])?;

        self.send_command(PORCH_CONTROL)?;
        self.send_data(&[0x0C, 0x0C, 0x00, 0x33, 0x33])?;

        self.send_command(GATE_CONTROL)?;
        self.send_data(&[0x00])?;

        self.send_command(VCOM_SETTING)?;
        self.send_data(&[0x34])?;

        self.send_command(LCM_CONTROL)?;
        self.send_data(&[0x2C])?;

        self.send_command(VDV_VRH_ENABLE)?;
        self.send_data(&[0x01])?;

        self.send_command(VRH_SET)?;
        self.send_data(&[0x09])?;

        self.send_command(FRAME_RATE_CONTROL)?;
        self.send_data(&[0x19])?;

        self.send_command(POWER_CONTROL_1)?;
        self.send_data(&[0xA7])?;
        self.send_command(POWER_CONTROL_1)?;
        self.send_data(&[0xA4, 0xA1])?;

        // Gate output to GND during sleep-in
        self.send_command(GATE_SLEEP_CONTROL)?;
        self.send_data(&[0xA1])?;

        self.send_command(POSITIVE_GAMMA)?;
        self.send_data(&GAMMA_POSITIVE)?;
        self.send_command(NEGATIVE_GAMMA)?;
        self.send_data(&GAMMA_NEGATIVE)?;

        self.send_command(INVERSION_ON)?;
        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(120);

        self.clear(color)?;
        self.send_command(DISPLAY_ON)?;
        Ok(())
    }

    /// Program the controller's write window and arm it for a pixel
    /// burst of `region.pixel_count()` words, row-major.
    ///
    /// Column and row bounds are biased by the configured panel offset
    /// on the axis the orientation selects.
    pub fn set_window(&mut self, region: Region) -> Result<(), Error<I>> {
        let (col_bias, row_bias) = self
            .config
            .orientation
            .window_bias(self.config.offset);

        self.send_command(COLUMN_ADDRESS_SET)?;
        self.send_data16(region.x_start + col_bias)?;
        self.send_data16(region.x_end + col_bias)?;

        self.send_command(ROW_ADDRESS_SET)?;
        self.send_data16(region.y_start + row_bias)?;
        self.send_data16(region.y_end + row_bias)?;

        self.send_command(MEMORY_WRITE)
    }

    /// Single-pixel window.
    pub fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), Error<I>> {
        self.set_window(Region::pixel(x, y))
    }

    /// Write one pixel.
    pub fn draw_point(&mut self, x: u16, y: u16, color: u16) -> Result<(), Error<I>> {
        self.set_cursor(x, y)?;
        self.send_data16(color)
    }

    /// Fill a window with one color through the bulk engine.
    ///
    /// The transfer is synchronous: the call returns once every chunk
    /// (at most 65535 words each) has completed.
    pub fn fill_region(&mut self, region: Region, color: u16) -> Result<(), Error<I>> {
        self.set_window(region)?;

        let mut remaining = region.pixel_count();
        while remaining > 0 {
            let chunk = remaining.min(MAX_FILL_CHUNK as u32) as u16;
            self.interface
                .fill_words(color, chunk)
                .map_err(Error::Interface)?;
            remaining -= chunk as u32;
        }
        Ok(())
    }

    /// Stream a caller-supplied big-endian RGB565 buffer into a
    /// window, advancing through the buffer in chunks of at most
    /// [`MAX_BLIT_CHUNK`] bytes.
    pub fn blit_region(&mut self, region: Region, pixels: &[u8]) -> Result<(), Error<I>> {
        let required = region.pixel_count() as usize * 2;
        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: pixels.len(),
            });
        }

        self.set_window(region)?;
        for chunk in pixels[..required].chunks(MAX_BLIT_CHUNK) {
            self.send_data(chunk)?;
        }
        Ok(())
    }

    /// Fill the whole panel.
    pub fn clear(&mut self, color: u16) -> Result<(), Error<I>> {
        let region = Region::new(0, 0, self.width() - 1, self.height() - 1);
        self.fill_region(region, color)
    }

    /// Change the mounting orientation at runtime.
    ///
    /// Re-sends the memory-access-control byte and swaps the logical
    /// dimensions when the new orientation changes axis class.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error<I>> {
        if orientation.is_landscape() != self.config.orientation.is_landscape() {
            core::mem::swap(
                &mut self.config.dimensions.width,
                &mut self.config.dimensions.height,
            );
        }
        self.config.orientation = orientation;
        self.send_command(MEMORY_ACCESS_CONTROL)?;
        self.send_data(&[orientation.madctl()])
    }

    /// Enter minimum-power mode.
    pub fn sleep_in<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.send_command(SLEEP_IN)?;
        delay.delay_ms(120);
        Ok(())
    }

    /// Leave minimum-power mode.
    pub fn sleep_out<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(120);
        Ok(())
    }

    /// Enable panel output.
    pub fn display_on(&mut self) -> Result<(), Error<I>> {
        self.send_command(DISPLAY_ON)
    }

    /// Blank panel output without losing RAM contents.
    pub fn display_off(&mut self) -> Result<(), Error<I>> {
        self.send_command(DISPLAY_OFF)
    }

    /// Enable or disable display inversion.
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error<I>> {
        self.send_command(if inverted { INVERSION_ON } else { INVERSION_OFF })
    }

    /// Set backlight intensity, 0..=100 percent, through any
    /// variable-duty output.
    pub fn set_backlight<P: SetDutyCycle>(
        &mut self,
        backlight: &mut P,
        percent: u8,
    ) -> Result<(), P::Error> {
        backlight.set_duty_cycle_percent(percent.min(100))
    }
}
