//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the
//! [`Interface`] struct for communicating with the ST7789 controller
//! over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7789 requires:
//! - SPI bus (MOSI + SCK), device-select owned by the SPI device
//! - 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command)
//!   - **RST**: Reset (output, active low)
//!
//! Every call is one complete bus transaction: the device is selected,
//! the mode line is set, the payload is clocked out, and the device is
//! deselected. The mode line is left in the data state afterward so
//! back-to-back data bursts need not touch it.

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

/// Largest number of 16-bit words one bulk-fill chunk may carry.
///
/// Offload engines program the transfer length into a 16-bit register,
/// so a chunk can never exceed 65535 units.
pub const MAX_FILL_CHUNK: u16 = u16::MAX;

/// Trait for hardware interface to the ST7789 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits, or
/// with a platform-specific implementation that hands bursts to an
/// offload (DMA) engine.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting. Implementations
    /// that poll hardware flags must bound the wait and surface a
    /// stalled bus as an error rather than spinning forever.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC low (command mode)
    /// 2. Send the command byte over SPI
    /// 3. Return DC to the data state
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send data bytes to the controller
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Send one 16-bit data word, most-significant byte first
    fn send_data16(&mut self, word: u16) -> Result<(), Self::Error>;

    /// Stream `count` copies of one 16-bit word as a single chunk
    ///
    /// This is the repeated-fill primitive behind
    /// [`Display::fill_region`](crate::display::Display::fill_region).
    /// An offload-backed implementation switches the bus to 16-bit
    /// word mode, points the engine's source at the one word, arms the
    /// channel, blocks until the completion flag (with a bounded
    /// wait), clears completion/half/error flags, disarms the channel
    /// and restores 8-bit mode. The portable implementation simply
    /// writes the big-endian word `count` times.
    fn fill_words(&mut self, word: u16, count: u16) -> Result<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The reset line is pulsed low for 50 ms between two 50 ms high
    /// periods, after which the controller is in its power-on state.
    fn reset<D: DelayNs>(&mut self, delay: &mut D);
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// A bus-ready or transfer-complete flag never asserted
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Spi(e) => write!(f, "SPI error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
            InterfaceError::Timeout => write!(f, "Timeout waiting for bus"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for the ST7789
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO
/// traits. Device-select framing is delegated to the [`SpiDevice`];
/// the busy/ready handshake of the underlying bus lives inside the
/// `SpiDevice` implementation, which is where a stalled bus becomes a
/// transport error instead of an unbounded spin.
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        // Leave the mode line in the data state for following bursts.
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data16(&mut self, word: u16) -> Result<(), Self::Error> {
        self.send_data(&word.to_be_bytes())
    }

    fn fill_words(&mut self, word: u16, count: u16) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;

        let [hi, lo] = word.to_be_bytes();
        let mut chunk = [0u8; 64];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        let mut remaining = count as usize * 2;
        while remaining > 0 {
            let len = remaining.min(chunk.len());
            self.spi.write(&chunk[..len]).map_err(InterfaceError::Spi)?;
            remaining -= len;
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: HIGH -> 50ms -> LOW -> 50ms -> HIGH -> 50ms
        let _ = self.rst.set_high();
        delay.delay_ms(50);
        let _ = self.rst.set_low();
        delay.delay_ms(50);
        let _ = self.rst.set_high();
        delay.delay_ms(50);
    }
}
