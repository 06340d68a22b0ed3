//! Driver for ST7789-based TFT panels over SPI.
//!
//! The ST7789 has no framebuffer on the host side: every draw call is
//! translated into controller transactions (an addressing window
//! followed by a pixel burst). The crate is split the same way the
//! hardware is layered:
//!
//! - [`interface`] — command/data framing on the bus, one transaction
//!   per call, plus the bulk word-fill primitive an offload engine can
//!   accelerate.
//! - [`config`] — panel dimensions, orientation and column/row offsets.
//! - [`display`] — addressing window, pixel streaming, controller
//!   bring-up and power control.
//! - [`raster`] — vector primitives expressed as point writes and
//!   window fills.
//! - [`font`] — packed bitmap fonts and glyph rendering.
//!
//! With the `graphics` feature (default) the display also implements
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) for
//! `Rgb565`, so it can be driven by the embedded-graphics ecosystem.
//!
//! ```rust,ignore
//! use st7789::{Builder, Display, Interface, Orientation};
//!
//! let interface = Interface::new(spi_device, dc_pin, rst_pin);
//! let config = Builder::panel_172x320(Orientation::Landscape).build()?;
//! let mut display = Display::new(interface, config);
//! display.init(&mut delay, st7789::color::BLACK)?;
//! display.draw_line(10, 10, 120, 80, st7789::color::WHITE)?;
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

pub mod color;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod interface;
pub mod raster;

#[cfg(feature = "graphics")]
mod graphics;

#[cfg(any(test, feature = "std"))]
pub mod mock;

pub use config::{Builder, Config, Dimensions, Orientation};
pub use display::{Display, Region};
pub use error::{BuilderError, Error};
pub use font::{Font, FONT_8X16};
pub use interface::{DisplayInterface, Interface, InterfaceError};
