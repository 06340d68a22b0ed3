//! Error types for the driver
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level
//!   bus communication errors

use crate::interface::DisplayInterface;

/// Column address space of the ST7789 RAM.
pub const MAX_COLUMNS: u16 = 240;

/// Row address space of the ST7789 RAM.
pub const MAX_ROWS: u16 = 320;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific hardware
/// error so callers can match on it.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO/bus timeout)
    Interface(I::Error),
    /// A pixel buffer does not cover the region it was asked to fill
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(_) => write!(f, "Interface error"),
            Error::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    MissingDimensions,
    /// Invalid dimensions provided
    InvalidDimensions {
        /// Logical width requested
        width: u16,
        /// Logical height requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::MissingDimensions => write!(f, "Dimensions must be specified"),
            BuilderError::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (RAM is {MAX_COLUMNS}x{MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
