//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Logical panel dimensions after rotation correction.
///
/// `(0,0)` is the top-left corner, `x` grows rightward, `y` grows
/// downward, regardless of how the glass is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions, rejecting empty panels.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel.
    pub fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

/// Mounting orientation of the glass relative to its native scan order.
///
/// Each variant fixes the memory-access-control byte sent during
/// bring-up and which axis the panel offset biases: the controller RAM
/// is wider than the visible glass, and the unused margin sits on the
/// column axis in portrait orientations and on the row axis in
/// landscape orientations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Native portrait scan order
    #[default]
    Portrait,
    /// Portrait, scanned bottom-up
    PortraitFlipped,
    /// Rotated a quarter turn
    Landscape,
    /// Rotated three quarter turns
    LandscapeFlipped,
}

impl Orientation {
    /// Memory-access-control byte for this orientation.
    pub const fn madctl(self) -> u8 {
        match self {
            Orientation::Portrait => 0x00,
            Orientation::PortraitFlipped => 0xC0,
            Orientation::Landscape => 0x70,
            Orientation::LandscapeFlipped => 0xA0,
        }
    }

    /// Whether the long RAM axis runs along the logical x axis.
    pub const fn is_landscape(self) -> bool {
        matches!(
            self,
            Orientation::Landscape | Orientation::LandscapeFlipped
        )
    }

    /// `(column_bias, row_bias)` applied to window bounds before they
    /// are sent to the controller.
    pub const fn window_bias(self, offset: u16) -> (u16, u16) {
        if self.is_landscape() {
            (0, offset)
        } else {
            (offset, 0)
        }
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a `Config`.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Logical dimensions
    pub dimensions: Dimensions,
    /// Mounting orientation
    pub orientation: Orientation,
    /// Bias added to window bounds on the orientation's short axis
    pub offset: u16,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use st7789::{Builder, Dimensions, Orientation};
///
/// let config = Builder::new()
///     .dimensions(Dimensions::new(320, 172).unwrap())
///     .orientation(Orientation::Landscape)
///     .offset(34)
///     .build()
///     .expect("valid configuration");
/// ```
pub struct Builder {
    dimensions: Option<Dimensions>,
    orientation: Orientation,
    offset: u16,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            dimensions: None,
            orientation: Orientation::Portrait,
            offset: 0,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for the common 172x320 glass, which is centered in the
    /// 240-column RAM and therefore biased by 34 on the short axis.
    pub fn panel_172x320(orientation: Orientation) -> Self {
        let dimensions = if orientation.is_landscape() {
            Dimensions {
                width: 320,
                height: 172,
            }
        } else {
            Dimensions {
                width: 172,
                height: 320,
            }
        };
        Builder {
            dimensions: Some(dimensions),
            orientation,
            offset: 34,
        }
    }

    /// Set logical dimensions (required)
    pub fn dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set mounting orientation
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the short-axis window bias in RAM pixels
    pub fn offset(mut self, offset: u16) -> Self {
        self.offset = offset;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not
    /// set, or `InvalidDimensions` if the window (dimensions plus
    /// offset) does not fit the controller RAM.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;

        // With the row/column exchange bit set (landscape), the column
        // address counter runs along the 320-long axis and the bias
        // moves to the row axis.
        let fits = if self.orientation.is_landscape() {
            dimensions.width <= MAX_ROWS && dimensions.height + self.offset <= MAX_COLUMNS
        } else {
            dimensions.width + self.offset <= MAX_COLUMNS && dimensions.height <= MAX_ROWS
        };
        if !fits {
            return Err(BuilderError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        Ok(Config {
            dimensions,
            orientation: self.orientation,
            offset: self.offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(Dimensions::new(0, 320).is_err());
        assert!(Dimensions::new(172, 0).is_err());
    }

    #[test]
    fn rejects_window_outside_ram() {
        // 240 columns of RAM cannot hold 220 + 34 bias
        let result = Builder::new()
            .dimensions(Dimensions::new(220, 320).unwrap())
            .offset(34)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn madctl_per_orientation() {
        assert_eq!(Orientation::Portrait.madctl(), 0x00);
        assert_eq!(Orientation::PortraitFlipped.madctl(), 0xC0);
        assert_eq!(Orientation::Landscape.madctl(), 0x70);
        assert_eq!(Orientation::LandscapeFlipped.madctl(), 0xA0);
    }

    #[test]
    fn bias_follows_short_axis() {
        assert_eq!(Orientation::Portrait.window_bias(34), (34, 0));
        assert_eq!(Orientation::PortraitFlipped.window_bias(34), (34, 0));
        assert_eq!(Orientation::Landscape.window_bias(34), (0, 34));
        assert_eq!(Orientation::LandscapeFlipped.window_bias(34), (0, 34));
    }

    #[test]
    fn preset_swaps_dimensions() {
        let portrait = Builder::panel_172x320(Orientation::Portrait)
            .build()
            .unwrap();
        assert_eq!(portrait.dimensions.width, 172);
        assert_eq!(portrait.dimensions.height, 320);

        let landscape = Builder::panel_172x320(Orientation::Landscape)
            .build()
            .unwrap();
        assert_eq!(landscape.dimensions.width, 320);
        assert_eq!(landscape.dimensions.height, 172);
    }
}
