//! embedded-graphics integration, behind the `graphics` feature.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions as _, OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::prelude::IntoStorage;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;

use crate::display::{Display, Region};
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<T>(&mut self, pixels: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (w, h) = (self.width() as i32, self.height() as i32);
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && point.x < w && point.y < h {
                self.draw_point(point.x as u16, point.y as u16, color.into_storage())?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        let Some(bottom_right) = clipped.bottom_right() else {
            return Ok(());
        };
        self.fill_region(
            Region::new(
                clipped.top_left.x as u16,
                clipped.top_left.y as u16,
                bottom_right.x as u16,
                bottom_right.y as u16,
            ),
            color.into_storage(),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Display::clear(self, color.into_storage())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_core::geometry::{Dimensions as _, Point};
    use embedded_graphics_core::pixelcolor::Rgb565;
    use embedded_graphics_core::prelude::*;
    use embedded_graphics_core::primitives::Rectangle;

    use crate::config::Builder;
    use crate::display::Display;
    use crate::mock::MockPanel;
    use crate::Dimensions;

    fn display() -> Display<MockPanel> {
        let config = Builder::new()
            .dimensions(Dimensions::new(240, 320).unwrap())
            .build()
            .unwrap();
        Display::new(MockPanel::new(), config)
    }

    #[test]
    fn size_reports_the_configured_dimensions() {
        let d = display();
        assert_eq!(d.bounding_box().size, Size::new(240, 320));
    }

    #[test]
    fn draw_iter_clips_out_of_range_points() {
        let mut d = display();
        d.draw_iter([
            Pixel(Point::new(3, 4), Rgb565::new(31, 0, 0)),
            Pixel(Point::new(-1, 4), Rgb565::new(31, 0, 0)),
            Pixel(Point::new(3, 500), Rgb565::new(31, 0, 0)),
        ])
        .unwrap();
        let panel = d.release();
        assert_eq!(panel.write_count(), 1);
        assert_eq!(panel.pixel(3, 4), Some(0xF800));
    }

    #[test]
    fn fill_solid_maps_to_a_window_fill() {
        let mut d = display();
        d.fill_solid(
            &Rectangle::new(Point::new(2, 3), Size::new(5, 4)),
            Rgb565::new(0, 63, 0),
        )
        .unwrap();
        let panel = d.release();
        assert_eq!(panel.write_count(), 20);
        assert_eq!(panel.pixel(2, 3), Some(0x07E0));
        assert_eq!(panel.pixel(6, 6), Some(0x07E0));
    }
}
