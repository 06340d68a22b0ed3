//! Incremental progress bar.
//!
//! The bar never repaints its full extent: each update draws only the
//! rectangle between the previous fill length and the new one, in the
//! foreground color when growing and the background color when
//! shrinking.

use st7789::{Display, DisplayInterface, Error};

/// Horizontal progress bar with a remembered fill length.
///
/// Invariant: `0 <= prev_len <= max_len`.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    x: u16,
    y: u16,
    max_len: u16,
    height: u16,
    min_val: f32,
    max_val: f32,
    fg: u16,
    bg: u16,
    prev_len: u16,
}

impl ProgressBar {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: u16,
        y: u16,
        max_len: u16,
        height: u16,
        min_val: f32,
        max_val: f32,
        fg: u16,
        bg: u16,
    ) -> Self {
        Self {
            x,
            y,
            max_len,
            height,
            min_val,
            max_val,
            fg,
            bg,
            prev_len: 0,
        }
    }

    /// Forgets the drawn state, e.g. after the screen was cleared.
    pub fn reset(&mut self) {
        self.prev_len = 0;
    }

    /// Maps `value` into the configured range, clamps, rounds to the
    /// nearest pixel and draws the delta. Unchanged length draws
    /// nothing.
    pub fn update<I>(&mut self, display: &mut Display<I>, value: f32) -> Result<(), Error<I>>
    where
        I: DisplayInterface,
    {
        let span = self.max_val - self.min_val;
        let ratio = if span == 0.0 {
            0.0
        } else {
            ((value - self.min_val) / span).clamp(0.0, 1.0)
        };
        let new_len = (ratio * self.max_len as f32 + 0.5) as u16;

        if new_len == self.prev_len {
            return Ok(());
        }
        if new_len > self.prev_len {
            display.fill_rect(
                self.x + self.prev_len,
                self.y,
                new_len - self.prev_len,
                self.height,
                self.fg,
            )?;
        } else {
            display.fill_rect(
                self.x + new_len,
                self.y,
                self.prev_len - new_len,
                self.height,
                self.bg,
            )?;
        }
        self.prev_len = new_len;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use st7789::mock::MockPanel;
    use st7789::{Builder, Dimensions, Display};

    const FG: u16 = 0xF800;
    const BG: u16 = 0x0000;

    fn display() -> Display<MockPanel> {
        let config = Builder::new()
            .dimensions(Dimensions::new(240, 320).unwrap())
            .build()
            .unwrap();
        Display::new(MockPanel::new(), config)
    }

    fn bar() -> ProgressBar {
        ProgressBar::new(10, 20, 100, 5, 0.0, 100.0, FG, BG)
    }

    #[test]
    fn first_update_draws_the_filled_portion() {
        let mut d = display();
        let mut pb = bar();
        pb.update(&mut d, 50.0).unwrap();
        let panel = d.release();

        assert_eq!(panel.write_count(), 50 * 5);
        assert_eq!(panel.pixel(10, 20), Some(FG));
        assert_eq!(panel.pixel(59, 24), Some(FG));
        assert_eq!(panel.pixel(60, 20), None);
    }

    #[test]
    fn unchanged_value_draws_nothing() {
        let mut d = display();
        let mut pb = bar();
        pb.update(&mut d, 50.0).unwrap();
        let painted = 50 * 5;

        pb.update(&mut d, 50.0).unwrap();
        // Rounding maps 50.2 to the same pixel length.
        pb.update(&mut d, 50.2).unwrap();
        assert_eq!(d.release().write_count(), painted);
    }

    #[test]
    fn growth_only_paints_the_delta() {
        let mut d = display();
        let mut pb = bar();
        pb.update(&mut d, 30.0).unwrap();
        pb.update(&mut d, 60.0).unwrap();
        let panel = d.release();

        // 30 columns, then 30 more.
        assert_eq!(panel.write_count(), 60 * 5);
        assert_eq!(panel.pixel(69, 20), Some(FG));
    }

    #[test]
    fn shrink_paints_the_tail_in_background() {
        let mut d = display();
        let mut pb = bar();
        pb.update(&mut d, 60.0).unwrap();
        pb.update(&mut d, 30.0).unwrap();
        let panel = d.release();

        assert_eq!(panel.pixel(39, 20), Some(FG));
        assert_eq!(panel.pixel(40, 20), Some(BG));
        assert_eq!(panel.pixel(69, 24), Some(BG));
    }

    #[test]
    fn values_clamp_to_the_configured_range() {
        let mut d = display();
        let mut pb = bar();
        pb.update(&mut d, 250.0).unwrap();
        assert_eq!(d.release().write_count(), 100 * 5);

        let mut d = display();
        let mut pb = bar();
        pb.update(&mut d, 40.0).unwrap();
        pb.update(&mut d, -15.0).unwrap();
        let panel = d.release();
        // Shrunk all the way back to zero length.
        assert_eq!(panel.pixel(10, 20), Some(BG));
    }

    #[test]
    fn reset_forgets_the_drawn_state() {
        let mut d = display();
        let mut pb = bar();
        pb.update(&mut d, 50.0).unwrap();
        pb.reset();
        pb.update(&mut d, 50.0).unwrap();
        // Painted twice from scratch.
        assert_eq!(d.release().write_count(), 2 * 50 * 5);
    }
}
