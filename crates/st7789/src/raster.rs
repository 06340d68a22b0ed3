//! Vector primitives, expressed as point writes and window fills.
//!
//! Nothing here clips against the logical panel bounds; coordinates
//! that cannot be represented (negative after center-relative math)
//! are skipped, everything else is clamped only by the controller's
//! own addressing limits.

use libm::{atan2f, sqrtf};

use crate::display::{Display, Region};
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    fn point_clipped(&mut self, x: i32, y: i32, color: u16) -> Result<(), Error<I>> {
        if x < 0 || y < 0 {
            return Ok(());
        }
        self.draw_point(x as u16, y as u16, color)
    }

    /// One-row fill between two x positions, inclusive.
    fn hspan(&mut self, x0: i32, x1: i32, y: i32, color: u16) -> Result<(), Error<I>> {
        if y < 0 {
            return Ok(());
        }
        let xs = x0.max(0);
        if x1 < xs {
            return Ok(());
        }
        self.fill_region(Region::new(xs as u16, y as u16, x1 as u16, y as u16), color)
    }

    /// Integer Bresenham line, endpoints inclusive.
    ///
    /// Endpoints are walked in a canonical order so the visited set is
    /// identical whichever way the caller names them. `dx = dy = 0`
    /// draws exactly one point.
    pub fn draw_line(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: u16,
    ) -> Result<(), Error<I>> {
        // Canonical direction: walk from the lexicographically smaller
        // endpoint, so ties in the error term resolve the same way for
        // both argument orders.
        let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };

        let (mut x, mut y) = (x0 as i32, y0 as i32);
        let mut dx = x1 as i32 - x;
        let mut dy = y1 as i32 - y;
        let x_inc = if dx >= 0 {
            1
        } else {
            dx = -dx;
            -1
        };
        let y_inc = if dy >= 0 {
            1
        } else {
            dy = -dy;
            -1
        };
        let dx2 = dx * 2;
        let dy2 = dy * 2;

        if dx > dy {
            // One point per column, error tracks the minor axis.
            let mut error = dy2 - dx;
            for _ in 0..=dx {
                self.point_clipped(x, y, color)?;
                if error >= 0 {
                    error -= dx2;
                    y += y_inc;
                }
                error += dy2;
                x += x_inc;
            }
        } else {
            let mut error = dx2 - dy;
            for _ in 0..=dy {
                self.point_clipped(x, y, color)?;
                if error >= 0 {
                    error -= dy2;
                    x += x_inc;
                }
                error += dx2;
                y += y_inc;
            }
        }
        Ok(())
    }

    /// Stroked circle as a ring-membership test over the bounding
    /// square: a point is drawn iff `inner² <= dx²+dy² <= outer²` with
    /// `outer = r` and `inner = r - thickness + 1`.
    ///
    /// The region test keeps the stroke free of the gap artifacts a
    /// perimeter walk shows at thickness > 1.
    pub fn draw_circle(
        &mut self,
        cx: u16,
        cy: u16,
        radius: u16,
        color: u16,
        thickness: u8,
    ) -> Result<(), Error<I>> {
        let t = thickness.max(1) as i32;
        let r = radius as i32;
        let outer2 = r * r;
        let inner = r - t + 1;
        let inner2 = inner * inner;

        for dx in -r..=r {
            for dy in -r..=r {
                let dist2 = dx * dx + dy * dy;
                if dist2 <= outer2 && dist2 >= inner2 {
                    self.point_clipped(cx as i32 + dx, cy as i32 + dy, color)?;
                }
            }
        }
        Ok(())
    }

    /// Stroked circle with every odd angular sector left blank.
    ///
    /// The full turn is split into `segments` equal sectors by
    /// `atan2(dy, dx)` normalized to `[0, 2pi)`; ring points in
    /// even-indexed sectors are drawn.
    pub fn draw_dashed_circle(
        &mut self,
        cx: u16,
        cy: u16,
        radius: u16,
        color: u16,
        thickness: u8,
        segments: u8,
    ) -> Result<(), Error<I>> {
        let t = thickness.max(1) as i32;
        let segments = segments.max(1) as u32;
        let r = radius as i32;
        let outer2 = r * r;
        let inner = r - t + 1;
        let inner2 = inner * inner;

        let two_pi = 2.0 * core::f32::consts::PI;
        let segment_angle = two_pi / segments as f32;

        for dx in -r..=r {
            for dy in -r..=r {
                let dist2 = dx * dx + dy * dy;
                if dist2 > outer2 || dist2 < inner2 {
                    continue;
                }
                let mut angle = atan2f(dy as f32, dx as f32);
                if angle < 0.0 {
                    angle += two_pi;
                }
                let sector = (angle / segment_angle) as u32;
                if sector % 2 == 0 {
                    self.point_clipped(cx as i32 + dx, cy as i32 + dy, color)?;
                }
            }
        }
        Ok(())
    }

    /// Filled circle via the midpoint algorithm, drawing the
    /// octant-symmetric row pairs as horizontal spans.
    ///
    /// The pixelation comes from a different family than
    /// [`draw_circle`](Self::draw_circle)'s region test; the two are
    /// not guaranteed to agree on every edge pixel at the same radius.
    pub fn fill_circle(&mut self, cx: u16, cy: u16, radius: u16, color: u16) -> Result<(), Error<I>> {
        let (x, y) = (cx as i32, cy as i32);
        let mut a: i32 = 0;
        let mut b = radius as i32;
        let mut c = 3 - 2 * radius as i32;

        while a <= b {
            self.hspan(x - a, x + a, y - b, color)?;
            self.hspan(x - a, x + a, y + b, color)?;
            self.hspan(x - b, x + b, y - a, color)?;
            self.hspan(x - b, x + b, y + a, color)?;

            if c < 0 {
                c += 4 * a + 6;
            } else {
                c += 4 * (a - b) + 10;
                b -= 1;
            }
            a += 1;
        }
        Ok(())
    }

    /// Filled rectangle: a single window fill.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u16) -> Result<(), Error<I>> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.fill_region(Region::new(x, y, x + w - 1, y + h - 1), color)
    }

    /// Stroked rectangle: four filled strips, overlapping at the
    /// corners. Overlap is idempotent since every write is the same
    /// color.
    pub fn draw_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: u16,
        thickness: u8,
    ) -> Result<(), Error<I>> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let t = (thickness.max(1) as u16).min(w).min(h);

        self.fill_rect(x, y, w, t, color)?; // top
        self.fill_rect(x, y + h - t, w, t, color)?; // bottom
        self.fill_rect(x, y, t, h, color)?; // left
        self.fill_rect(x + w - t, y, t, h, color) // right
    }

    /// Triangle outline: three lines between the vertices.
    pub fn draw_triangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: u16,
    ) -> Result<(), Error<I>> {
        self.draw_line(x0, y0, x1, y1, color)?;
        self.draw_line(x1, y1, x2, y2, color)?;
        self.draw_line(x2, y2, x0, y0, color)
    }

    /// Filled rounded rectangle: a center cross filled directly, plus
    /// the four corner quarter-disks filled row by row with
    /// `dx = round(sqrt(r^2 - (r-1-dy)^2))` bounding each row's span.
    pub fn fill_round_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        r: u16,
        color: u16,
    ) -> Result<(), Error<I>> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        if r == 0 {
            return self.fill_rect(x, y, w, h, color);
        }
        let r = r.min(w / 2).min(h / 2);

        // Center strip full height, side strips between the corners.
        self.fill_rect(x + r, y, w - 2 * r, h, color)?;
        self.fill_rect(x, y + r, r, h - 2 * r, color)?;
        self.fill_rect(x + w - r, y + r, r, h - 2 * r, color)?;

        for dy in 0..r {
            let oy = (r - 1 - dy) as f32;
            let dx = (sqrtf(r as f32 * r as f32 - oy * oy) + 0.5) as u16;
            if dx == 0 {
                continue;
            }

            // Top corners
            self.fill_rect(x + r - dx, y + dy, dx, 1, color)?;
            self.fill_rect(x + w - r, y + dy, dx, 1, color)?;
            // Bottom corners
            self.fill_rect(x + r - dx, y + h - 1 - dy, dx, 1, color)?;
            self.fill_rect(x + w - r, y + h - 1 - dy, dx, 1, color)?;
        }
        Ok(())
    }

    /// Stroked rounded rectangle.
    ///
    /// Per row, an outer cut is computed from the corner radius and,
    /// for rows inside the inner rectangle's vertical span, an inner
    /// cut from `ri = max(r - t, 0)`; only the two side bands between
    /// the cuts are drawn. A violated precondition draws nothing.
    pub fn draw_round_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        r: u16,
        t: u16,
        color: u16,
    ) -> Result<(), Error<I>> {
        if w < 2 * r || h < 2 * r || t == 0 || 2 * t >= w || 2 * t >= h {
            log::warn!("st7789: rounded-rect stroke precondition violated, skipping");
            return Ok(());
        }

        let ri = r.saturating_sub(t);

        for dy in 0..h {
            let yy = y + dy;

            // Vertical distance to the outer corner circle's center.
            let oy = if dy < r {
                r - 1 - dy
            } else if dy >= h - r {
                dy - (h - r)
            } else {
                0
            };
            let cut_out = if oy > 0 {
                let (r, oy) = (r as i32, oy as i32);
                let dx = sqrtf((r * r - oy * oy) as f32) as i32;
                (r - dx) as u16
            } else {
                0
            };
            let x0 = x + cut_out;
            let x1 = x + w - 1 - cut_out;

            if ri > 0 && dy >= t && dy < h - t {
                let dy_in = dy - t;
                let h_in = h - 2 * t;
                let oy_in = if dy_in < ri {
                    ri - 1 - dy_in
                } else if dy_in >= h_in - ri {
                    dy_in - (h_in - ri)
                } else {
                    0
                };
                let cut_in = if oy_in > 0 {
                    let (ri, oy_in) = (ri as i32, oy_in as i32);
                    let dx_in = sqrtf((ri * ri - oy_in * oy_in) as f32) as i32;
                    (ri - dx_in) as u16
                } else {
                    0
                };
                let xi0 = x + t + cut_in;
                let xi1 = x + t + (w - 2 * t) - 1 - cut_in;

                // Left band: outer edge up to the inner contour.
                if xi0 > x0 {
                    self.fill_region(Region::new(x0, yy, xi0 - 1, yy), color)?;
                }
                // Right band: inner contour up to the outer edge.
                if x1 > xi1 {
                    self.fill_region(Region::new(xi1 + 1, yy, x1, yy), color)?;
                }
            } else {
                self.fill_region(Region::new(x0, yy, x1, yy), color)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::color::WHITE;
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

    fn line_coords(x0: u16, y0: u16, x1: u16, y1: u16) -> BTreeSet<(u16, u16)> {
        let mut d = display();
        d.draw_line(x0, y0, x1, y1, WHITE).unwrap();
        d.release().drawn().keys().copied().collect()
    }

    #[test]
    fn degenerate_line_is_one_point() {
        let coords = line_coords(7, 7, 7, 7);
        assert_eq!(coords.len(), 1);
        assert!(coords.contains(&(7, 7)));
    }

    #[test]
    fn line_visits_major_axis_plus_one_points() {
        assert_eq!(line_coords(0, 0, 10, 3).len(), 11);
        assert_eq!(line_coords(5, 20, 8, 2).len(), 19);
    }

    #[test]
    fn line_is_symmetric_under_endpoint_swap() {
        let cases = [
            (0, 0, 2, 1),
            (0, 0, 10, 3),
            (3, 9, 9, 3),
            (1, 1, 1, 8),
            (2, 5, 11, 5),
            (0, 0, 7, 7),
        ];
        for (x0, y0, x1, y1) in cases {
            assert_eq!(
                line_coords(x0, y0, x1, y1),
                line_coords(x1, y1, x0, y0),
                "line ({x0},{y0})-({x1},{y1})"
            );
        }
    }

    #[test]
    fn line_endpoints_are_always_drawn() {
        let coords = line_coords(4, 17, 29, 6);
        assert!(coords.contains(&(4, 17)));
        assert!(coords.contains(&(29, 6)));
    }

    #[test]
    fn circle_ring_has_fourfold_symmetry() {
        let (cx, cy, r) = (100i32, 100i32, 12u16);
        let mut d = display();
        d.draw_circle(cx as u16, cy as u16, r, WHITE, 3).unwrap();
        let coords: BTreeSet<(i32, i32)> = d
            .release()
            .drawn()
            .keys()
            .map(|&(x, y)| (x as i32 - cx, y as i32 - cy))
            .collect();

        assert!(!coords.is_empty());
        for &(dx, dy) in &coords {
            assert!(coords.contains(&(-dx, dy)));
            assert!(coords.contains(&(dx, -dy)));
            assert!(coords.contains(&(-dx, -dy)));
        }
    }

    #[test]
    fn circle_ring_excludes_center_and_includes_rim() {
        let mut d = display();
        d.draw_circle(50, 50, 10, WHITE, 1).unwrap();
        let panel = d.release();
        assert_eq!(panel.pixel(60, 50), Some(WHITE));
        assert_eq!(panel.pixel(50, 40), Some(WHITE));
        assert_eq!(panel.pixel(50, 50), None);
    }

    #[test]
    fn dashed_circle_is_a_subset_of_the_ring() {
        let full: BTreeSet<(u16, u16)> = {
            let mut d = display();
            d.draw_circle(80, 80, 15, WHITE, 2).unwrap();
            d.release().drawn().keys().copied().collect()
        };
        let dashed: BTreeSet<(u16, u16)> = {
            let mut d = display();
            d.draw_dashed_circle(80, 80, 15, WHITE, 2, 8).unwrap();
            d.release().drawn().keys().copied().collect()
        };

        assert!(dashed.is_subset(&full));
        assert!(dashed.len() < full.len());
        // Sector 0 starts at angle zero: the rightmost ring point is in
        // an even sector and must be drawn.
        assert!(dashed.contains(&(95, 80)));
    }

    #[test]
    fn filled_circle_covers_the_axes() {
        let mut d = display();
        d.fill_circle(60, 60, 9, WHITE).unwrap();
        let panel = d.release();

        assert_eq!(panel.pixel(60, 60), Some(WHITE));
        assert_eq!(panel.pixel(69, 60), Some(WHITE));
        assert_eq!(panel.pixel(51, 60), Some(WHITE));
        assert_eq!(panel.pixel(60, 69), Some(WHITE));
        assert_eq!(panel.pixel(60, 51), Some(WHITE));
        // Nothing escapes the bounding square.
        for &(x, y) in panel.drawn().keys() {
            assert!((51..=69).contains(&x) && (51..=69).contains(&y));
        }
    }

    #[test]
    fn rect_stroke_is_exactly_the_perimeter() {
        let (w, h) = (20u16, 12u16);
        let mut d = display();
        d.draw_rect(10, 10, w, h, WHITE, 1).unwrap();
        let panel = d.release();

        let distinct = panel.drawn().len();
        assert_eq!(distinct as u16, 2 * w + 2 * h - 4);
        assert_eq!(panel.pixel(10, 10), Some(WHITE));
        assert_eq!(panel.pixel(29, 21), Some(WHITE));
        assert_eq!(panel.pixel(11, 11), None);
    }

    #[test]
    fn rect_stroke_thickness_clamps_to_the_rect() {
        let mut d = display();
        d.draw_rect(10, 10, 20, 12, WHITE, 200).unwrap();
        let panel = d.release();
        // Strips cover the whole rectangle, nothing outside it.
        assert_eq!(panel.drawn().len(), 20 * 12);
        assert_eq!(panel.pixel(9, 10), None);
        assert_eq!(panel.pixel(30, 10), None);
    }

    #[test]
    fn fill_rect_covers_width_times_height() {
        let mut d = display();
        d.fill_rect(5, 6, 13, 7, WHITE).unwrap();
        let panel = d.release();
        assert_eq!(panel.drawn().len(), 13 * 7);
        assert_eq!(panel.write_count(), 13 * 7);
    }

    #[test]
    fn zero_sized_rects_draw_nothing() {
        let mut d = display();
        d.fill_rect(5, 5, 0, 10, WHITE).unwrap();
        d.draw_rect(5, 5, 10, 0, WHITE, 2).unwrap();
        assert_eq!(d.release().write_count(), 0);
    }

    #[test]
    fn round_rect_fill_rounds_the_corners() {
        let (x, y, w, h, r) = (10u16, 10u16, 40u16, 30u16, 6u16);
        let mut d = display();
        d.fill_round_rect(x, y, w, h, r, WHITE).unwrap();
        let panel = d.release();

        // Extreme corner pixels are cut away.
        assert_eq!(panel.pixel(x, y), None);
        assert_eq!(panel.pixel(x + w - 1, y), None);
        assert_eq!(panel.pixel(x, y + h - 1), None);
        assert_eq!(panel.pixel(x + w - 1, y + h - 1), None);
        // Center and edge midpoints survive.
        assert_eq!(panel.pixel(x + w / 2, y + h / 2), Some(WHITE));
        assert_eq!(panel.pixel(x + w / 2, y), Some(WHITE));
        assert_eq!(panel.pixel(x, y + h / 2), Some(WHITE));
    }

    #[test]
    fn round_rect_fill_with_zero_radius_is_a_rect() {
        let mut d = display();
        d.fill_round_rect(5, 5, 10, 8, 0, WHITE).unwrap();
        assert_eq!(d.release().drawn().len(), 10 * 8);
    }

    #[test]
    fn round_rect_stroke_rejects_bad_geometry() {
        let mut d = display();
        // w < 2r
        d.draw_round_rect(10, 10, 10, 30, 6, 2, WHITE).unwrap();
        // t == 0
        d.draw_round_rect(10, 10, 40, 30, 6, 0, WHITE).unwrap();
        // 2t >= h
        d.draw_round_rect(10, 10, 40, 30, 6, 15, WHITE).unwrap();
        assert_eq!(d.release().write_count(), 0);
    }

    #[test]
    fn round_rect_stroke_draws_bands_not_interior() {
        let (x, y, w, h, r, t) = (10u16, 10u16, 40u16, 30u16, 6u16, 3u16);
        let mut d = display();
        d.draw_round_rect(x, y, w, h, r, t, WHITE).unwrap();
        let panel = d.release();

        // Center row: left band present, interior empty.
        let mid = y + h / 2;
        assert_eq!(panel.pixel(x, mid), Some(WHITE));
        assert_eq!(panel.pixel(x + t - 1, mid), Some(WHITE));
        assert_eq!(panel.pixel(x + w / 2, mid), None);
        assert_eq!(panel.pixel(x + w - 1, mid), Some(WHITE));
        // Outer corner pixel is cut by the radius.
        assert_eq!(panel.pixel(x, y), None);
        // Top edge midpoint belongs to the stroke.
        assert_eq!(panel.pixel(x + w / 2, y), Some(WHITE));
    }

    #[test]
    fn triangle_outline_contains_all_vertices() {
        let mut d = display();
        d.draw_triangle(10, 10, 40, 15, 25, 35, WHITE).unwrap();
        let panel = d.release();
        for &(x, y) in &[(10, 10), (40, 15), (25, 35)] {
            assert_eq!(panel.pixel(x, y), Some(WHITE), "vertex ({x},{y})");
        }
    }
}
