//! Bitmap fonts and glyph rendering.
//!
//! A [`Font`] is a packed table of fixed-size glyphs indexed by a
//! sample string: the glyph for a character sits at the position the
//! character occupies in the sample. Rows are packed MSB-first,
//! `ceil(width / 8)` bytes per row.

use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// A fixed-cell bitmap font.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    sample: &'static str,
    bitmap: &'static [u8],
    width: u8,
    height: u8,
}

impl Font {
    pub const fn new(sample: &'static str, bitmap: &'static [u8], width: u8, height: u8) -> Self {
        Self {
            sample,
            bitmap,
            width,
            height,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    fn bytes_per_row(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    fn bytes_per_glyph(&self) -> usize {
        self.bytes_per_row() * self.height as usize
    }

    /// Packed rows for `ch`, or `None` when the font does not carry it.
    pub fn glyph(&self, ch: char) -> Option<&'static [u8]> {
        let index = self.sample.chars().position(|c| c == ch)?;
        let size = self.bytes_per_glyph();
        self.bitmap.get(index * size..(index + 1) * size)
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draws one glyph cell at `(x, y)`, foreground over background.
    ///
    /// A space skips the cell entirely (the background is left
    /// untouched). Characters outside the printable ASCII range fall
    /// back to `'?'`; if the font carries neither the character nor
    /// `'?'` the cell is skipped.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        font: &Font,
        fg: u16,
        bg: u16,
    ) -> Result<(), Error<I>> {
        if ch == ' ' {
            return Ok(());
        }
        let ch = if (' '..='~').contains(&ch) { ch } else { '?' };
        let rows = match font.glyph(ch).or_else(|| font.glyph('?')) {
            Some(rows) => rows,
            None => {
                log::debug!("st7789: no glyph for {:?}, skipping", ch);
                return Ok(());
            }
        };

        let bytes_per_row = (font.width as usize + 7) / 8;
        for (dy, row) in rows.chunks(bytes_per_row).enumerate() {
            for dx in 0..font.width as usize {
                let set = row[dx / 8] & (0x80 >> (dx % 8)) != 0;
                let color = if set { fg } else { bg };
                self.draw_point(x + dx as u16, y + dy as u16, color)?;
            }
        }
        Ok(())
    }

    /// Draws a string left to right with a fixed advance of the font
    /// cell width. No wrapping; glyphs past the panel edge clamp at
    /// the controller.
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: &Font,
        fg: u16,
        bg: u16,
    ) -> Result<(), Error<I>> {
        let mut x = x;
        for ch in text.chars() {
            self.draw_char(x, y, ch, font, fg, bg)?;
            x = x.saturating_add(font.width as u16);
        }
        Ok(())
    }
}

/// 8x16 cell font carrying the meter charset: digits, punctuation for
/// readings, units and the `'?'` fallback.
pub const FONT_8X16: Font = Font::new("0123456789.:%+-AVWmh?", &FONT_8X16_DATA, 8, 16);

#[rustfmt::skip]
static FONT_8X16_DATA: [u8; 21 * 16] = [
    // '0'
    0x00, 0x00, 0x38, 0x44, 0x82, 0x82, 0x82, 0x82,
    0x82, 0x82, 0x82, 0x82, 0x44, 0x38, 0x00, 0x00,
    // '1'
    0x00, 0x00, 0x10, 0x30, 0x50, 0x10, 0x10, 0x10,
    0x10, 0x10, 0x10, 0x10, 0x10, 0x7C, 0x00, 0x00,
    // '2'
    0x00, 0x00, 0x38, 0x44, 0x82, 0x02, 0x02, 0x04,
    0x08, 0x10, 0x20, 0x40, 0x80, 0xFE, 0x00, 0x00,
    // '3'
    0x00, 0x00, 0x38, 0x44, 0x82, 0x02, 0x04, 0x18,
    0x04, 0x02, 0x02, 0x82, 0x44, 0x38, 0x00, 0x00,
    // '4'
    0x00, 0x00, 0x04, 0x0C, 0x14, 0x24, 0x44, 0x84,
    0x84, 0xFE, 0x04, 0x04, 0x04, 0x04, 0x00, 0x00,
    // '5'
    0x00, 0x00, 0xFE, 0x80, 0x80, 0x80, 0xF8, 0x04,
    0x02, 0x02, 0x02, 0x82, 0x44, 0x38, 0x00, 0x00,
    // '6'
    0x00, 0x00, 0x38, 0x44, 0x80, 0x80, 0xB8, 0xC4,
    0x82, 0x82, 0x82, 0x82, 0x44, 0x38, 0x00, 0x00,
    // '7'
    0x00, 0x00, 0xFE, 0x02, 0x04, 0x04, 0x08, 0x08,
    0x10, 0x10, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00,
    // '8'
    0x00, 0x00, 0x38, 0x44, 0x82, 0x82, 0x44, 0x38,
    0x44, 0x82, 0x82, 0x82, 0x44, 0x38, 0x00, 0x00,
    // '9'
    0x00, 0x00, 0x38, 0x44, 0x82, 0x82, 0x82, 0x82,
    0x46, 0x3A, 0x02, 0x02, 0x44, 0x38, 0x00, 0x00,
    // '.'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
    // ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00,
    0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // '%'
    0x00, 0x00, 0x61, 0x91, 0x92, 0x64, 0x08, 0x08,
    0x10, 0x20, 0x26, 0x49, 0x49, 0x86, 0x00, 0x00,
    // '+'
    0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x10, 0xFE,
    0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'A'
    0x00, 0x00, 0x10, 0x28, 0x28, 0x44, 0x44, 0x82,
    0x82, 0xFE, 0x82, 0x82, 0x82, 0x82, 0x00, 0x00,
    // 'V'
    0x00, 0x00, 0x82, 0x82, 0x82, 0x82, 0x44, 0x44,
    0x44, 0x28, 0x28, 0x28, 0x10, 0x10, 0x00, 0x00,
    // 'W'
    0x00, 0x00, 0x82, 0x82, 0x82, 0x92, 0x92, 0x92,
    0x92, 0xAA, 0xAA, 0x44, 0x44, 0x44, 0x00, 0x00,
    // 'm'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xEC, 0x92,
    0x92, 0x92, 0x92, 0x92, 0x92, 0x92, 0x00, 0x00,
    // 'h'
    0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0xB8, 0xC4,
    0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0x00, 0x00,
    // '?'
    0x00, 0x00, 0x38, 0x44, 0x82, 0x02, 0x04, 0x08,
    0x10, 0x10, 0x00, 0x00, 0x10, 0x10, 0x00, 0x00,
];
