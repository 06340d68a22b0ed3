//! Controller simulator for host-side tests.
//!
//! `MockDisplay` from embedded-graphics cannot see below the draw
//! layer; these tests need to observe the actual bus traffic. The
//! [`MockPanel`] implements [`DisplayInterface`] and replays the
//! command stream the way the controller would: it tracks the
//! addressing window armed by a memory-write and lands every pixel
//! word at the raster position the hardware would, so geometry and
//! chunking assertions can run without a panel attached.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::command::{COLUMN_ADDRESS_SET, MEMORY_WRITE, ROW_ADDRESS_SET};
use crate::interface::DisplayInterface;

/// Recording implementation of [`DisplayInterface`].
#[derive(Debug, Default)]
pub struct MockPanel {
    commands: Vec<u8>,
    last_command: Option<u8>,
    addr_bytes: Vec<u8>,
    pending_cols: Option<(u16, u16)>,
    pending_rows: Option<(u16, u16)>,
    window: Option<(u16, u16, u16, u16)>,
    armed: bool,
    cursor: (u16, u16),
    carry: Option<u8>,
    pixels: BTreeMap<(u16, u16), u16>,
    write_count: usize,
    fill_chunks: Vec<u32>,
    resets: usize,
}

impl MockPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All command bytes seen, in order.
    pub fn commands(&self) -> &[u8] {
        &self.commands
    }

    /// The armed window as `(x_start, x_end, y_start, y_end)` in raw
    /// controller coordinates (bias included).
    pub fn window(&self) -> Option<(u16, u16, u16, u16)> {
        self.window
    }

    /// Last color written at a raw controller coordinate.
    pub fn pixel(&self, x: u16, y: u16) -> Option<u16> {
        self.pixels.get(&(x, y)).copied()
    }

    /// Every coordinate that has received a write, with its last color.
    pub fn drawn(&self) -> &BTreeMap<(u16, u16), u16> {
        &self.pixels
    }

    /// Total pixel words written, counting overwrites.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Word counts of the bulk-fill chunks, in order.
    pub fn fill_chunks(&self) -> &[u32] {
        &self.fill_chunks
    }

    /// Number of hardware reset pulses observed.
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Forget recorded traffic but keep window state.
    pub fn clear_log(&mut self) {
        self.commands.clear();
        self.pixels.clear();
        self.write_count = 0;
        self.fill_chunks.clear();
    }

    fn parse_addr_words(&mut self) {
        if self.addr_bytes.len() < 4 {
            return;
        }
        let start = u16::from_be_bytes([self.addr_bytes[0], self.addr_bytes[1]]);
        let end = u16::from_be_bytes([self.addr_bytes[2], self.addr_bytes[3]]);
        match self.last_command {
            Some(COLUMN_ADDRESS_SET) => self.pending_cols = Some((start, end)),
            Some(ROW_ADDRESS_SET) => self.pending_rows = Some((start, end)),
            _ => {}
        }
    }

    fn write_pixel(&mut self, word: u16) {
        let Some((xs, xe, ys, ye)) = self.window else {
            return;
        };
        self.pixels.insert(self.cursor, word);
        self.write_count += 1;

        // Row-major advance, wrapping at the window bounds like the
        // controller's address counters do.
        if self.cursor.0 == xe {
            self.cursor.0 = xs;
            self.cursor.1 = if self.cursor.1 == ye {
                ys
            } else {
                self.cursor.1 + 1
            };
        } else {
            self.cursor.0 += 1;
        }
    }
}

impl DisplayInterface for MockPanel {
    type Error = Infallible;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.commands.push(command);
        self.last_command = Some(command);
        self.addr_bytes.clear();
        self.carry = None;

        if command == MEMORY_WRITE {
            if let (Some((xs, xe)), Some((ys, ye))) = (self.pending_cols, self.pending_rows) {
                self.window = Some((xs, xe, ys, ye));
                self.cursor = (xs, ys);
            }
            self.armed = true;
        } else {
            self.armed = false;
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.armed {
            for &byte in data {
                match self.carry.take() {
                    Some(hi) => self.write_pixel(u16::from_be_bytes([hi, byte])),
                    None => self.carry = Some(byte),
                }
            }
        } else {
            self.addr_bytes.extend_from_slice(data);
            self.parse_addr_words();
        }
        Ok(())
    }

    fn send_data16(&mut self, word: u16) -> Result<(), Self::Error> {
        if self.armed {
            self.write_pixel(word);
            Ok(())
        } else {
            self.send_data(&word.to_be_bytes())
        }
    }

    fn fill_words(&mut self, word: u16, count: u16) -> Result<(), Self::Error> {
        self.fill_chunks.push(count as u32);
        for _ in 0..count {
            self.write_pixel(word);
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) {
        self.resets += 1;
    }
}
