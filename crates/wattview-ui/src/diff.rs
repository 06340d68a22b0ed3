//! Differential text cache for flicker-free readouts.
//!
//! Numeric fields on the panel are redrawn every sample period, but
//! most characters do not change between samples. The cache keeps the
//! previously shown text per field (keyed by a caller-chosen slot id)
//! and turns each new text into a sparse output where unchanged
//! positions become spaces, so the renderer touches only the cells
//! that actually differ.
//!
//! Pure logic (no hardware) so it can be unit-tested without flashing.

/// Number of concurrently cached fields.
pub const MAX_SLOTS: usize = 16;

/// Fixed comparison width, in bytes, of every cached field.
pub const BUF_LEN: usize = 31;

/// Slot id value marking a free slot; never use it as a field id.
pub const INVALID_ID: u16 = 0xFFFF;

/// Receiver for per-character change notifications.
///
/// Notifications are delivered only after a comparison pass has fully
/// committed, so an observer may redraw immediately without the cache
/// state shifting under it.
pub trait DiffObserver {
    fn on_change(&mut self, id: u16, index: usize, ch: u8);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl DiffObserver for NoObserver {
    fn on_change(&mut self, _id: u16, _index: usize, _ch: u8) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// All [`MAX_SLOTS`] slots hold live ids.
    NoFreeSlot,
}

impl core::fmt::Display for CacheError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoFreeSlot => write!(f, "no free diff slot"),
        }
    }
}

impl core::error::Error for CacheError {}

#[derive(Clone, Copy)]
struct Slot {
    id: u16,
    // Previous bytes; 0 marks positions past the stored text's end.
    prev: [u8; BUF_LEN],
}

const EMPTY_SLOT: Slot = Slot {
    id: INVALID_ID,
    prev: [0; BUF_LEN],
};

/// Owned arena of cached fields plus an optional change observer.
pub struct DiffCache<O = NoObserver> {
    slots: [Slot; MAX_SLOTS],
    observer: O,
}

impl DiffCache<NoObserver> {
    pub fn new() -> Self {
        Self::with_observer(NoObserver)
    }
}

impl Default for DiffCache<NoObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> DiffCache<O>
where
    O: DiffObserver,
{
    pub fn with_observer(observer: O) -> Self {
        Self {
            slots: [EMPTY_SLOT; MAX_SLOTS],
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Existing slot for `id`, or the first free one (history cleared).
    fn find_or_alloc(&mut self, id: u16) -> Result<usize, CacheError> {
        let mut free = None;
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.id == id {
                return Ok(i);
            }
            if slot.id == INVALID_ID && free.is_none() {
                free = Some(i);
            }
        }
        match free {
            Some(i) => {
                self.slots[i] = Slot {
                    id,
                    prev: [0; BUF_LEN],
                };
                Ok(i)
            }
            None => {
                log::warn!("diff cache full, id {id} dropped");
                Err(CacheError::NoFreeSlot)
            }
        }
    }

    /// Fixed-width comparison: all [`BUF_LEN`] positions of `input`
    /// are compared against the slot history. Unchanged positions
    /// come back as `' '`; changed ones carry the new byte and update
    /// the history. Returns the number of changed positions.
    pub fn diff_from_buf(
        &mut self,
        id: u16,
        input: &[u8; BUF_LEN],
        out: &mut [u8; BUF_LEN],
    ) -> Result<usize, CacheError> {
        let slot = self.find_or_alloc(id)?;

        let mut pending = [(0usize, 0u8); BUF_LEN];
        let mut changed = 0;
        for i in 0..BUF_LEN {
            let newb = input[i];
            if newb == self.slots[slot].prev[i] {
                out[i] = b' ';
            } else {
                out[i] = newb;
                self.slots[slot].prev[i] = newb;
                pending[changed] = (i, newb);
                changed += 1;
            }
        }

        for &(index, ch) in &pending[..changed] {
            self.observer.on_change(id, index, ch);
        }
        Ok(changed)
    }

    /// String comparison with tail clearing: `text` is compared up to
    /// its length (truncated at [`BUF_LEN`]), and history positions
    /// beyond the new end are cleared and reported as changed-to-space
    /// so stale characters get erased from the panel. The rest of
    /// `out` is padded with spaces.
    pub fn diff_from_str(
        &mut self,
        id: u16,
        text: &str,
        out: &mut [u8; BUF_LEN],
    ) -> Result<usize, CacheError> {
        let slot = self.find_or_alloc(id)?;
        let bytes = text.as_bytes();
        let new_len = bytes.len().min(BUF_LEN);

        let mut pending = [(0usize, 0u8); BUF_LEN];
        let mut changed = 0;

        for (i, &newb) in bytes[..new_len].iter().enumerate() {
            if newb == self.slots[slot].prev[i] {
                out[i] = b' ';
            } else {
                out[i] = newb;
                self.slots[slot].prev[i] = newb;
                pending[changed] = (i, newb);
                changed += 1;
            }
        }

        // Tail: anything the previous text covered past the new end is
        // gone; tell the observer to blank those cells.
        for i in new_len..BUF_LEN {
            out[i] = b' ';
            if self.slots[slot].prev[i] != 0 {
                self.slots[slot].prev[i] = 0;
                pending[changed] = (i, b' ');
                changed += 1;
            }
        }

        for &(index, ch) in &pending[..changed] {
            self.observer.on_change(id, index, ch);
        }
        Ok(changed)
    }

    /// Frees the slot for `id`, if any. The next use of the id starts
    /// from empty history.
    pub fn clear_id(&mut self, id: u16) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) {
            *slot = EMPTY_SLOT;
        }
    }

    /// Frees every slot.
    pub fn clear_all(&mut self) {
        self.slots = [EMPTY_SLOT; MAX_SLOTS];
    }
}
