//! Widgets for ST7789-based power-meter front panels.
//!
//! Everything here is incremental by construction: the panel has no
//! host-side framebuffer, so each widget tracks its own previous
//! state and redraws only what changed.

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

pub mod diff;
pub mod progress;
pub mod theme;

pub use diff::{CacheError, DiffCache, DiffObserver, NoObserver, BUF_LEN, INVALID_ID, MAX_SLOTS};
pub use progress::ProgressBar;
