//! # One-Shot Latch
//!
//! Guards callbacks that must fire at most once per submission even when the
//! transport delivers duplicate events from another thread.

use std::sync::atomic::{AtomicBool, Ordering};

/// Check-and-set latch.
#[derive(Debug, Default)]
pub struct OutcomeLatch {
    fired: AtomicBool,
}

impl OutcomeLatch {
    /// Create an open latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the latch. Returns `true` only for the caller that closed it.
    pub fn try_fire(&self) -> bool {
        self.fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether the latch has been closed.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}
