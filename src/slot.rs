//! One-at-a-time picker slot.
//!
//! The host platform delivers picker results through a single callback
//! channel, so overlapping requests would race for the same response.
//! Instead of silently overwriting the pending request, a second operation
//! fails immediately with [`Error::PickerBusy`] while one is in flight.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{Error, Result};

/// Tracks whether a picker operation is in flight.
#[derive(Debug, Default)]
pub struct PickerSlot {
    busy: AtomicBool,
}

impl PickerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for one operation.
    ///
    /// The returned lease releases the slot on drop, error paths included.
    pub fn acquire(&self) -> Result<PickerLease<'_>> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(Error::PickerBusy);
        }
        Ok(PickerLease { slot: self })
    }
}

/// RAII lease on the picker slot.
#[must_use = "dropping the lease releases the picker slot"]
pub struct PickerLease<'a> {
    slot: &'a PickerSlot,
}

impl Drop for PickerLease<'_> {
    fn drop(&mut self) {
        self.slot.busy.store(false, Ordering::SeqCst);
    }
}
