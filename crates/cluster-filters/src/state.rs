//! Per-input runtime state
//!
//! One [`InputState`] exists per logical input for the life of the process.
//! Digital filters use the timer and click fields, analog filters use the
//! accumulator; both share `last_value` and `pending_report`.

use serde::{Deserialize, Serialize};

/// Mutable runtime record of one input.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable layout
/// - `Copy`, no heap data
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Stable value: 0/1 for digital inputs, 0..=100 for analog inputs
    pub last_value: u8,
    /// Sum of raw analog samples in the current epoch
    pub accumulator: u32,
    /// State changed since the last report pass
    pub pending_report: bool,
    /// Time a differing raw value has persisted
    pub debounce_ms: u32,
    /// Time spent continuously pressed (saturating)
    pub hold_ms: u32,
    /// Time spent continuously released (saturating)
    pub release_ms: u32,
    /// Presses seen in the open gear episode
    pub click_count: u8,
}

impl InputState {
    /// Fresh state: released, zeroed timers, nothing pending.
    pub const fn new() -> Self {
        Self {
            last_value: 0,
            accumulator: 0,
            pending_report: false,
            debounce_ms: 0,
            hold_ms: 0,
            release_ms: 0,
            click_count: 0,
        }
    }

    /// Digital value is pressed.
    pub fn is_pressed(&self) -> bool {
        self.last_value != 0
    }

    /// Close the report cycle: drop the pending flag and end any gear episode.
    pub fn clear_report(&mut self) {
        self.pending_report = false;
        self.click_count = 0;
    }

    /// Reset the state to its power-on values.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
