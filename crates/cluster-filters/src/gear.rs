//! Gear Click/Hold State Machine
//!
//! Interprets the debounced edges of one digital input as a gear gesture.
//! An episode opens with the first press and stays open until a report pass
//! clears the input. Three gestures are recognised:
//!
//! | Gesture                          | Fires                         | Hint     |
//! |----------------------------------|-------------------------------|----------|
//! | one press, released under hold   | release time past threshold   | `Short`  |
//! | one press, held past hold        | immediately, while pressed    | `Long`   |
//! | two presses, both under hold     | release time past threshold   | `Double` |
//!
//! Only a single press can close an episode while held; every other
//! episode waits for the release threshold. One that matches no gesture
//! (three or more clicks, a second press held too long) is flagged for
//! reporting but classifies to nothing, so the report pass closes it without
//! emitting a line.

use cluster_inputs::{GearHint, Transition};

use crate::{GEAR_HOLD_MS, GEAR_RELEASE_MS, InputState};

/// Thresholds for the gear gesture classifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GearTiming {
    /// Release time after which an episode closes
    pub release_ms: u32,
    /// Hold time separating a tap from a long hold
    pub hold_ms: u32,
}

impl GearTiming {
    /// Create gear timing thresholds.
    pub const fn new(release_ms: u32, hold_ms: u32) -> Self {
        Self {
            release_ms,
            hold_ms,
        }
    }
}

impl Default for GearTiming {
    fn default() -> Self {
        Self::new(GEAR_RELEASE_MS, GEAR_HOLD_MS)
    }
}

/// Advance the gear episode after the debounce step of the same tick.
///
/// Counts presses and marks the input pending once the open episode is
/// ready to close. Returns whether the input is pending after this call.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
#[inline]
pub fn gear_filter(
    state: &mut InputState,
    edge: Option<Transition>,
    timing: &GearTiming,
) -> bool {
    if edge == Some(Transition::Pressed) {
        state.click_count = state.click_count.saturating_add(1);
    }

    if state.click_count == 0 {
        return state.pending_report;
    }

    let closes = if state.is_pressed() {
        state.click_count == 1 && state.hold_ms > timing.hold_ms
    } else {
        state.release_ms > timing.release_ms
    };

    if closes {
        state.pending_report = true;
    }
    state.pending_report
}

/// Hint for a pending gear episode, or `None` when the episode matches no
/// gesture and should be dropped silently.
pub fn classify_gear(state: &InputState, timing: &GearTiming) -> Option<GearHint> {
    let tapped = state.hold_ms < timing.hold_ms;
    match (state.is_pressed(), state.click_count) {
        (true, 1) if state.hold_ms > timing.hold_ms => Some(GearHint::Long),
        (false, 1) if tapped => Some(GearHint::Short),
        (false, 2) if tapped => Some(GearHint::Double),
        _ => None,
    }
}
