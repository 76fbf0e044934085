//! Digital Debounce Filter
//!
//! A raw change is accepted only after it persists for the debounce
//! threshold. Reverting to the stable value before the threshold discards
//! the partial time; nothing carries over between candidate changes.

use cluster_inputs::Transition;

use crate::{DEBOUNCE_MS, InputState, TIMER_CEILING_MS};

/// Tuning for [`debounce_filter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DebounceConfig {
    /// Milliseconds a differing raw value must persist before it commits
    pub threshold_ms: u32,
    /// Saturation ceiling for the hold/release timers
    pub timer_ceiling_ms: u32,
}

impl DebounceConfig {
    /// Create a debounce configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use cluster_filters::DebounceConfig;
    ///
    /// let config = DebounceConfig::new(5, 1_000);
    /// assert_eq!(config.threshold_ms, 5);
    /// ```
    pub const fn new(threshold_ms: u32, timer_ceiling_ms: u32) -> Self {
        Self {
            threshold_ms,
            timer_ceiling_ms,
        }
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS, TIMER_CEILING_MS)
    }
}

/// Debounce one digital input for one tick.
///
/// First advances whichever of `hold_ms` / `release_ms` matches the current
/// stable value (saturating at the ceiling), then runs the debounce step on
/// `raw`. On commit the timer of the new state restarts from zero and the
/// edge is returned.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Saturating arithmetic only
///
/// # Arguments
///
/// * `state` - Runtime state of the input (modified in place)
/// * `raw` - Active-high raw read for this tick
/// * `elapsed_ms` - Time since the previous tick
/// * `config` - Threshold and timer ceiling
#[inline]
pub fn debounce_filter(
    state: &mut InputState,
    raw: bool,
    elapsed_ms: u32,
    config: &DebounceConfig,
) -> Option<Transition> {
    let ceiling = config.timer_ceiling_ms;
    if state.is_pressed() {
        state.hold_ms = state.hold_ms.saturating_add(elapsed_ms).min(ceiling);
    } else {
        state.release_ms = state.release_ms.saturating_add(elapsed_ms).min(ceiling);
    }

    if raw == state.is_pressed() {
        state.debounce_ms = 0;
        return None;
    }

    state.debounce_ms = state.debounce_ms.saturating_add(elapsed_ms);
    if state.debounce_ms < config.threshold_ms {
        return None;
    }

    state.debounce_ms = 0;
    state.last_value = u8::from(raw);
    if raw {
        state.hold_ms = 0;
        Some(Transition::Pressed)
    } else {
        state.release_ms = 0;
        Some(Transition::Released)
    }
}
