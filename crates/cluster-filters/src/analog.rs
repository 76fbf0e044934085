//! Analog Block-Average Filter
//!
//! Samples are summed for a fixed number of ticks and then averaged once.
//! This is a block average over a window shared by every analog input, not a
//! rolling average: all gauges close their epoch on the same tick.

use cluster_inputs::{GAUGE_SCALE_MAX, RAW_ANALOG_MAX};

use crate::{EPOCH_TICKS, InputState};

/// Shared tick counter deciding when every analog input closes its epoch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EpochCounter {
    ticks: u32,
    length: u32,
}

impl EpochCounter {
    /// Create a counter closing an epoch every `length` ticks.
    ///
    /// A zero length is treated as one tick.
    pub fn new(length: u32) -> Self {
        Self {
            ticks: 0,
            length: length.max(1),
        }
    }

    /// Count one tick. Returns `true` on the tick that completes an epoch;
    /// the counter restarts from zero on that tick.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.ticks = self.ticks.saturating_add(1);
        if self.ticks >= self.length {
            self.ticks = 0;
            true
        } else {
            false
        }
    }

    /// Ticks counted into the current epoch.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Ticks per epoch.
    pub fn length(&self) -> u32 {
        self.length
    }
}

impl Default for EpochCounter {
    fn default() -> Self {
        Self::new(EPOCH_TICKS)
    }
}

/// Linear map of a raw 0..=1023 average onto 0..=100, truncating.
///
/// # Example
///
/// ```
/// use cluster_filters::rescale;
///
/// assert_eq!(rescale(0), 0);
/// assert_eq!(rescale(512), 50);
/// assert_eq!(rescale(1023), 100);
/// ```
#[inline]
pub fn rescale(raw_average: u16) -> u8 {
    let raw = u32::from(raw_average.min(RAW_ANALOG_MAX));
    let scaled = raw.saturating_mul(u32::from(GAUGE_SCALE_MAX)) / u32::from(RAW_ANALOG_MAX);
    u8::try_from(scaled)
        .unwrap_or(GAUGE_SCALE_MAX)
        .min(GAUGE_SCALE_MAX)
}

/// Add one raw sample to the input's epoch accumulator.
///
/// Samples above the ADC range are clamped before they are summed.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
#[inline]
pub fn analog_accumulate(state: &mut InputState, raw: u16) {
    let sample = u32::from(raw.min(RAW_ANALOG_MAX));
    state.accumulator = state.accumulator.saturating_add(sample);
}

/// Close the epoch for one input.
///
/// Divides the accumulator by `epoch_ticks`, zeroes it, rescales the block
/// average and updates `last_value`. The input becomes pending when the
/// rescaled value changed, or unconditionally when `force` is set.
///
/// Returns whether the input was marked pending.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
#[inline]
pub fn analog_epoch_filter(state: &mut InputState, epoch_ticks: u32, force: bool) -> bool {
    let average = state.accumulator / epoch_ticks.max(1);
    state.accumulator = 0;

    let value = rescale(u16::try_from(average).unwrap_or(RAW_ANALOG_MAX));
    let changed = value != state.last_value;
    state.last_value = value;

    if changed || force {
        state.pending_report = true;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_epoch(state: &mut InputState, raw: u16, ticks: u32) {
        for _ in 0..ticks {
            analog_accumulate(state, raw);
        }
    }

    #[test]
    fn test_rescale_bounds() {
        assert_eq!(rescale(0), 0);
        assert_eq!(rescale(1023), 100);
        assert_eq!(rescale(u16::MAX), 100);
    }

    #[test]
    fn test_rescale_truncates() {
        // 10 * 100 / 1023 = 0.97..
        assert_eq!(rescale(10), 0);
        assert_eq!(rescale(11), 1);
        assert_eq!(rescale(1022), 99);
    }

    #[test]
    fn test_epoch_counter_fires_every_length() {
        let mut counter = EpochCounter::new(4);
        let fired: Vec<bool> = (0..8).map(|_| counter.advance()).collect();
        assert_eq!(fired, vec![false, false, false, true, false, false, false, true]);
    }

    #[test]
    fn test_epoch_counter_zero_length() {
        let mut counter = EpochCounter::new(0);
        assert_eq!(counter.length(), 1);
        assert!(counter.advance());
    }

    #[test]
    fn test_epoch_reports_change() {
        let mut state = InputState::new();
        fill_epoch(&mut state, 1023, EPOCH_TICKS);
        assert!(analog_epoch_filter(&mut state, EPOCH_TICKS, false));
        assert_eq!(state.last_value, 100);
        assert_eq!(state.accumulator, 0);
        assert!(state.pending_report);
    }

    #[test]
    fn test_epoch_without_change_is_quiet() {
        let mut state = InputState::new();
        fill_epoch(&mut state, 5, EPOCH_TICKS);
        assert!(!analog_epoch_filter(&mut state, EPOCH_TICKS, false));
        assert_eq!(state.last_value, 0);
        assert!(!state.pending_report);
    }

    #[test]
    fn test_forced_epoch_reports_unchanged_value() {
        let mut state = InputState::new();
        fill_epoch(&mut state, 0, EPOCH_TICKS);
        assert!(analog_epoch_filter(&mut state, EPOCH_TICKS, true));
        assert!(state.pending_report);
    }

    #[test]
    fn test_block_average_discards_remainder() {
        let mut state = InputState::new();
        // 127 samples of 1023 and one of 0: average 1015.00.. -> 99
        fill_epoch(&mut state, 1023, EPOCH_TICKS - 1);
        analog_accumulate(&mut state, 0);
        analog_epoch_filter(&mut state, EPOCH_TICKS, false);
        assert_eq!(state.last_value, 99);
    }

    #[test]
    fn test_accumulate_clamps_samples() {
        let mut state = InputState::new();
        analog_accumulate(&mut state, 4095);
        assert_eq!(state.accumulator, 1023);
    }
}
