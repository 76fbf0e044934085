//! Fake Multiplexer
//!
//! One physical potentiometer stands in for several analog sensors. The
//! selected virtual channel follows the knob's *movement* rather than its
//! absolute position, so every channel keeps its own value across selector
//! changes and the knob nudges it up or down from wherever it was left.

use cluster_inputs::{RAW_ANALOG_MAX, VIRTUAL_CHANNEL_COUNT};

/// Differential-carry multiplexer over `N` virtual channels.
///
/// # RT Safety
///
/// - Fixed-size storage, no heap allocations
/// - O(1) per update
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FakeMux<const N: usize = VIRTUAL_CHANNEL_COUNT> {
    values: [u16; N],
    selected: usize,
    previous_physical: u16,
}

impl<const N: usize> FakeMux<N> {
    /// All channels at zero, channel 0 selected, previous reading zero.
    pub const fn new() -> Self {
        Self {
            values: [0; N],
            selected: 0,
            previous_physical: 0,
        }
    }

    /// Feed this tick's physical reading.
    ///
    /// The change since the previous reading is added to the selected
    /// channel and the result clamped to the ADC range; other channels are
    /// left untouched.
    #[inline]
    pub fn update(&mut self, physical: u16) {
        let physical = physical.min(RAW_ANALOG_MAX);
        let delta = i32::from(physical) - i32::from(self.previous_physical);
        self.previous_physical = physical;

        if let Some(value) = self.values.get_mut(self.selected) {
            let moved = (i32::from(*value) + delta).clamp(0, i32::from(RAW_ANALOG_MAX));
            *value = u16::try_from(moved).unwrap_or(RAW_ANALOG_MAX);
        }
    }

    /// Stored raw value of virtual channel `index`.
    ///
    /// An index outside the channel range reads as zero.
    #[inline]
    pub fn read(&self, index: usize) -> u16 {
        self.values.get(index).copied().unwrap_or(0)
    }

    /// Hand the potentiometer to the next channel, wrapping to channel 0.
    pub fn advance(&mut self) -> usize {
        self.selected = match self.selected.checked_add(1) {
            Some(next) if next < N => next,
            _ => 0,
        };
        self.selected
    }

    /// Channel currently driven by the potentiometer.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of virtual channels.
    pub const fn channels(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for FakeMux<N> {
    fn default() -> Self {
        Self::new()
    }
}
