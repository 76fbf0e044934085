//! Simulated board for scenario playback

use std::collections::HashMap;

use cluster_engine::{InputBus, MillisClock, StatusLed};
use cluster_inputs::{Channel, InputId, MUX_PHYSICAL_CHANNEL, descriptor};

/// Pin levels and potentiometer position set by scenario events.
#[derive(Debug, Clone, Default)]
pub struct SimBoard {
    pins: HashMap<u8, bool>,
    knob: u16,
}

impl SimBoard {
    pub fn set(&mut self, id: InputId, level: bool) {
        if let Channel::Pin(pin) = descriptor(id).channel {
            self.pins.insert(pin, level);
        }
    }

    pub fn set_knob(&mut self, raw: u16) {
        self.knob = raw;
    }
}

impl InputBus for SimBoard {
    fn read_digital(&mut self, pin: u8) -> bool {
        self.pins.get(&pin).copied().unwrap_or(false)
    }

    fn read_analog(&mut self, channel: u8) -> u16 {
        if channel == MUX_PHYSICAL_CHANNEL {
            self.knob
        } else {
            0
        }
    }
}

/// Wrapping millisecond clock advanced by the playback loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimClock {
    now: u32,
}

impl SimClock {
    pub fn starting_at(now: u32) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }
}

impl MillisClock for SimClock {
    fn now_ms(&mut self) -> u32 {
        self.now
    }
}

/// Counts heartbeat edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimLed {
    pub on: bool,
    pub toggles: u64,
}

impl StatusLed for SimLed {
    fn set(&mut self, on: bool) {
        if on != self.on {
            self.toggles = self.toggles.saturating_add(1);
        }
        self.on = on;
    }
}
