//! Mock board collaborators.
//!
//! In-memory implementations of the engine's HAL traits plus sinks that
//! capture or reject report lines.

use std::collections::HashMap;
use std::io;

use cluster_engine::{InputBus, MillisClock, StatusLed};
use cluster_inputs::{Channel, InputId, MUX_PHYSICAL_CHANNEL, descriptor};

/// Pin and ADC levels set directly by the test.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    pins: HashMap<u8, bool>,
    analog: HashMap<u8, u16>,
    pub digital_reads: usize,
    pub analog_reads: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive the pin behind `id`. Analog inputs are ignored.
    pub fn set(&mut self, id: InputId, level: bool) {
        if let Channel::Pin(pin) = descriptor(id).channel {
            self.pins.insert(pin, level);
        }
    }

    pub fn press(&mut self, id: InputId) {
        self.set(id, true);
    }

    pub fn release(&mut self, id: InputId) {
        self.set(id, false);
    }

    pub fn set_pin(&mut self, pin: u8, level: bool) {
        self.pins.insert(pin, level);
    }

    pub fn set_analog(&mut self, channel: u8, raw: u16) {
        self.analog.insert(channel, raw);
    }

    /// Position of the multiplexed gauge potentiometer.
    pub fn set_knob(&mut self, raw: u16) {
        self.set_analog(MUX_PHYSICAL_CHANNEL, raw);
    }
}

impl InputBus for MockBus {
    fn read_digital(&mut self, pin: u8) -> bool {
        self.digital_reads += 1;
        self.pins.get(&pin).copied().unwrap_or(false)
    }

    fn read_analog(&mut self, channel: u8) -> u16 {
        self.analog_reads += 1;
        self.analog.get(&channel).copied().unwrap_or(0)
    }
}

/// Manually advanced wrapping millisecond clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockClock {
    pub now: u32,
}

impl MockClock {
    pub fn starting_at(now: u32) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }

    pub fn set(&mut self, now: u32) {
        self.now = now;
    }
}

impl MillisClock for MockClock {
    fn now_ms(&mut self) -> u32 {
        self.now
    }
}

/// Records every level pushed to the LED.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockLed {
    pub levels: Vec<bool>,
}

impl MockLed {
    pub fn is_on(&self) -> bool {
        self.levels.last().copied().unwrap_or(false)
    }
}

impl StatusLed for MockLed {
    fn set(&mut self, on: bool) {
        self.levels.push(on);
    }
}

/// Sink capturing everything written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSink {
    pub bytes: Vec<u8>,
    pub writes: usize,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Captured lines without their CR+LF terminators.
    pub fn lines(&self) -> Vec<String> {
        self.text()
            .split_terminator("\r\n")
            .map(str::to_owned)
            .collect()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.writes = 0;
    }
}

impl io::Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink accepting `accept` writes and failing every one after.
#[derive(Debug, Clone, Default)]
pub struct FailingSink {
    pub accept: usize,
    pub accepted: Vec<u8>,
    pub failures: usize,
}

impl FailingSink {
    pub fn always() -> Self {
        Self::default()
    }

    pub fn after(accept: usize) -> Self {
        Self {
            accept,
            ..Self::default()
        }
    }
}

impl io::Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accept == 0 {
            self.failures += 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock sink closed"));
        }
        self.accept -= 1;
        self.accepted.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
