//! Board collaborators
//!
//! The engine never touches hardware directly. A board port implements these
//! traits over its pin/ADC primitives; tests and the host simulator implement
//! them over plain memory.

/// Raw read primitives.
pub trait InputBus {
    /// Active-high level of a digital pin.
    fn read_digital(&mut self, pin: u8) -> bool;

    /// Raw 0..=1023 reading of a physical analog channel.
    fn read_analog(&mut self, channel: u8) -> u16;
}

/// Monotonic millisecond clock that may wrap.
pub trait MillisClock {
    /// Milliseconds since an arbitrary origin.
    fn now_ms(&mut self) -> u32;
}

/// Heartbeat indicator.
pub trait StatusLed {
    /// Drive the LED on or off.
    fn set(&mut self, on: bool);
}

/// Status LED for boards without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoStatusLed;

impl StatusLed for NoStatusLed {
    fn set(&mut self, _on: bool) {}
}

impl<T: InputBus + ?Sized> InputBus for &mut T {
    fn read_digital(&mut self, pin: u8) -> bool {
        (**self).read_digital(pin)
    }

    fn read_analog(&mut self, channel: u8) -> u16 {
        (**self).read_analog(channel)
    }
}

impl<T: MillisClock + ?Sized> MillisClock for &mut T {
    fn now_ms(&mut self) -> u32 {
        (**self).now_ms()
    }
}

impl<T: StatusLed + ?Sized> StatusLed for &mut T {
    fn set(&mut self, on: bool) {
        (**self).set(on);
    }
}
