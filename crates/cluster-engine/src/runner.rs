//! Millisecond control loop
//!
//! Drives a [`PollEngine`] from a wrapping millisecond clock. A clock reading
//! lower than the previous one is a rollover: the runner rebases on it and
//! ticks with zero elapsed time instead of computing a wrapped delta.

use std::io::Write;

use tracing::debug;

use crate::{EngineResult, InputBus, MillisClock, PollEngine, StatusLed};

/// Owns the engine and its collaborators for the life of the loop.
#[derive(Debug)]
pub struct Runner<B, C, L, W> {
    engine: PollEngine,
    bus: B,
    clock: C,
    led: L,
    sink: W,
    last_ms: u32,
    led_on: bool,
}

impl<B, C, L, W> Runner<B, C, L, W>
where
    B: InputBus,
    C: MillisClock,
    L: StatusLed,
    W: Write,
{
    /// Take the first clock reading as the time base and push the initial
    /// heartbeat level to the LED.
    pub fn new(engine: PollEngine, bus: B, mut clock: C, mut led: L, sink: W) -> Self {
        let last_ms = clock.now_ms();
        let led_on = engine.heartbeat();
        led.set(led_on);
        Self {
            engine,
            bus,
            clock,
            led,
            sink,
            last_ms,
            led_on,
        }
    }

    /// One loop iteration.
    ///
    /// Ticks when at least one scheduling quantum elapsed (or the clock
    /// rolled over), then flushes reports. Returns the lines written.
    pub fn step(&mut self) -> usize {
        let now = self.clock.now_ms();
        if now < self.last_ms {
            debug!(previous_ms = self.last_ms, now_ms = now, "Clock rollover");
            self.engine.record_rollover();
            self.last_ms = now;
            self.engine.tick(0, &mut self.bus);
        } else {
            let elapsed = now - self.last_ms;
            if elapsed < self.engine.config().tick_period_ms {
                return 0;
            }
            self.last_ms = now;
            self.engine.tick(elapsed, &mut self.bus);
        }

        let heartbeat = self.engine.heartbeat();
        if heartbeat != self.led_on {
            self.led_on = heartbeat;
            self.led.set(heartbeat);
        }

        self.engine.flush(&mut self.sink)
    }

    /// Run forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// The driven engine.
    pub fn engine(&self) -> &PollEngine {
        &self.engine
    }

    /// Input bus, for injecting readings between steps.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Millisecond clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Report sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Report sink, mutably.
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Heartbeat LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Flush the sink and hand it back.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Sink`] when the final flush fails.
    pub fn finish(mut self) -> EngineResult<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
