//! Poll engine
//!
//! One [`PollEngine::tick`] runs every filter for every input; one
//! [`PollEngine::flush`] renders the inputs left pending and then clears
//! them. Callers must flush between ticks to get one line per state change;
//! [`crate::Runner`] does exactly that.

use std::io::Write;

use cluster_filters::{
    DebounceConfig, EpochCounter, FakeMux, GearTiming, InputState, Transition,
    analog_accumulate, analog_epoch_filter, debounce_filter, gear_filter,
};
use cluster_inputs::{
    Channel, INPUT_COUNT, INPUTS, InputCategory, InputDescriptor, InputId, InputMode,
    MAX_LINE_LEN, MUX_PHYSICAL_CHANNEL, first_table_defect,
};
use tracing::{debug, info, trace, warn};

use crate::{EngineConfig, EngineError, EngineResult, EngineStats, InputBus, render};

#[derive(Debug, Clone, Copy)]
struct Slot {
    descriptor: &'static InputDescriptor,
    state: InputState,
}

/// Filtering and reporting core for the whole panel.
///
/// # RT Safety
///
/// - All state lives inline; `tick` and `flush` never allocate
/// - Bounded work per call: one pass over the fixed input table
#[derive(Debug, Clone)]
pub struct PollEngine {
    config: EngineConfig,
    debounce: DebounceConfig,
    gear: GearTiming,
    slots: [Slot; INPUT_COUNT],
    epoch: EpochCounter,
    mux: FakeMux,
    heartbeat_ms: u32,
    heartbeat_on: bool,
    boot_report: bool,
    stats: EngineStats,
}

impl PollEngine {
    /// Build an engine over the reference panel table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when `config` fails validation and
    /// [`EngineError::DescriptorTable`] when the descriptor table is
    /// inconsistent.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        if let Some(defect) = first_table_defect() {
            return Err(EngineError::DescriptorTable(defect.id));
        }

        info!(
            inputs = INPUT_COUNT,
            debounce_ms = config.debounce_ms,
            epoch_ticks = config.epoch_ticks,
            report_on_boot = config.report_on_boot,
            "Poll engine ready"
        );

        Ok(Self {
            config,
            debounce: config.debounce(),
            gear: config.gear_timing(),
            slots: INPUTS.each_ref().map(|descriptor| Slot {
                descriptor,
                state: InputState::new(),
            }),
            epoch: EpochCounter::new(config.epoch_ticks),
            mux: FakeMux::new(),
            heartbeat_ms: 0,
            heartbeat_on: false,
            boot_report: config.report_on_boot,
            stats: EngineStats::default(),
        })
    }

    /// Run one scheduling quantum.
    ///
    /// `elapsed_ms` above the configured clamp is reduced to it. Order within
    /// the tick: heartbeat, epoch counter, multiplexer, then every input in
    /// table order.
    pub fn tick<B: InputBus + ?Sized>(&mut self, elapsed_ms: u32, bus: &mut B) {
        let elapsed = if elapsed_ms > self.config.max_tick_ms {
            EngineStats::bump(&mut self.stats.clamped_ticks);
            warn!(
                elapsed_ms,
                max_tick_ms = self.config.max_tick_ms,
                "Clamping oversize tick"
            );
            self.config.max_tick_ms
        } else {
            elapsed_ms
        };
        EngineStats::bump(&mut self.stats.ticks);

        self.advance_heartbeat(elapsed);
        let epoch_due = self.epoch.advance();
        self.mux.update(bus.read_analog(MUX_PHYSICAL_CHANNEL));

        let force = self.boot_report;
        for slot in &mut self.slots {
            let descriptor = slot.descriptor;
            let state = &mut slot.state;

            match (descriptor.category(), descriptor.channel) {
                (InputCategory::Digital, Channel::Pin(pin)) => {
                    let raw = bus.read_digital(pin);
                    let edge = debounce_filter(state, raw, elapsed, &self.debounce);
                    if let Some(edge) = edge {
                        debug!(input = %descriptor.id, ?edge, "Committed edge");
                    }

                    if descriptor.mode == InputMode::Gear {
                        gear_filter(state, edge, &self.gear);
                    } else if edge.is_some() {
                        state.pending_report = true;
                    }

                    if descriptor.id == InputId::SwitchAnalog
                        && edge == Some(Transition::Pressed)
                    {
                        let selected = self.mux.advance();
                        debug!(channel = selected, "Multiplexer selection changed");
                    }
                }
                (InputCategory::Analog, channel) => {
                    let raw = match channel {
                        Channel::Analog(ch) => bus.read_analog(ch),
                        Channel::Virtual(index) => self.mux.read(usize::from(index)),
                        Channel::Pin(_) => 0,
                    };
                    analog_accumulate(state, raw);
                    if epoch_due {
                        analog_epoch_filter(state, self.config.epoch_ticks, force);
                    }
                }
                // Rejected by the table check in `new`.
                (InputCategory::Digital, _) => {}
            }
        }

        if epoch_due {
            trace!(force, "Analog epoch closed");
            self.boot_report = false;
        }
    }

    /// Render every pending input to `sink`, then clear all pending flags.
    ///
    /// A failed write drops that line and is counted; the rest of the pass
    /// still runs. Returns the number of lines written.
    pub fn flush<W: Write + ?Sized>(&mut self, sink: &mut W) -> usize {
        let mut written = 0usize;
        for slot in &self.slots {
            if !slot.state.pending_report {
                continue;
            }
            let Some(line) = render(slot.descriptor, &slot.state, &self.gear) else {
                continue;
            };

            let mut buf = [0u8; MAX_LINE_LEN];
            match sink.write_all(line.encode(&mut buf)) {
                Ok(()) => {
                    written = written.saturating_add(1);
                    EngineStats::bump(&mut self.stats.lines_written);
                }
                Err(err) => {
                    EngineStats::bump(&mut self.stats.lines_dropped);
                    warn!(input = %slot.descriptor.id, error = %err, "Dropping report line");
                }
            }
        }

        for slot in &mut self.slots {
            if slot.state.pending_report {
                slot.state.clear_report();
            }
        }
        written
    }

    /// Runtime state of `id`.
    pub fn state(&self, id: InputId) -> InputState {
        self.slots
            .get(id.index())
            .map(|slot| slot.state)
            .unwrap_or_default()
    }

    /// Any input waiting for a report pass.
    pub fn has_pending(&self) -> bool {
        self.slots.iter().any(|slot| slot.state.pending_report)
    }

    /// Current heartbeat LED level.
    pub fn heartbeat(&self) -> bool {
        self.heartbeat_on
    }

    /// Virtual channel currently driven by the potentiometer.
    pub fn selected_channel(&self) -> usize {
        self.mux.selected()
    }

    /// Validated configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    pub(crate) fn record_rollover(&mut self) {
        EngineStats::bump(&mut self.stats.clock_rollovers);
    }

    fn advance_heartbeat(&mut self, elapsed: u32) {
        let period = self.config.heartbeat_period_ms.max(1);
        self.heartbeat_ms = self.heartbeat_ms.saturating_add(elapsed);
        if self.heartbeat_ms >= period {
            self.heartbeat_ms %= period;
            self.heartbeat_on = !self.heartbeat_on;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Board {
        pins: [bool; 64],
        knob: u16,
    }

    impl Default for Board {
        fn default() -> Self {
            Self {
                pins: [false; 64],
                knob: 0,
            }
        }
    }

    impl InputBus for Board {
        fn read_digital(&mut self, pin: u8) -> bool {
            self.pins.get(usize::from(pin)).copied().unwrap_or(false)
        }

        fn read_analog(&mut self, channel: u8) -> u16 {
            if channel == MUX_PHYSICAL_CHANNEL { self.knob } else { 0 }
        }
    }

    impl Board {
        fn set(&mut self, pin: u8, level: bool) {
            if let Some(slot) = self.pins.get_mut(usize::from(pin)) {
                *slot = level;
            }
        }
    }

    fn quiet_engine() -> Result<PollEngine, EngineError> {
        PollEngine::new(EngineConfig {
            report_on_boot: false,
            ..EngineConfig::default()
        })
    }

    fn run(engine: &mut PollEngine, board: &mut Board, ms: u32) -> String {
        let mut out = Vec::new();
        for _ in 0..ms {
            engine.tick(1, board);
            engine.flush(&mut out);
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = PollEngine::new(EngineConfig {
            epoch_ticks: 0,
            ..EngineConfig::default()
        });
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn test_press_and_release_lines() -> Result<(), EngineError> {
        let mut engine = quiet_engine()?;
        let mut board = Board::default();

        board.set(10, true);
        assert_eq!(run(&mut engine, &mut board, 30), "ACCL P\r\n");
        board.set(10, false);
        assert_eq!(run(&mut engine, &mut board, 30), "ACCL R\r\n");
        assert!(!engine.has_pending());
        Ok(())
    }

    #[test]
    fn test_switch_analog_advances_mux_silently() -> Result<(), EngineError> {
        let mut engine = quiet_engine()?;
        let mut board = Board::default();

        board.set(8, true);
        assert_eq!(run(&mut engine, &mut board, 30), "");
        assert_eq!(engine.selected_channel(), 1);
        board.set(8, false);
        assert_eq!(run(&mut engine, &mut board, 30), "");
        assert_eq!(engine.selected_channel(), 1);
        Ok(())
    }

    #[test]
    fn test_oversize_tick_is_clamped() -> Result<(), EngineError> {
        let mut engine = quiet_engine()?;
        let mut board = Board::default();
        board.set(9, true);

        engine.tick(5_000, &mut board);
        assert_eq!(engine.stats().clamped_ticks, 1);
        assert!(engine.state(InputId::Brake).is_pressed());

        engine.tick(100, &mut board);
        assert_eq!(engine.state(InputId::Brake).hold_ms, 100);
        Ok(())
    }

    #[test]
    fn test_heartbeat_toggles() -> Result<(), EngineError> {
        let mut engine = quiet_engine()?;
        let mut board = Board::default();
        for _ in 0..499 {
            engine.tick(1, &mut board);
        }
        assert!(!engine.heartbeat());
        engine.tick(1, &mut board);
        assert!(engine.heartbeat());
        for _ in 0..500 {
            engine.tick(1, &mut board);
        }
        assert!(!engine.heartbeat());
        Ok(())
    }

    #[test]
    fn test_boot_report_once() -> Result<(), EngineError> {
        let mut engine = PollEngine::new(EngineConfig::default())?;
        let mut board = Board::default();

        let first = run(&mut engine, &mut board, 128);
        assert_eq!(first, "GAUG F 0\r\nGAUG O 0\r\nGAUG T 0\r\n");
        assert_eq!(run(&mut engine, &mut board, 128), "");
        Ok(())
    }
}
