//! Scripted input scenarios for the simulated board
//!
//! ```yaml
//! start_ms: 4294967000
//! duration_ms: 1500
//! tick_ms: 1
//! events:
//!   - { action: press, at_ms: 100, input: gear }
//!   - { action: release, at_ms: 300, input: gear }
//!   - { action: knob, at_ms: 0, value: 512 }
//! ```

use cluster_inputs::{InputCategory, InputId, RAW_ANALOG_MAX, descriptor};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

fn default_tick_ms() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Clock reading at power-on; values near `u32::MAX` exercise rollover
    #[serde(default)]
    pub start_ms: u32,
    /// Simulated time to run after power-on
    pub duration_ms: u32,
    /// Clock advance per loop iteration
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u32,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioEvent {
    Press { at_ms: u32, input: InputId },
    Release { at_ms: u32, input: InputId },
    Knob { at_ms: u32, value: u16 },
}

impl ScenarioEvent {
    pub fn at_ms(&self) -> u32 {
        match self {
            ScenarioEvent::Press { at_ms, .. }
            | ScenarioEvent::Release { at_ms, .. }
            | ScenarioEvent::Knob { at_ms, .. } => *at_ms,
        }
    }
}

impl Scenario {
    /// Reject scenarios the simulator cannot play back.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.tick_ms == 0 {
            return Err(CliError::InvalidScenario("tick_ms must be at least 1".into()));
        }
        for event in &self.events {
            if event.at_ms() > self.duration_ms {
                return Err(CliError::InvalidScenario(format!(
                    "event at {} ms is past duration_ms {}",
                    event.at_ms(),
                    self.duration_ms
                )));
            }
            match *event {
                ScenarioEvent::Press { input, .. } | ScenarioEvent::Release { input, .. }
                    if descriptor(input).category() != InputCategory::Digital =>
                {
                    return Err(CliError::InvalidScenario(format!(
                        "input '{input}' is analog; drive it with a knob event"
                    )));
                }
                ScenarioEvent::Knob { value, .. } if value > RAW_ANALOG_MAX => {
                    return Err(CliError::InvalidScenario(format!(
                        "knob value {value} exceeds {RAW_ANALOG_MAX}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Events ordered by time; events sharing a time keep file order.
    pub fn timeline(&self) -> Vec<ScenarioEvent> {
        let mut events = self.events.clone();
        events.sort_by_key(ScenarioEvent::at_ms);
        events
    }
}
