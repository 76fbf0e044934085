//! Scenario playback against the simulated board

use std::path::Path;

use anyhow::Result;
use cluster_engine::{EngineConfig, EngineStats, PollEngine, Runner};
use serde::Serialize;
use tracing::info;

use crate::board::{SimBoard, SimClock, SimLed};
use crate::commands::config::load_config;
use crate::loader::load_document;
use crate::output;
use crate::scenario::{Scenario, ScenarioEvent};

/// One report line as it left the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emitted {
    pub at_ms: u32,
    pub line: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Playback {
    pub lines: Vec<Emitted>,
    pub stats: EngineStats,
    pub heartbeat_toggles: u64,
}

pub fn execute(scenario: &Path, config: Option<&Path>, timestamps: bool, json: bool) -> Result<()> {
    let scenario: Scenario = load_document(scenario)?;
    scenario.validate()?;
    let config = match config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };

    let playback = play(&scenario, config)?;
    info!(
        lines = playback.lines.len(),
        ticks = playback.stats.ticks,
        rollovers = playback.stats.clock_rollovers,
        "Scenario finished"
    );

    if json {
        return output::print_json("playback", &playback);
    }
    for emitted in &playback.lines {
        if timestamps {
            println!("{:>8} {}", emitted.at_ms, emitted.line);
        } else {
            println!("{}", emitted.line);
        }
    }
    Ok(())
}

/// Run `scenario` to completion and collect every report line.
pub fn play(scenario: &Scenario, config: EngineConfig) -> Result<Playback> {
    let engine = PollEngine::new(config)?;
    let mut runner = Runner::new(
        engine,
        SimBoard::default(),
        SimClock::starting_at(scenario.start_ms),
        SimLed::default(),
        Vec::<u8>::new(),
    );

    let timeline = scenario.timeline();
    let mut pending = timeline.iter().peekable();
    let mut lines = Vec::new();
    let mut elapsed = 0u32;

    loop {
        while let Some(event) = pending.next_if(|event| event.at_ms() <= elapsed) {
            apply(runner.bus_mut(), event);
        }

        runner.step();
        collect(runner.sink_mut(), elapsed, &mut lines);

        if elapsed >= scenario.duration_ms {
            break;
        }
        let step = scenario.tick_ms.min(scenario.duration_ms - elapsed);
        elapsed += step;
        runner.clock_mut().advance(step);
    }

    let stats = *runner.engine().stats();
    let heartbeat_toggles = runner.led().toggles;
    Ok(Playback {
        lines,
        stats,
        heartbeat_toggles,
    })
}

fn apply(board: &mut SimBoard, event: &ScenarioEvent) {
    match *event {
        ScenarioEvent::Press { input, .. } => board.set(input, true),
        ScenarioEvent::Release { input, .. } => board.set(input, false),
        ScenarioEvent::Knob { value, .. } => board.set_knob(value),
    }
}

fn collect(buffer: &mut Vec<u8>, at_ms: u32, lines: &mut Vec<Emitted>) {
    if buffer.is_empty() {
        return;
    }
    let text = String::from_utf8_lossy(buffer);
    lines.extend(text.split_terminator("\r\n").map(|line| Emitted {
        at_ms,
        line: line.to_string(),
    }));
    buffer.clear();
}
