//! Poll engine and control loop for the instrument cluster emulator
//!
//! This crate wires the filters of `cluster-filters` to the descriptor table
//! of `cluster-inputs`:
//!
//! - [`PollEngine`]: one tick filters every input, one flush reports and
//!   clears whatever became pending
//! - [`Runner`]: millisecond loop with clock-rollover handling and a
//!   heartbeat LED
//! - [`InputBus`], [`MillisClock`], [`StatusLed`]: board collaborators
//! - [`EngineConfig`]: timing parameters, deserializable from JSON or YAML
//!
//! # Example
//!
//! ```
//! use cluster_engine::{EngineConfig, InputBus, PollEngine};
//!
//! struct Idle;
//!
//! impl InputBus for Idle {
//!     fn read_digital(&mut self, _pin: u8) -> bool { false }
//!     fn read_analog(&mut self, _channel: u8) -> u16 { 0 }
//! }
//!
//! let mut engine = PollEngine::new(EngineConfig::default())?;
//! let mut out = Vec::new();
//! for _ in 0..128 {
//!     engine.tick(1, &mut Idle);
//!     engine.flush(&mut out);
//! }
//! assert_eq!(out, b"GAUG F 0\r\nGAUG O 0\r\nGAUG T 0\r\n");
//! # Ok::<(), cluster_engine::EngineError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod hal;
pub mod report;
pub mod runner;
pub mod stats;

pub use config::{EngineConfig, MAX_EPOCH_TICKS};
pub use engine::PollEngine;
pub use error::{ConfigError, EngineError, EngineResult};
pub use hal::{InputBus, MillisClock, NoStatusLed, StatusLed};
pub use report::render;
pub use runner::Runner;
pub use stats::EngineStats;
