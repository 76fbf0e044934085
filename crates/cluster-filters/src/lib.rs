//! RT-Safe Input Filters for the Instrument Cluster Emulator
//!
//! This crate turns raw pin and ADC reads into stable logical values. Every
//! filter is a free function operating on a caller-owned [`InputState`], so
//! the poll engine owns all mutable state and threads it through each tick.
//!
//! # Overview
//!
//! - **Debounce**: commits a digital change once it persists for a threshold
//! - **Analog**: fixed-window block average rescaled to 0..=100
//! - **Mux**: one physical potentiometer driving several virtual channels
//!   through differential carry
//! - **Gear**: click/hold classification of a single digital input
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations in filter hot paths
//! - O(1) time complexity for all operations
//! - Saturating arithmetic on every timer and accumulator
//!
//! # Example
//!
//! ```
//! use cluster_filters::prelude::*;
//!
//! let config = DebounceConfig::default();
//! let mut state = InputState::new();
//!
//! // Raw input goes high and stays high
//! let mut edge = None;
//! for _ in 0..20 {
//!     edge = debounce_filter(&mut state, true, 1, &config);
//! }
//! assert_eq!(edge, Some(Transition::Pressed));
//! assert!(state.is_pressed());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod analog;
pub mod debounce;
pub mod gear;
pub mod mux;
pub mod prelude;
pub mod state;

pub use analog::{EpochCounter, analog_accumulate, analog_epoch_filter, rescale};
pub use debounce::{DebounceConfig, debounce_filter};
pub use gear::{GearTiming, classify_gear, gear_filter};
pub use mux::FakeMux;
pub use state::InputState;

pub use cluster_inputs::{GearHint, Transition};

/// Default digital debounce threshold in milliseconds.
pub const DEBOUNCE_MS: u32 = 20;

/// Ceiling for hold/release timers in milliseconds.
pub const TIMER_CEILING_MS: u32 = 10_000;

/// Ticks per analog averaging epoch.
pub const EPOCH_TICKS: u32 = 128;

/// Release time after which a gear episode closes.
pub const GEAR_RELEASE_MS: u32 = 250;

/// Hold time separating a short press from a long hold.
pub const GEAR_HOLD_MS: u32 = 750;
