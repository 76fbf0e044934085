//! Prelude for the filters crate.
//!
//! Re-exports the state record, every filter function and its tuning type.
//!
//! # Example
//!
//! ```
//! use cluster_filters::prelude::*;
//!
//! let mut mux: FakeMux = FakeMux::new();
//! mux.update(300);
//! assert_eq!(mux.read(0), 300);
//! ```

pub use crate::analog::{EpochCounter, analog_accumulate, analog_epoch_filter, rescale};
pub use crate::debounce::{DebounceConfig, debounce_filter};
pub use crate::gear::{GearTiming, classify_gear, gear_filter};
pub use crate::mux::FakeMux;
pub use crate::state::InputState;
pub use cluster_inputs::{GearHint, Transition};
