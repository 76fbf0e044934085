//! Input registry and report protocol for the instrument cluster emulator
//!
//! This crate describes the panel: which logical inputs exist, which pin or
//! analog channel backs each of them, how each one is interpreted, and the
//! text line each one produces on the serial link.
//!
//! ## Features
//! - Strongly-typed [`InputId`] indexing a compile-time descriptor table
//! - Tagged [`Channel`] type separating real pins, real analog channels and
//!   virtual (multiplexed) analog channels
//! - CR+LF terminated report lines rendered without heap allocation

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod ids;
pub mod report;
pub mod table;
pub mod types;

pub use ids::*;
pub use report::*;
pub use table::*;
pub use types::*;

use thiserror::Error;

/// Lookup failures against the input table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputsError {
    /// No input has this name.
    #[error("Unknown input name: {0}")]
    UnknownInput(String),

    /// Gauge code is not one of `F`, `O`, `T`.
    #[error("Unknown gauge code: {0}")]
    UnknownGauge(char),

    /// Index past the end of the table.
    #[error("Input index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// Result type for input table lookups.
pub type InputsResult<T> = Result<T, InputsError>;

/// Largest raw value an analog read primitive produces (10-bit ADC).
pub const RAW_ANALOG_MAX: u16 = 1023;

/// Largest value a gauge report carries after rescaling.
pub const GAUGE_SCALE_MAX: u8 = 100;

/// Physical analog channel shared by all virtual gauge channels (A0).
pub const MUX_PHYSICAL_CHANNEL: u8 = 0;

/// Number of virtual analog channels multiplexed onto [`MUX_PHYSICAL_CHANNEL`].
pub const VIRTUAL_CHANNEL_COUNT: usize = 3;

/// Line terminator required by the host protocol.
pub const LINE_ENDING: &str = "\r\n";
