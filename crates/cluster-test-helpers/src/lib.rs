//! Shared test utilities for the instrument cluster emulator.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`mock`] - In-memory bus, clock, LED and report sinks
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! cluster-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use cluster_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test-only crate"
)]

pub mod mock;
pub mod must;
pub mod prelude;

pub use must::*;
