//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use cluster_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_parse, must_some, must_with};

pub use crate::mock::{CaptureSink, FailingSink, MockBus, MockClock, MockLed};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
