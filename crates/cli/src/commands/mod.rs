//! Command implementations for clusterctl

pub mod config;
pub mod inputs;
pub mod simulate;
