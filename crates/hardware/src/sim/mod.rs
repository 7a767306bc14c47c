//! Simulation utilities and trace loading.
//!
//! Provides a loader for value traces and a simulator that replays them
//! through a value predictor, standing in for the pipeline.

/// Value trace parsing and file loading.
pub mod loader;

/// Trace-driven predictor harness.
pub mod simulator;

pub use loader::{TraceRecord, load_trace, parse_trace};
pub use simulator::Simulator;
