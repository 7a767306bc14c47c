//! Core predictor implementation.
//!
//! This module contains the functional units a pipeline model calls into.

/// Functional units (value prediction).
pub mod units;
