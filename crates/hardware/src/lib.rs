//! Finite Context Method value predictor library.
//!
//! This crate implements the value prediction unit of a processor pipeline
//! simulator with the following:
//! 1. **Core:** The FCM predictor and its classification, value history, and prediction tables.
//! 2. **Configuration:** Table geometry with defaults, JSON loading, and validation.
//! 3. **Simulation:** Value trace loading and a trace-driven replay harness.
//! 4. **Statistics:** Prediction coverage and accuracy collection and reporting.

/// Common types (error definitions).
pub mod common;
/// Predictor configuration (defaults, geometry, validation).
pub mod config;
/// Predictor core (value prediction unit and its tables).
pub mod core;
/// Trace loader and replay harness.
pub mod sim;
/// Value prediction statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// FCM value predictor; construct with `FcmPredictor::new`.
pub use crate::core::units::vpu::FcmPredictor;
/// Trait the pipeline drives value predictors through.
pub use crate::core::units::vpu::ValuePredictor;
/// Trace-driven harness; construct with `Simulator::from_config`.
pub use crate::sim::Simulator;
