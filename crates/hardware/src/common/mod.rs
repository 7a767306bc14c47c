//! Common types used throughout the value predictor.
//!
//! This module provides the building blocks shared across components. It includes:
//! 1. **Error Handling:** Configuration and trace loading errors.

/// Error types for configuration and trace loading.
pub mod error;

pub use error::{ConfigError, TraceError};
