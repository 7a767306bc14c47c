//! Functional units.
//!
//! This module contains the value prediction unit and the tables it is built from.

/// Value Prediction Unit: FCM predictor, classification, history, and prediction tables.
pub mod vpu;
