//! Value prediction unit (VPU) implementations.
//!
//! This module contains the Finite Context Method value predictor and the
//! tables it is built from: the classification table of saturating counters,
//! the per-bucket value history table, and the value prediction table.

pub use self::fcm::FcmPredictor;
pub use self::value_predictor::ValuePredictor;

/// Value predictor trait.
pub mod value_predictor;

/// Saturating counter primitive.
pub mod counter;

/// Per-bucket predictability counters.
pub mod classification;

/// Per-bucket value history and context hashing.
pub mod history;

/// Context-hash indexed value storage.
pub mod vpt;

/// Finite Context Method predictor.
pub mod fcm;
