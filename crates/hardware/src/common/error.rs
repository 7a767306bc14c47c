//! Configuration and trace error definitions.
//!
//! This module defines the error types for the value predictor. It provides:
//! 1. **Configuration Errors:** Geometry that cannot back a predictor, reported at construction.
//! 2. **Trace Errors:** I/O failures and malformed records while loading a value trace.
//!
//! Predictor lookups and updates have no failure path; a bucket that declines
//! to predict is a normal outcome, not an error.

use thiserror::Error;

/// Errors raised while parsing or validating a predictor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The history length was zero; every bucket needs at least one slot.
    #[error("history_length must be at least 1")]
    ZeroHistoryLength,

    /// The classification/history table had no buckets.
    #[error("history_table_size must be at least 1")]
    ZeroHistoryTableSize,

    /// The value prediction table had no slots.
    #[error("value_predictor_table_size must be at least 1")]
    ZeroPredictionTableSize,

    /// The history arena (`history_table_size * history_length` values) does
    /// not fit in the address space.
    #[error("history_table_size {buckets} x history_length {length} overflows the history table")]
    HistoryGeometry {
        /// Requested number of buckets.
        buckets: usize,
        /// Requested entries per bucket.
        length: usize,
    },

    /// The counter width is outside the supported range.
    #[error("ctr_bits must be between 1 and {max}, got {bits}")]
    CounterWidth {
        /// Requested width in bits.
        bits: u32,
        /// Widest supported counter.
        max: u32,
    },

    /// The initial counter value does not fit the configured width.
    #[error("initial_counter {value} exceeds the counter maximum {max}")]
    InitialCounter {
        /// Requested initial value.
        value: u8,
        /// Largest value the counter can hold.
        max: u8,
    },

    /// The configuration JSON could not be deserialized.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while loading a value trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace source could not be read.
    #[error("could not read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A record did not have the `<pc> <value>` shape.
    #[error("line {line}: {reason}")]
    Malformed {
        /// One-based line number of the bad record.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}
