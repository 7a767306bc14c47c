//! Configuration system for the value predictor.
//!
//! This module defines the configuration structures used to size the value
//! prediction unit. It provides:
//! 1. **Defaults:** Baseline table geometry and counter width.
//! 2. **Structures:** A root `Config` wrapping the `VpuConfig` table parameters.
//! 3. **Validation:** Construction-time rejection of geometry that would make
//!    table indexing undefined (zero-sized or unaddressable tables, unsupported
//!    counter widths).
//!
//! Configuration is supplied as JSON (`Config::from_json`) or via `Config::default()`.

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants for the value predictor.
///
/// These values define the baseline predictor geometry when not explicitly
/// overridden in a JSON configuration.
mod defaults {
    /// Number of past values kept per history bucket.
    pub const HISTORY_LENGTH: usize = 4;

    /// Number of classification/history buckets (1024 entries).
    ///
    /// Instruction addresses are folded onto buckets by modulo, so smaller
    /// tables alias more instructions together.
    pub const HISTORY_TABLE_SIZE: usize = 1024;

    /// Number of value prediction table slots (4096 entries).
    pub const VALUE_PREDICTOR_TABLE_SIZE: usize = 4096;

    /// Width of the classification saturating counters in bits.
    pub const CTR_BITS: u32 = 2;

    /// Initial classification counter value (strongly "don't predict").
    pub const INITIAL_COUNTER: u8 = 0;
}

/// Widest classification counter the unit supports, in bits.
///
/// Counters are stored in a `u8`.
pub const MAX_CTR_BITS: u32 = u8::BITS;

/// Root configuration structure.
///
/// Aggregates the predictor configuration. Use `Config::default()` or
/// deserialize from JSON with `Config::from_json`.
///
/// # Examples
///
/// ```
/// use vpsim_core::config::Config;
///
/// let json = r#"{ "vpu": { "history_length": 2, "ctr_bits": 3 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.vpu.history_length, 2);
/// assert_eq!(config.vpu.ctr_bits, 3);
/// assert_eq!(config.vpu.history_table_size, 1024);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Value prediction unit geometry.
    #[serde(default)]
    pub vpu: VpuConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON is malformed or has the wrong
    /// shape, or any validation error reported by `VpuConfig::validate`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section of the configuration.
    ///
    /// # Errors
    ///
    /// Propagates the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vpu.validate()
    }
}

/// Value prediction unit configuration.
///
/// All sizes are fixed for the lifetime of a predictor instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VpuConfig {
    /// Number of values remembered per history bucket.
    #[serde(default = "VpuConfig::default_history_length")]
    pub history_length: usize,

    /// Number of classification and value history buckets.
    #[serde(default = "VpuConfig::default_history_table_size")]
    pub history_table_size: usize,

    /// Number of slots in the value prediction table.
    #[serde(default = "VpuConfig::default_value_predictor_table_size")]
    pub value_predictor_table_size: usize,

    /// Width of each classification counter in bits (`1..=8`).
    #[serde(default = "VpuConfig::default_ctr_bits")]
    pub ctr_bits: u32,

    /// Value every classification counter starts (and resets) at.
    #[serde(default = "VpuConfig::default_initial_counter")]
    pub initial_counter: u8,
}

impl VpuConfig {
    /// Returns the default history length.
    fn default_history_length() -> usize {
        defaults::HISTORY_LENGTH
    }

    /// Returns the default number of history buckets.
    fn default_history_table_size() -> usize {
        defaults::HISTORY_TABLE_SIZE
    }

    /// Returns the default prediction table size.
    fn default_value_predictor_table_size() -> usize {
        defaults::VALUE_PREDICTOR_TABLE_SIZE
    }

    /// Returns the default counter width.
    fn default_ctr_bits() -> u32 {
        defaults::CTR_BITS
    }

    /// Returns the default initial counter value.
    fn default_initial_counter() -> u8 {
        defaults::INITIAL_COUNTER
    }

    /// Largest value a counter of `ctr_bits` width can hold.
    ///
    /// Only meaningful once `ctr_bits` has been validated.
    pub fn counter_max(&self) -> u8 {
        ((1u16 << self.ctr_bits.min(MAX_CTR_BITS)) - 1) as u8
    }

    /// Checks that the geometry can back a predictor.
    ///
    /// Every table must have at least one entry so that modulo indexing is
    /// always defined, the flat history arena must be addressable, and the
    /// counter must fit the `u8` storage.
    ///
    /// # Errors
    ///
    /// Returns the `ConfigError` variant naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_length == 0 {
            return Err(ConfigError::ZeroHistoryLength);
        }
        if self.history_table_size == 0 {
            return Err(ConfigError::ZeroHistoryTableSize);
        }
        if self.value_predictor_table_size == 0 {
            return Err(ConfigError::ZeroPredictionTableSize);
        }
        if self.history_table_size.checked_mul(self.history_length).is_none() {
            return Err(ConfigError::HistoryGeometry {
                buckets: self.history_table_size,
                length: self.history_length,
            });
        }
        if self.ctr_bits == 0 || self.ctr_bits > MAX_CTR_BITS {
            return Err(ConfigError::CounterWidth {
                bits: self.ctr_bits,
                max: MAX_CTR_BITS,
            });
        }
        let max = self.counter_max();
        if self.initial_counter > max {
            return Err(ConfigError::InitialCounter {
                value: self.initial_counter,
                max,
            });
        }
        Ok(())
    }
}

impl Default for VpuConfig {
    /// Creates the baseline predictor geometry.
    fn default() -> Self {
        Self {
            history_length: defaults::HISTORY_LENGTH,
            history_table_size: defaults::HISTORY_TABLE_SIZE,
            value_predictor_table_size: defaults::VALUE_PREDICTOR_TABLE_SIZE,
            ctr_bits: defaults::CTR_BITS,
            initial_counter: defaults::INITIAL_COUNTER,
        }
    }
}
