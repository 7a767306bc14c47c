//! Finite Context Method (FCM) Value Predictor.
//!
//! FCM predicts an instruction's result from the sequence of values its
//! bucket produced most recently. The instruction address selects a bucket in
//! the classification and value history tables; the XOR fold of that bucket's
//! history selects a slot in the value prediction table, which holds the value
//! that last followed the same context.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `lookup()`: O(H) where H is the history length
//!   - `update()`: O(H)
//! - **Space Complexity:** O(B × H + V) for B buckets and V prediction slots
//! - **Hardware Cost:** Low - one counter read, an H-way XOR, one table read
//! - **Best Case:** Repeating value sequences (loop counters, strided pointers within a period)
//! - **Worst Case:** Heavily aliased buckets or histories whose XOR folds collide

use std::num::NonZeroUsize;

use tracing::{debug, trace};

use super::{
    ValuePredictor, classification::ClassificationTable, history::HistoryTable,
    vpt::PredictionTable,
};
use crate::common::error::ConfigError;
use crate::config::VpuConfig;

/// FCM Predictor structure.
#[derive(Clone, Debug)]
pub struct FcmPredictor {
    /// Geometry the predictor was built with.
    config: VpuConfig,
    /// Per-bucket predictability counters.
    classification: ClassificationTable,
    /// Per-bucket value histories.
    history: HistoryTable,
    /// Context-hash indexed values.
    vpt: PredictionTable,
}

impl FcmPredictor {
    /// Creates a new FCM predictor from a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by `VpuConfig::validate`.
    pub fn new(config: &VpuConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buckets = NonZeroUsize::new(config.history_table_size)
            .ok_or(ConfigError::ZeroHistoryTableSize)?;
        let length =
            NonZeroUsize::new(config.history_length).ok_or(ConfigError::ZeroHistoryLength)?;
        let slots = NonZeroUsize::new(config.value_predictor_table_size)
            .ok_or(ConfigError::ZeroPredictionTableSize)?;

        debug!(
            history_length = config.history_length,
            history_table_size = config.history_table_size,
            value_predictor_table_size = config.value_predictor_table_size,
            ctr_bits = config.ctr_bits,
            "fcm predictor allocated"
        );

        Ok(Self {
            config: config.clone(),
            classification: ClassificationTable::new(
                buckets.get(),
                config.ctr_bits,
                config.initial_counter,
            ),
            history: HistoryTable::new(buckets, length)?,
            vpt: PredictionTable::new(slots),
        })
    }

    /// Returns the geometry the predictor was built with.
    pub const fn config(&self) -> &VpuConfig {
        &self.config
    }

    /// Maps an instruction address onto its history bucket.
    #[inline]
    pub fn bucket(&self, pc: u64) -> usize {
        (pc % self.config.history_table_size as u64) as usize
    }

    /// Returns the classification counter for the bucket of `pc`.
    pub fn counter(&self, pc: u64) -> u8 {
        self.classification.counter(self.bucket(pc))
    }

    /// Returns the value history for the bucket of `pc`, oldest first.
    pub fn history(&self, pc: u64) -> &[u64] {
        self.history.history(self.bucket(pc))
    }

    /// Returns the current context hash for the bucket of `pc`.
    pub fn context_hash(&self, pc: u64) -> u64 {
        self.history.hash(self.bucket(pc))
    }

    /// Returns the prediction table slot the current context of `pc` maps to.
    pub fn vpt_index(&self, pc: u64) -> usize {
        self.vpt.index(self.context_hash(pc))
    }
}

impl ValuePredictor for FcmPredictor {
    fn name(&self) -> &'static str {
        "fcm"
    }

    /// Predicts the value for `pc` if its classification counter MSB is set.
    #[inline(always)]
    fn lookup(&self, pc: u64) -> Option<u64> {
        let bucket = self.bucket(pc);
        if !self.classification.read(bucket) {
            return None;
        }
        Some(self.vpt.get(self.history.hash(bucket)))
    }

    fn confidence(&self, pc: u64) -> f32 {
        self.classification.confidence(self.bucket(pc))
    }

    /// Trains the classifier and records `true_value` under the bucket's current context.
    ///
    /// The prediction table slot is chosen from the history as it stood
    /// before `true_value` is shifted in.
    #[inline(always)]
    fn update(&mut self, pc: u64, was_predicted: bool, was_correct: bool, true_value: u64) {
        let bucket = self.bucket(pc);
        self.classification.update(bucket, was_predicted, was_correct);

        let hash = self.history.hash(bucket);
        self.history.push(bucket, true_value);
        self.vpt.set(hash, true_value);

        trace!(
            pc,
            bucket,
            hash,
            slot = self.vpt.index(hash),
            was_predicted,
            was_correct,
            counter = self.classification.counter(bucket),
            "fcm update"
        );
    }

    fn reset(&mut self) {
        self.classification.reset();
        self.history.reset();
        self.vpt.reset();
        debug!("fcm predictor reset");
    }
}
