//! Simulator: drives a value predictor from a stream of retired values.
//!
//! Stands in for the pipeline: for every record it issues the lookup, decides
//! whether the prediction was correct, reports the outcome back through the
//! update, and tallies the result.

use tracing::debug;

use super::loader::TraceRecord;
use crate::common::error::ConfigError;
use crate::config::Config;
use crate::core::units::vpu::{FcmPredictor, ValuePredictor};
use crate::stats::VpuStats;

/// Trace-driven harness around a value predictor.
#[derive(Debug)]
pub struct Simulator<P: ValuePredictor = FcmPredictor> {
    /// The predictor under test.
    pub predictor: P,
    /// Outcomes collected so far.
    pub stats: VpuStats,
}

impl Simulator<FcmPredictor> {
    /// Creates a simulator around an FCM predictor built from `config`.
    ///
    /// # Errors
    ///
    /// Returns the `ConfigError` raised while building the predictor.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(FcmPredictor::new(&config.vpu)?))
    }
}

impl<P: ValuePredictor> Simulator<P> {
    /// Creates a simulator around an existing predictor.
    pub fn new(predictor: P) -> Self {
        let stats = VpuStats::new(predictor.name());
        Self { predictor, stats }
    }

    /// Runs one lookup/update pair for `record`.
    ///
    /// Returns the value the predictor offered, if any.
    pub fn step(&mut self, record: TraceRecord) -> Option<u64> {
        let prediction = self.predictor.lookup(record.pc);
        let was_predicted = prediction.is_some();
        let was_correct = prediction == Some(record.value);

        self.predictor.update(record.pc, was_predicted, was_correct, record.value);
        self.stats.record(was_predicted, was_correct);
        prediction
    }

    /// Replays every record in order.
    pub fn run(&mut self, records: &[TraceRecord]) -> &VpuStats {
        for &record in records {
            let _ = self.step(record);
        }
        debug!(
            lookups = self.stats.lookups,
            predicted = self.stats.predicted,
            correct = self.stats.correct,
            "trace replay finished"
        );
        &self.stats
    }

    /// Resets the predictor and discards collected statistics.
    pub fn reset(&mut self) {
        self.predictor.reset();
        self.stats = VpuStats::new(self.predictor.name());
    }
}
