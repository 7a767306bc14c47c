//! Value Predictor Interface.
//!
//! This module defines the `ValuePredictor` trait that value prediction
//! implementations adhere to. The pipeline calls into a predictor at two
//! points in an instruction's lifetime: `lookup` before the result is
//! computed, and `update` once the true result is known.

/// Trait for value prediction algorithms.
///
/// `lookup` for an instruction instance must precede its `update`: the update
/// scores the classifier against the outcome of that lookup and advances the
/// context the next lookup sees.
pub trait ValuePredictor {
    /// Short identifier used in reports and logs.
    fn name(&self) -> &'static str;

    /// Predicts the result value of the instruction at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the instruction about to execute
    ///
    /// # Returns
    ///
    /// `Some(value)` if the predictor considers the instruction predictable,
    /// `None` if it declines to predict.
    fn lookup(&self, pc: u64) -> Option<u64>;

    /// Returns how strongly the predictor believes `pc` is predictable, in `[0, 1]`.
    ///
    /// Diagnostic read; may be called without a preceding `lookup`.
    fn confidence(&self, pc: u64) -> f32;

    /// Trains the predictor with the resolved result of the instruction at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the instruction
    /// * `was_predicted` - Whether the preceding `lookup` returned a value
    /// * `was_correct` - Whether that value matched `true_value`
    /// * `true_value` - The value the instruction actually produced
    fn update(&mut self, pc: u64, was_predicted: bool, was_correct: bool, true_value: u64);

    /// Restores the predictor to its freshly constructed state.
    fn reset(&mut self);
}
