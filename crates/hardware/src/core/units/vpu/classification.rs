//! Classification Table.
//!
//! One saturating counter per history bucket decides whether the unit should
//! attempt a value prediction for instructions mapping to that bucket.
//!
//! # Training policy
//!
//! | attempted | correct | counter   |
//! |-----------|---------|-----------|
//! | yes       | yes     | increment |
//! | yes       | no      | decrement |
//! | no        | -       | increment |
//!
//! Declining to predict is not penalised: the counter climbs so the bucket
//! retries prediction soon.

use super::counter::SatCounter;

/// Per-bucket saturating counters.
#[derive(Clone, Debug)]
pub struct ClassificationTable {
    /// One counter per bucket.
    counters: Vec<SatCounter>,
    /// Value counters start at and return to on reset.
    initial: u8,
}

impl ClassificationTable {
    /// Creates a table of `size` counters, each `bits` wide and starting at `initial`.
    pub fn new(size: usize, bits: u32, initial: u8) -> Self {
        Self {
            counters: vec![SatCounter::new(bits, initial); size],
            initial,
        }
    }

    /// Number of buckets in the table.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if the table has no buckets.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Returns the predict/don't-predict decision for `bucket`.
    #[inline]
    pub fn read(&self, bucket: usize) -> bool {
        self.counters[bucket].msb()
    }

    /// Returns the counter for `bucket` as a fraction of its maximum.
    pub fn confidence(&self, bucket: usize) -> f32 {
        self.counters[bucket].fraction()
    }

    /// Returns the raw counter value for `bucket`.
    pub fn counter(&self, bucket: usize) -> u8 {
        self.counters[bucket].value()
    }

    /// Trains the counter for `bucket` with the outcome of the last lookup.
    pub fn update(&mut self, bucket: usize, was_predicted: bool, was_correct: bool) {
        let ctr = &mut self.counters[bucket];
        if was_predicted && !was_correct {
            ctr.decrement();
        } else {
            ctr.increment();
        }
    }

    /// Returns every counter to its initial value.
    pub fn reset(&mut self) {
        let initial = self.initial;
        self.counters.iter_mut().for_each(|c| c.set(initial));
    }
}
