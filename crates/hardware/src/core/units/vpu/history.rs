//! Value History Table.
//!
//! Each bucket keeps the last `history_length` true values observed for the
//! instructions that map onto it, ordered oldest (slot 0) to newest
//! (slot `history_length - 1`). The XOR fold of a bucket's history is the
//! context hash used to index the value prediction table.
//!
//! All buckets live in one flat buffer; bucket `b` occupies
//! `[b * history_length, (b + 1) * history_length)`.

use std::num::NonZeroUsize;

use crate::common::error::ConfigError;

/// Fixed-geometry per-bucket value history.
#[derive(Clone, Debug)]
pub struct HistoryTable {
    /// Concatenated bucket histories.
    values: Vec<u64>,
    /// Entries per bucket.
    length: usize,
}

impl HistoryTable {
    /// Creates `buckets` zeroed histories of `length` entries each.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HistoryGeometry` if `buckets * length` overflows.
    pub fn new(buckets: NonZeroUsize, length: NonZeroUsize) -> Result<Self, ConfigError> {
        let total = buckets
            .checked_mul(length)
            .ok_or(ConfigError::HistoryGeometry {
                buckets: buckets.get(),
                length: length.get(),
            })?;
        Ok(Self {
            values: vec![0; total.get()],
            length: length.get(),
        })
    }

    /// Entries per bucket.
    pub const fn history_length(&self) -> usize {
        self.length
    }

    /// Number of buckets.
    pub fn buckets(&self) -> usize {
        self.values.len() / self.length
    }

    /// Returns the history of `bucket`, oldest first.
    #[inline]
    pub fn history(&self, bucket: usize) -> &[u64] {
        let start = bucket * self.length;
        &self.values[start..start + self.length]
    }

    /// XOR-folds the history of `bucket` into one context hash.
    #[inline]
    pub fn hash(&self, bucket: usize) -> u64 {
        self.history(bucket).iter().fold(0, |acc, &v| acc ^ v)
    }

    /// Shifts `value` into `bucket` as its newest entry.
    ///
    /// The oldest entry is discarded.
    pub fn push(&mut self, bucket: usize, value: u64) {
        let start = bucket * self.length;
        let slots = &mut self.values[start..start + self.length];
        slots.rotate_left(1);
        slots[self.length - 1] = value;
    }

    /// Clears every history back to zero.
    pub fn reset(&mut self) {
        self.values.fill(0);
    }
}
