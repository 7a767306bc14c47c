//! Value Prediction Table (VPT).
//!
//! A direct-mapped table of values indexed by a context hash. Unlike the BTB
//! there is no tag or valid bit: a slot always returns whatever was last
//! written to it, and a write always replaces the previous occupant.

use std::num::NonZeroUsize;

/// Direct-mapped value store indexed by context hash.
#[derive(Clone, Debug)]
pub struct PredictionTable {
    /// Stored values, one per slot.
    slots: Vec<u64>,
}

impl PredictionTable {
    /// Creates a table of `size` zeroed slots.
    ///
    /// The table is never empty, so `index` is always defined.
    pub fn new(size: NonZeroUsize) -> Self {
        Self {
            slots: vec![0; size.get()],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maps a context hash onto a slot index.
    #[inline]
    pub fn index(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    /// Reads the value stored for `hash`.
    #[inline]
    pub fn get(&self, hash: u64) -> u64 {
        self.slots[self.index(hash)]
    }

    /// Stores `value` for `hash`, replacing the slot's previous value.
    #[inline]
    pub fn set(&mut self, hash: u64, value: u64) {
        let idx = self.index(hash);
        self.slots[idx] = value;
    }

    /// Zeroes every slot.
    pub fn reset(&mut self) {
        self.slots.fill(0);
    }
}
