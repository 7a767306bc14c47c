//! Saturating Counter.
//!
//! A small unsigned counter of configurable width that clamps at zero and at
//! its maximum instead of wrapping. The most significant bit of the counter is
//! the binary decision it encodes.

/// An N-bit saturating counter (`1 <= N <= 8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SatCounter {
    /// Current counter value, always in `0..=max`.
    value: u8,
    /// Largest representable value, `2^bits - 1`.
    max: u8,
    /// Counter width in bits.
    bits: u32,
}

impl SatCounter {
    /// Creates a counter of `bits` width holding `initial`.
    ///
    /// `initial` is clamped to the counter range. Widths above 8 are treated
    /// as 8; configuration validation rejects them before this point.
    pub fn new(bits: u32, initial: u8) -> Self {
        let bits = bits.clamp(1, u8::BITS);
        let max = ((1u16 << bits) - 1) as u8;
        Self {
            value: initial.min(max),
            max,
            bits,
        }
    }

    /// Returns the raw counter value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the largest value the counter can hold.
    #[inline]
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Returns true if the most significant bit is set.
    #[inline]
    pub const fn msb(&self) -> bool {
        (self.value >> (self.bits - 1)) & 1 == 1
    }

    /// Increments the counter, saturating at the maximum.
    #[inline]
    pub fn increment(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    /// Decrements the counter, saturating at zero.
    #[inline]
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    /// Returns the counter value as a fraction of its maximum, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        f32::from(self.value) / f32::from(self.max)
    }

    /// Overwrites the counter value, clamped to the counter range.
    pub fn set(&mut self, value: u8) {
        self.value = value.min(self.max);
    }
}
