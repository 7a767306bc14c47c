//! Value History Table Tests.
//!
//! Verifies shift-and-insert ordering, eviction of the oldest value,
//! constant length, XOR-fold hashing, and hash purity.

use pretty_assertions::assert_eq;
use vpsim_core::common::error::ConfigError;
use vpsim_core::core::units::vpu::history::HistoryTable;

use crate::common::nz;

fn history(buckets: usize, length: usize) -> HistoryTable {
    HistoryTable::new(nz(buckets), nz(length)).unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Shift register
// ══════════════════════════════════════════════════════════

#[test]
fn fresh_history_is_zeroed() {
    let h = history(4, 3);
    assert_eq!(h.buckets(), 4);
    assert_eq!(h.history_length(), 3);
    assert_eq!(h.history(2), &[0, 0, 0]);
    assert_eq!(h.hash(2), 0);
}

#[test]
fn push_writes_newest_slot_and_shifts_down() {
    let mut h = history(1, 3);
    h.push(0, 10);
    assert_eq!(h.history(0), &[0, 0, 10]);
    h.push(0, 20);
    assert_eq!(h.history(0), &[0, 10, 20]);
    h.push(0, 30);
    assert_eq!(h.history(0), &[10, 20, 30]);
}

#[test]
fn push_evicts_oldest() {
    let mut h = history(1, 3);
    for v in [1, 2, 3, 4] {
        h.push(0, v);
    }
    assert_eq!(h.history(0), &[2, 3, 4], "value 1 must be evicted");
    assert_eq!(h.history(0).len(), 3);
}

#[test]
fn single_entry_history_keeps_only_latest() {
    let mut h = history(2, 1);
    h.push(1, 5);
    h.push(1, 9);
    assert_eq!(h.history(1), &[9]);
    assert_eq!(h.hash(1), 9);
}

// ══════════════════════════════════════════════════════════
// 2. Context hash
// ══════════════════════════════════════════════════════════

#[test]
fn hash_is_xor_of_all_entries() {
    let mut h = history(1, 3);
    h.push(0, 0b1100);
    h.push(0, 0b1010);
    h.push(0, 0b0001);
    assert_eq!(h.hash(0), 0b1100 ^ 0b1010 ^ 0b0001);
}

/// Two different histories can fold to the same hash; that is accepted.
#[test]
fn distinct_histories_can_collide() {
    let mut a = history(1, 2);
    let mut b = history(1, 2);
    a.push(0, 1);
    a.push(0, 2);
    b.push(0, 2);
    b.push(0, 1);
    assert_ne!(a.history(0), b.history(0));
    assert_eq!(a.hash(0), b.hash(0));
}

#[test]
fn hash_is_a_pure_read() {
    let mut h = history(1, 4);
    h.push(0, 0xdead);
    h.push(0, 0xbeef);
    let first = h.hash(0);
    let second = h.hash(0);
    assert_eq!(first, second);
    assert_eq!(h.history(0), &[0, 0, 0xdead, 0xbeef]);
}

#[test]
fn reset_clears_every_bucket() {
    let mut h = history(2, 2);
    h.push(0, 1);
    h.push(1, 2);
    h.reset();
    assert_eq!(h.history(0), &[0, 0]);
    assert_eq!(h.history(1), &[0, 0]);
}

// ══════════════════════════════════════════════════════════
// 3. Geometry
// ══════════════════════════════════════════════════════════

#[test]
fn unaddressable_arena_is_rejected() {
    let err = HistoryTable::new(nz(2), nz(usize::MAX)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::HistoryGeometry {
            buckets: 2,
            length: usize::MAX
        }
    ));
}
