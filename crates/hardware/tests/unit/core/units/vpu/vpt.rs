//! Value Prediction Table Tests.
//!
//! Verifies modulo indexing, unconditional overwrite, and that colliding
//! hashes share (and clobber) the same slot.

use vpsim_core::core::units::vpu::vpt::PredictionTable;

use crate::common::nz;

#[test]
fn fresh_table_reads_zero() {
    let t = PredictionTable::new(nz(8));
    assert_eq!(t.len(), 8);
    assert!(!t.is_empty());
    assert_eq!(t.get(0), 0);
    assert_eq!(t.get(u64::MAX), 0);
}

#[test]
fn index_is_hash_mod_size() {
    let t = PredictionTable::new(nz(5));
    assert_eq!(t.index(0), 0);
    assert_eq!(t.index(7), 2);
    assert_eq!(t.index(u64::MAX), (u64::MAX % 5) as usize);
}

#[test]
fn set_then_get_round_trips() {
    let mut t = PredictionTable::new(nz(4));
    t.set(6, 42);
    assert_eq!(t.get(6), 42);
}

#[test]
fn newest_writer_wins() {
    let mut t = PredictionTable::new(nz(4));
    t.set(1, 100);
    t.set(1, 200);
    assert_eq!(t.get(1), 200);
}

/// Hashes 1 and 5 alias in a 4-slot table; the second write replaces the first.
#[test]
fn aliasing_hashes_clobber_each_other() {
    let mut t = PredictionTable::new(nz(4));
    t.set(1, 0xAAAA);
    t.set(5, 0xBBBB);
    assert_eq!(t.get(1), 0xBBBB);
    assert_eq!(t.get(5), 0xBBBB);
}

/// A single-slot table maps every hash onto slot 0.
#[test]
fn single_slot_table_is_total() {
    let mut t = PredictionTable::new(nz(1));
    assert_eq!(t.index(u64::MAX), 0);
    t.set(0xdead_beef, 3);
    assert_eq!(t.get(7), 3);
}

#[test]
fn reset_zeroes_slots() {
    let mut t = PredictionTable::new(nz(2));
    t.set(0, 1);
    t.set(1, 2);
    t.reset();
    assert_eq!(t.get(0), 0);
    assert_eq!(t.get(1), 0);
}
