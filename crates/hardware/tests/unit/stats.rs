//! Value Prediction Statistics Tests.
//!
//! Verifies the outcome counters, accuracy/coverage definitions including
//! zero denominators, report sections, and JSON output.

use vpsim_core::stats::{STATS_SECTIONS, VpuStats};

fn sample() -> VpuStats {
    let mut s = VpuStats::new("fcm");
    s.record(false, false);
    s.record(false, true);
    s.record(true, true);
    s.record(true, true);
    s.record(true, true);
    s.record(true, false);
    s
}

#[test]
fn empty_stats_have_zero_ratios() {
    let s = VpuStats::default();
    assert_eq!(s.lookups, 0);
    assert!(s.accuracy().abs() < f64::EPSILON);
    assert!(s.coverage().abs() < f64::EPSILON);
}

#[test]
fn record_counts_outcomes() {
    let s = sample();
    assert_eq!(s.lookups, 6);
    assert_eq!(s.updates, 6);
    assert_eq!(s.not_predicted, 2);
    assert_eq!(s.predicted, 4);
    assert_eq!(s.correct, 3);
    assert_eq!(s.incorrect, 1);
    assert_eq!(s.predicted, s.correct + s.incorrect);
    assert_eq!(s.lookups, s.predicted + s.not_predicted);
}

#[test]
fn accuracy_and_coverage() {
    let s = sample();
    assert!((s.accuracy() - 0.75).abs() < 1e-12);
    assert!((s.coverage() - 4.0 / 6.0).abs() < 1e-12);
}

#[test]
fn never_predicting_has_zero_accuracy() {
    let mut s = VpuStats::new("fcm");
    for _ in 0..5 {
        s.record(false, false);
    }
    assert!(s.accuracy().abs() < f64::EPSILON);
    assert!(s.coverage().abs() < f64::EPSILON);
}

#[test]
fn full_report_contains_every_section() {
    let report = sample().to_string();
    assert!(report.contains("VALUE PREDICTION STATISTICS"));
    assert!(report.contains("predictor                fcm"));
    assert!(report.contains("vp.lookups             6"));
    assert!(report.contains("vp.accuracy            75.00%"));
    assert!(report.contains("vp.coverage            66.67%"));
}

#[test]
fn section_filter() {
    let s = sample();
    let mut out = String::new();
    s.write_sections(&mut out, &["vpu".to_string()]).unwrap();
    assert!(out.contains("vp.correct             3"));
    assert!(!out.contains("host_seconds"));

    let mut out = String::new();
    s.write_sections(&mut out, &["summary".to_string()]).unwrap();
    assert!(out.contains("host_seconds"));
    assert!(!out.contains("vp.lookups"));
}

#[test]
fn section_names_are_listed() {
    assert_eq!(STATS_SECTIONS, &["summary", "vpu"]);
}

#[test]
fn json_output_omits_timer() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["predictor"], "fcm");
    assert_eq!(value["correct"], 3);
    assert_eq!(value["not_predicted"], 2);
    assert!(value.get("start_time").is_none());
}
