//! Shared helpers for predictor tests.

use std::num::NonZeroUsize;
use std::sync::Once;

use vpsim_core::FcmPredictor;
use vpsim_core::config::VpuConfig;

static TRACING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Shorthand for table sizes in tests.
pub fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

/// Builds a geometry with every counter starting at zero.
pub fn geometry(
    history_length: usize,
    history_table_size: usize,
    value_predictor_table_size: usize,
    ctr_bits: u32,
) -> VpuConfig {
    VpuConfig {
        history_length,
        history_table_size,
        value_predictor_table_size,
        ctr_bits,
        initial_counter: 0,
    }
}

/// Builds an FCM predictor for the given geometry.
pub fn fcm(
    history_length: usize,
    history_table_size: usize,
    value_predictor_table_size: usize,
    ctr_bits: u32,
) -> FcmPredictor {
    init_tracing();
    FcmPredictor::new(&geometry(
        history_length,
        history_table_size,
        value_predictor_table_size,
        ctr_bits,
    ))
    .unwrap()
}
