//! Tests for tracing initialization.

use std::sync::Mutex;

use epiforecast_core::tracing::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_debug_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("EPIFORECAST_LOG", "debug");
    init_tracing();
    std::env::remove_var("EPIFORECAST_LOG");
}

#[test]
fn test_per_module_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(
        "EPIFORECAST_LOG",
        "epiforecast_engine::simulation=debug,epiforecast_core=warn",
    );
    init_tracing();
    std::env::remove_var("EPIFORECAST_LOG");
}

#[test]
fn test_init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
    tracing::info!("still alive after repeated init");
}
