//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "EPIFORECAST_LOG";

/// Initialize the epiforecast tracing/logging system.
///
/// Reads `EPIFORECAST_LOG` for per-module log levels, e.g.
/// `EPIFORECAST_LOG=epiforecast_engine::simulation=debug,epiforecast_core=warn`.
///
/// Falls back to `epiforecast=info` if the variable is unset or invalid.
/// Idempotent; a subscriber installed by someone else is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("epiforecast=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
