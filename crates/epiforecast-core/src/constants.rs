//! Shared constants for the epiforecast engine.

/// epiforecast version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "epiforecast.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "EPIFORECAST_";

/// Minimum number of historical records needed to estimate parameters.
pub const MIN_HISTORY_POINTS: usize = 2;

// ---- Simulation ----

/// Default number of Monte Carlo runs per batch.
pub const DEFAULT_NUM_SIMULATIONS: usize = 1000;

/// Default forecast horizon in days.
pub const DEFAULT_HORIZON_DAYS: usize = 30;

/// Default progress reporting interval (completed runs).
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

// ---- Path model ----

/// Lower clamp for a sampled daily growth rate.
pub const DEFAULT_GROWTH_CLAMP_MIN: f64 = -0.10;

/// Upper clamp for a sampled daily growth rate.
pub const DEFAULT_GROWTH_CLAMP_MAX: f64 = 0.30;

/// Probability that a simulated day uses the growth-based new-case model.
pub const DEFAULT_GROWTH_MODEL_WEIGHT: f64 = 0.70;

/// Standard deviation of the multiplicative daily noise factor.
pub const DEFAULT_NOISE_STD: f64 = 0.10;

// ---- Summary ----

/// Risk threshold as a multiple of the last observed total.
pub const DEFAULT_RISK_MULTIPLIER: f64 = 1.5;

/// Lower percentile of the uncertainty band.
pub const DEFAULT_LOWER_PERCENTILE: f64 = 5.0;

/// Upper percentile of the uncertainty band.
pub const DEFAULT_UPPER_PERCENTILE: f64 = 95.0;

// ---- Sensitivity sweep ----

/// Runs per scenario in the sensitivity sweep.
pub const DEFAULT_SWEEP_RUNS: usize = 100;

/// Horizon of the sensitivity sweep in days.
pub const DEFAULT_SWEEP_HORIZON_DAYS: usize = 30;

/// Scale applied to the growth std during the sweep.
pub const DEFAULT_SWEEP_STD_SCALE: f64 = 0.5;

/// Lower clamp for sweep growth rates.
pub const DEFAULT_SWEEP_CLAMP_MIN: f64 = -0.05;

/// Upper clamp for sweep growth rates.
pub const DEFAULT_SWEEP_CLAMP_MAX: f64 = 0.20;
