//! Sensitivity sweep configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the growth-assumption sweep.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SensitivityConfig {
    /// Run the sweep as part of a forecast. Default: true.
    pub enabled: Option<bool>,
    /// Runs per scenario. Default: 100.
    pub runs: Option<usize>,
    /// Sweep horizon in days. A forecast falls back to the simulation
    /// horizon so scenario trajectories share its date axis. Default: 30.
    pub horizon_days: Option<usize>,
    /// Scale applied to the growth std. Default: 0.5.
    pub std_scale: Option<f64>,
    /// Lower growth clamp. Default: -0.05.
    pub clamp_min: Option<f64>,
    /// Upper growth clamp. Default: 0.20.
    pub clamp_max: Option<f64>,
}

impl SensitivityConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_runs(&self) -> usize {
        self.runs.unwrap_or(constants::DEFAULT_SWEEP_RUNS)
    }

    pub fn effective_horizon_days(&self) -> usize {
        self.horizon_days
            .unwrap_or(constants::DEFAULT_SWEEP_HORIZON_DAYS)
    }

    pub fn effective_std_scale(&self) -> f64 {
        self.std_scale.unwrap_or(constants::DEFAULT_SWEEP_STD_SCALE)
    }

    /// Returns the effective `(min, max)` growth clamp.
    pub fn effective_clamp(&self) -> (f64, f64) {
        (
            self.clamp_min.unwrap_or(constants::DEFAULT_SWEEP_CLAMP_MIN),
            self.clamp_max.unwrap_or(constants::DEFAULT_SWEEP_CLAMP_MAX),
        )
    }
}
