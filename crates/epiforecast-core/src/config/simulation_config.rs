//! Ensemble batch configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for a Monte Carlo batch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of independent runs. Default: 1000.
    pub num_simulations: Option<usize>,
    /// Forecast horizon in days. Default: 30.
    pub horizon_days: Option<usize>,
    /// Emit a progress event every N completed runs. Default: 100.
    pub progress_interval: Option<usize>,
    /// Base seed. When unset a random seed is drawn per batch.
    pub seed: Option<u64>,
    /// Worker threads (0 or unset = rayon default).
    pub threads: Option<usize>,
}

impl SimulationConfig {
    pub fn effective_num_simulations(&self) -> usize {
        self.num_simulations
            .unwrap_or(constants::DEFAULT_NUM_SIMULATIONS)
    }

    pub fn effective_horizon_days(&self) -> usize {
        self.horizon_days.unwrap_or(constants::DEFAULT_HORIZON_DAYS)
    }

    /// Progress interval, never zero.
    pub fn effective_progress_interval(&self) -> usize {
        self.progress_interval
            .unwrap_or(constants::DEFAULT_PROGRESS_INTERVAL)
            .max(1)
    }
}
