//! Named growth scenarios.

use serde::{Deserialize, Serialize};

/// A multiplier applied to the estimated mean growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Conservative,
    Expected,
    Aggressive,
}

impl Scenario {
    /// All scenarios in display order.
    pub const ALL: &'static [Scenario] = &[Self::Conservative, Self::Expected, Self::Aggressive];

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Conservative => 0.5,
            Self::Expected => 1.0,
            Self::Aggressive => 1.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Expected => "Expected",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Stable position, used to derive per-scenario seeds.
    pub fn ordinal(&self) -> u64 {
        match self {
            Self::Conservative => 0,
            Self::Expected => 1,
            Self::Aggressive => 2,
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mean trajectory of one scenario's sub-ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub label: String,
    /// `mean_growth_rate * multiplier`.
    pub effective_growth_rate: f64,
    pub runs: usize,
    /// Per-day mean total across the scenario's runs.
    pub mean_trajectory: Vec<f64>,
}

impl ScenarioResult {
    pub fn final_mean_total(&self) -> Option<f64> {
        self.mean_trajectory.last().copied()
    }
}
