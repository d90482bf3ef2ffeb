//! Simulation output types.

use epiforecast_core::errors::SimulationError;
use serde::{Deserialize, Serialize};

/// State recorded at the end of one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayState {
    pub total: f64,
    pub new_cases: f64,
}

/// One simulated future, one entry per horizon day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationPath {
    pub days: Vec<DayState>,
}

impl SimulationPath {
    pub fn with_capacity(horizon_days: usize) -> Self {
        Self {
            days: Vec::with_capacity(horizon_days),
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn totals(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.total).collect()
    }

    pub fn new_cases(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.new_cases).collect()
    }

    /// Total on the last simulated day, if any.
    pub fn final_total(&self) -> Option<f64> {
        self.days.last().map(|d| d.total)
    }
}

/// `num_simulations x horizon_days` trajectories of totals and new cases.
///
/// Row order carries no meaning. Every row has the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    totals: Vec<Vec<f64>>,
    new_cases: Vec<Vec<f64>>,
}

impl Ensemble {
    /// Build from parallel row matrices, rejecting empty or ragged input.
    pub fn from_rows(
        totals: Vec<Vec<f64>>,
        new_cases: Vec<Vec<f64>>,
    ) -> Result<Self, SimulationError> {
        let expected = totals.first().ok_or(SimulationError::EmptyEnsemble)?.len();
        if new_cases.len() != totals.len() {
            return Err(SimulationError::RaggedEnsemble {
                row: new_cases.len().min(totals.len()),
                expected: totals.len(),
                actual: new_cases.len(),
            });
        }
        for (row, (t, n)) in totals.iter().zip(&new_cases).enumerate() {
            for actual in [t.len(), n.len()] {
                if actual != expected {
                    return Err(SimulationError::RaggedEnsemble {
                        row,
                        expected,
                        actual,
                    });
                }
            }
        }
        Ok(Self { totals, new_cases })
    }

    /// Build from completed paths, one row per path.
    pub fn from_paths(paths: Vec<SimulationPath>) -> Result<Self, SimulationError> {
        let (totals, new_cases): (Vec<_>, Vec<_>) = paths.iter().map(|p| (p.totals(), p.new_cases())).unzip();
        Self::from_rows(totals, new_cases)
    }

    pub fn num_simulations(&self) -> usize {
        self.totals.len()
    }

    pub fn horizon_days(&self) -> usize {
        self.totals.first().map_or(0, Vec::len)
    }

    pub fn totals(&self) -> &[Vec<f64>] {
        &self.totals
    }

    pub fn new_cases(&self) -> &[Vec<f64>] {
        &self.new_cases
    }

    /// Totals of every run on `day`.
    pub fn total_column(&self, day: usize) -> Vec<f64> {
        self.totals.iter().map(|row| row[day]).collect()
    }

    /// New cases of every run on `day`.
    pub fn new_case_column(&self, day: usize) -> Vec<f64> {
        self.new_cases.iter().map(|row| row[day]).collect()
    }

    /// Final-day totals across all runs, for histogram consumers.
    pub fn final_day_totals(&self) -> Vec<f64> {
        match self.horizon_days() {
            0 => Vec::new(),
            h => self.total_column(h - 1),
        }
    }
}
