//! Simulation errors.

use super::error_code::{self, ForecastErrorCode};
use super::InputError;

/// Errors that abort a simulation batch. A batch never yields a partial
/// ensemble.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("invalid {name} distribution: {message}")]
    InvalidDistribution { name: &'static str, message: String },

    #[error("invalid summary setting {field}: {message}")]
    InvalidSummary { field: &'static str, message: String },

    #[error("ensemble has no simulation rows")]
    EmptyEnsemble,

    #[error("ensemble row {row} has {actual} days, expected {expected}")]
    RaggedEnsemble {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("failed to build worker pool: {message}")]
    WorkerPool { message: String },
}

impl ForecastErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            _ => error_code::SIMULATION_ERROR,
        }
    }
}
