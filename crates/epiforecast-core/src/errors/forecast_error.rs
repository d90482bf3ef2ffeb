//! Top-level forecast error aggregating subsystem errors.

use super::error_code::ForecastErrorCode;
use super::{ConfigError, EstimationError, InputError, SimulationError};

/// Errors that can occur while running the full forecast pipeline.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ForecastErrorCode for ForecastError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Estimation(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
