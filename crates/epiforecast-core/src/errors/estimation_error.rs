//! Parameter estimation errors.

use super::error_code::{self, ForecastErrorCode};

/// Raised when a statistic over the historical series is undefined.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    #[error("no monotonically increasing day pairs found")]
    NoIncreasingPairs,

    #[error("no days with positive new cases found")]
    NoPositiveNewCases,

    #[error("estimated {name} is not finite ({value})")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

impl ForecastErrorCode for EstimationError {
    fn error_code(&self) -> &'static str {
        error_code::ESTIMATION_ERROR
    }
}
