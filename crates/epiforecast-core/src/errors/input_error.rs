//! Invalid input errors: malformed series or non-positive run sizes.

use super::error_code::{self, ForecastErrorCode};

/// Preconditions on caller-supplied data that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("historical series is empty")]
    EmptySeries,

    #[error("historical series needs at least {required} records, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    #[error("dates must be strictly ascending: record {index} is not after the preceding record")]
    UnsortedDates { index: usize },

    #[error("prediction_days must be positive")]
    NonPositiveHorizon,

    #[error("num_simulations must be positive")]
    NonPositiveSimulations,

    #[error("initial total must be a finite non-negative number, got {value}")]
    InvalidInitialTotal { value: f64 },

    #[error("future date out of range: {days} days after {last_date}")]
    DateOverflow { last_date: String, days: usize },
}

impl ForecastErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
