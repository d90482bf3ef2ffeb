//! ForecastErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that reporting collaborators can match on.
pub trait ForecastErrorCode {
    /// Returns the error code string (e.g., "ESTIMATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const ESTIMATION_ERROR: &str = "ESTIMATION_ERROR";
pub const SIMULATION_ERROR: &str = "SIMULATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
