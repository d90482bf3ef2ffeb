//! Error handling for epiforecast.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod estimation_error;
pub mod forecast_error;
pub mod input_error;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use error_code::ForecastErrorCode;
pub use estimation_error::EstimationError;
pub use forecast_error::ForecastError;
pub use input_error::InputError;
pub use simulation_error::SimulationError;
