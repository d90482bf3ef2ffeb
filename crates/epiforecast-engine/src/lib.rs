//! Forecast engine: parameter estimation, stochastic path simulation,
//! Monte Carlo ensembles, ensemble summaries, and sensitivity sweeps.

pub mod estimation;
pub mod forecast;
pub mod sensitivity;
pub mod simulation;
pub mod summary;

pub use forecast::{ForecastReport, Forecaster};
