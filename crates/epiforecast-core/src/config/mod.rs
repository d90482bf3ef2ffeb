//! Configuration system for epiforecast.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod forecast_config;
pub mod model_config;
pub mod sensitivity_config;
pub mod simulation_config;
pub mod summary_config;

pub use forecast_config::{CliOverrides, ForecastConfig};
pub use model_config::ModelConfig;
pub use sensitivity_config::SensitivityConfig;
pub use simulation_config::SimulationConfig;
pub use summary_config::SummaryConfig;
