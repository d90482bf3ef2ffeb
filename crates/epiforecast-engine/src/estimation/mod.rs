//! Parameter estimation from a historical case series.

pub mod estimator;
pub mod growth;

pub use estimator::{EstimatedParameters, ParameterEstimator};
pub use growth::GrowthRateSample;
