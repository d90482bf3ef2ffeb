//! ParameterEstimator: growth-rate and new-case distributions.

use epiforecast_core::errors::EstimationError;
use epiforecast_core::types::HistoricalSeries;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use super::growth::GrowthRateSample;

/// Immutable inputs shared by every simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatedParameters {
    pub mean_growth_rate: f64,
    pub std_growth_rate: f64,
    pub mean_new_cases: f64,
    pub std_new_cases: f64,
}

/// Derives [`EstimatedParameters`] from a validated series. Pure.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParameterEstimator;

impl ParameterEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate growth and new-case statistics.
    ///
    /// Growth uses strictly increasing day pairs only; new cases use
    /// strictly positive days only. Std is the sample (N-1) std; a
    /// single-element subset has std 0.
    pub fn estimate(&self, series: &HistoricalSeries) -> Result<EstimatedParameters, EstimationError> {
        let growth = GrowthRateSample::from_series(series);
        if growth.is_empty() {
            return Err(EstimationError::NoIncreasingPairs);
        }

        let positive_new: Vec<f64> = series
            .new_cases()
            .filter(|&n| n > 0)
            .map(|n| n as f64)
            .collect();
        if positive_new.is_empty() {
            return Err(EstimationError::NoPositiveNewCases);
        }

        tracing::debug!(
            growth_sample_size = growth.len(),
            new_case_sample_size = positive_new.len(),
            "estimating forecast parameters"
        );

        let (mean_growth_rate, std_growth_rate) = mean_and_std(growth.rates());
        let (mean_new_cases, std_new_cases) = mean_and_std(&positive_new);

        let params = EstimatedParameters {
            mean_growth_rate: finite("mean_growth_rate", mean_growth_rate)?,
            std_growth_rate: finite("std_growth_rate", std_growth_rate)?,
            mean_new_cases: finite("mean_new_cases", mean_new_cases)?,
            std_new_cases: finite("std_new_cases", std_new_cases)?,
        };
        tracing::info!(
            mean_growth_rate = params.mean_growth_rate,
            std_growth_rate = params.std_growth_rate,
            mean_new_cases = params.mean_new_cases,
            std_new_cases = params.std_new_cases,
            "parameters estimated"
        );
        Ok(params)
    }
}

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let mean = values.iter().mean();
    let std = if values.len() > 1 {
        values.iter().std_dev()
    } else {
        0.0
    };
    (mean, std)
}

fn finite(name: &'static str, value: f64) -> Result<f64, EstimationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimationError::NonFiniteParameter { name, value })
    }
}
