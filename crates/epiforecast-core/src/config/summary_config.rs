//! Ensemble summary configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for percentile bands and risk metrics.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SummaryConfig {
    /// Risk threshold as a multiple of the initial total. Default: 1.5.
    pub risk_multiplier: Option<f64>,
    /// Lower band percentile. Default: 5.
    pub lower_percentile: Option<f64>,
    /// Upper band percentile. Default: 95.
    pub upper_percentile: Option<f64>,
}

impl SummaryConfig {
    pub fn effective_risk_multiplier(&self) -> f64 {
        self.risk_multiplier
            .unwrap_or(constants::DEFAULT_RISK_MULTIPLIER)
    }

    pub fn effective_lower_percentile(&self) -> f64 {
        self.lower_percentile
            .unwrap_or(constants::DEFAULT_LOWER_PERCENTILE)
    }

    pub fn effective_upper_percentile(&self) -> f64 {
        self.upper_percentile
            .unwrap_or(constants::DEFAULT_UPPER_PERCENTILE)
    }
}
