//! Path model configuration: growth clamp, model mixture, and daily noise.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the per-day path model.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Lower clamp for sampled growth. Default: -0.10.
    pub growth_clamp_min: Option<f64>,
    /// Upper clamp for sampled growth. Default: 0.30.
    pub growth_clamp_max: Option<f64>,
    /// Probability of the growth-based model on a given day. Default: 0.70.
    pub growth_model_weight: Option<f64>,
    /// Std of the multiplicative noise factor around 1.0. Default: 0.10.
    pub noise_std: Option<f64>,
}

impl ModelConfig {
    /// Returns the effective `(min, max)` growth clamp.
    pub fn effective_growth_clamp(&self) -> (f64, f64) {
        (
            self.growth_clamp_min
                .unwrap_or(constants::DEFAULT_GROWTH_CLAMP_MIN),
            self.growth_clamp_max
                .unwrap_or(constants::DEFAULT_GROWTH_CLAMP_MAX),
        )
    }

    pub fn effective_growth_model_weight(&self) -> f64 {
        self.growth_model_weight
            .unwrap_or(constants::DEFAULT_GROWTH_MODEL_WEIGHT)
    }

    pub fn effective_noise_std(&self) -> f64 {
        self.noise_std.unwrap_or(constants::DEFAULT_NOISE_STD)
    }
}
