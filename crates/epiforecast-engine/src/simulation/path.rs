//! PathSimulator: one stochastic trajectory under the mixed growth/average model.

use epiforecast_core::config::ModelConfig;
use epiforecast_core::errors::{InputError, SimulationError};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::mixture::ModelMixture;
use super::types::{DayState, SimulationPath};
use crate::estimation::EstimatedParameters;

/// Generates single trajectories from fixed parameters.
///
/// Each day:
/// 1. growth ~ N(mean_growth, std_growth), clamped to the growth band
/// 2. average ~ N(mean_new, std_new), floored at 0
/// 3. pick growth-based or average-based new cases via the mixture
/// 4. multiply by `1 + N(0, noise_std)` and floor at 0
/// 5. add to the running total
///
/// All draws happen every day in that order regardless of which model is
/// chosen, so the stream position is independent of the path taken.
#[derive(Debug, Clone)]
pub struct PathSimulator {
    growth: Normal<f64>,
    new_cases: Normal<f64>,
    noise: Normal<f64>,
    growth_clamp: (f64, f64),
    mixture: ModelMixture,
}

impl PathSimulator {
    pub fn new(params: &EstimatedParameters, model: &ModelConfig) -> Result<Self, SimulationError> {
        let growth_clamp = model.effective_growth_clamp();
        if !(growth_clamp.0 < growth_clamp.1) {
            return Err(SimulationError::InvalidDistribution {
                name: "growth clamp",
                message: format!("min {} must be below max {}", growth_clamp.0, growth_clamp.1),
            });
        }
        Ok(Self {
            growth: normal("growth rate", params.mean_growth_rate, params.std_growth_rate)?,
            new_cases: normal("new cases", params.mean_new_cases, params.std_new_cases)?,
            noise: normal("noise", 0.0, model.effective_noise_std())?,
            growth_clamp,
            mixture: ModelMixture::new(model.effective_growth_model_weight())?,
        })
    }

    /// Simulate `horizon_days` days starting from `initial_total`.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        initial_total: f64,
        horizon_days: usize,
        rng: &mut R,
    ) -> Result<SimulationPath, SimulationError> {
        validate_start(initial_total, horizon_days)?;

        let (lo, hi) = self.growth_clamp;
        let mut current_total = initial_total;
        let mut path = SimulationPath::with_capacity(horizon_days);

        for _ in 0..horizon_days {
            let growth = self.growth.sample(rng).clamp(lo, hi);
            let average = self.new_cases.sample(rng).max(0.0);
            let model = self.mixture.sample(rng);
            let noise_factor = 1.0 + self.noise.sample(rng);

            let new_cases = (model.new_cases(current_total, growth, average) * noise_factor).max(0.0);
            current_total += new_cases;
            path.days.push(DayState {
                total: current_total,
                new_cases,
            });
        }
        Ok(path)
    }
}

/// Rejects a non-positive horizon or an unusable starting total.
pub(crate) fn validate_start(initial_total: f64, horizon_days: usize) -> Result<(), InputError> {
    if horizon_days == 0 {
        return Err(InputError::NonPositiveHorizon);
    }
    if !initial_total.is_finite() || initial_total < 0.0 {
        return Err(InputError::InvalidInitialTotal {
            value: initial_total,
        });
    }
    Ok(())
}

pub(crate) fn normal(name: &'static str, mean: f64, std: f64) -> Result<Normal<f64>, SimulationError> {
    if !mean.is_finite() || !std.is_finite() {
        return Err(SimulationError::InvalidDistribution {
            name,
            message: format!("mean {mean} and std {std} must be finite"),
        });
    }
    Normal::new(mean, std).map_err(|e| SimulationError::InvalidDistribution {
        name,
        message: format!("mean {mean}, std {std}: {e}"),
    })
}
