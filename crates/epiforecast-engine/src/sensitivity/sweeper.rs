//! SensitivitySweeper: small growth-only ensembles per scenario.

use std::time::Instant;

use epiforecast_core::config::SensitivityConfig;
use epiforecast_core::errors::{InputError, SimulationError};
use epiforecast_core::events::handler::ForecastEventHandler;
use epiforecast_core::events::types::ScenarioCompleteEvent;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use statrs::statistics::Statistics;

use super::scenario::{Scenario, ScenarioResult};
use crate::simulation::path::{normal, validate_start};
use crate::simulation::rng::stream_rng;

/// Pure compounding recurrence `total += total * |growth|` with clamped
/// normal growth draws.
#[derive(Debug, Clone)]
pub struct GrowthOnlySimulator {
    growth: Normal<f64>,
    clamp: (f64, f64),
}

impl GrowthOnlySimulator {
    pub fn new(
        mean_growth_rate: f64,
        std_growth_rate: f64,
        clamp: (f64, f64),
    ) -> Result<Self, SimulationError> {
        if !(clamp.0 < clamp.1) {
            return Err(SimulationError::InvalidDistribution {
                name: "sweep growth clamp",
                message: format!("min {} must be below max {}", clamp.0, clamp.1),
            });
        }
        Ok(Self {
            growth: normal("sweep growth rate", mean_growth_rate, std_growth_rate)?,
            clamp,
        })
    }

    /// Daily totals for `horizon_days` days.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        initial_total: f64,
        horizon_days: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, SimulationError> {
        validate_start(initial_total, horizon_days)?;
        let (lo, hi) = self.clamp;
        let mut total = initial_total;
        let mut totals = Vec::with_capacity(horizon_days);
        for _ in 0..horizon_days {
            let growth = self.growth.sample(rng).clamp(lo, hi);
            total += total * growth.abs();
            totals.push(total);
        }
        Ok(totals)
    }
}

/// Re-runs a small ensemble under each [`Scenario`] and averages it.
#[derive(Debug, Clone, Copy)]
pub struct SensitivitySweeper {
    runs: usize,
    horizon_days: usize,
    std_scale: f64,
    clamp: (f64, f64),
}

impl Default for SensitivitySweeper {
    fn default() -> Self {
        Self {
            runs: epiforecast_core::constants::DEFAULT_SWEEP_RUNS,
            horizon_days: epiforecast_core::constants::DEFAULT_SWEEP_HORIZON_DAYS,
            std_scale: epiforecast_core::constants::DEFAULT_SWEEP_STD_SCALE,
            clamp: (
                epiforecast_core::constants::DEFAULT_SWEEP_CLAMP_MIN,
                epiforecast_core::constants::DEFAULT_SWEEP_CLAMP_MAX,
            ),
        }
    }
}

impl SensitivitySweeper {
    pub fn new(config: &SensitivityConfig) -> Result<Self, SimulationError> {
        let runs = config.effective_runs();
        if runs == 0 {
            return Err(InputError::NonPositiveSimulations.into());
        }
        let horizon_days = config.effective_horizon_days();
        if horizon_days == 0 {
            return Err(InputError::NonPositiveHorizon.into());
        }
        Ok(Self {
            runs,
            horizon_days,
            std_scale: config.effective_std_scale(),
            clamp: config.effective_clamp(),
        })
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Run every scenario in [`Scenario::ALL`] order.
    pub fn sweep(
        &self,
        mean_growth_rate: f64,
        std_growth_rate: f64,
        initial_total: f64,
        seed: u64,
        handler: &dyn ForecastEventHandler,
    ) -> Result<Vec<ScenarioResult>, SimulationError> {
        let start = Instant::now();
        let results = Scenario::ALL
            .iter()
            .map(|&scenario| {
                let result =
                    self.run_scenario(scenario, mean_growth_rate, std_growth_rate, initial_total, seed)?;
                let final_mean_total = result.final_mean_total().unwrap_or(initial_total);
                tracing::debug!(
                    scenario = %scenario,
                    effective_growth_rate = result.effective_growth_rate,
                    final_mean_total,
                    "scenario complete"
                );
                handler.on_scenario_complete(&ScenarioCompleteEvent {
                    scenario: scenario.label().to_string(),
                    effective_growth_rate: result.effective_growth_rate,
                    final_mean_total,
                });
                Ok(result)
            })
            .collect::<Result<Vec<_>, SimulationError>>()?;
        tracing::info!(
            sweep_duration_ms = start.elapsed().as_millis() as u64,
            scenarios = results.len(),
            "sensitivity sweep complete"
        );
        Ok(results)
    }

    /// Mean trajectory of `runs` growth-only paths for one scenario.
    ///
    /// Scenario `k` uses seed `seed + k + 1`; run `i` uses stream `i`.
    pub fn run_scenario(
        &self,
        scenario: Scenario,
        mean_growth_rate: f64,
        std_growth_rate: f64,
        initial_total: f64,
        seed: u64,
    ) -> Result<ScenarioResult, SimulationError> {
        let effective_growth_rate = mean_growth_rate * scenario.multiplier();
        let simulator = GrowthOnlySimulator::new(
            effective_growth_rate,
            std_growth_rate * self.std_scale,
            self.clamp,
        )?;
        let scenario_seed = seed.wrapping_add(scenario.ordinal() + 1);

        let paths = (0..self.runs)
            .into_par_iter()
            .map(|run| {
                let mut rng = stream_rng(scenario_seed, run as u64);
                simulator.simulate(initial_total, self.horizon_days, &mut rng)
            })
            .collect::<Result<Vec<_>, SimulationError>>()?;

        let mean_trajectory = (0..self.horizon_days)
            .map(|day| paths.iter().map(|p| p[day]).mean())
            .collect();

        Ok(ScenarioResult {
            scenario,
            label: scenario.label().to_string(),
            effective_growth_rate,
            runs: self.runs,
            mean_trajectory,
        })
    }
}
