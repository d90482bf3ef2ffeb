//! EnsembleRunner: N independent paths from the same start and parameters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use epiforecast_core::config::{ModelConfig, SimulationConfig};
use epiforecast_core::errors::{InputError, SimulationError};
use epiforecast_core::events::handler::ForecastEventHandler;
use epiforecast_core::events::types::{
    BatchCompleteEvent, BatchStartedEvent, SimulationProgressEvent,
};
use rayon::prelude::*;

use super::path::{validate_start, PathSimulator};
use super::rng::{resolve_seed, stream_rng};
use super::types::{Ensemble, SimulationPath};
use crate::estimation::EstimatedParameters;

/// A completed batch together with the base seed that reproduces it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleRun {
    pub ensemble: Ensemble,
    pub seed: u64,
}

/// Drives `num_simulations` runs of [`PathSimulator`].
///
/// Run `i` owns row `i` and draws from stream `i` of the batch seed, so
/// runs are reorder-safe and execute on rayon workers without locking.
/// Any failed run aborts the whole batch; rows are never skipped.
pub struct EnsembleRunner {
    simulator: PathSimulator,
    num_simulations: usize,
    horizon_days: usize,
    progress_interval: usize,
    seed: Option<u64>,
    threads: Option<usize>,
}

impl EnsembleRunner {
    pub fn new(
        params: &EstimatedParameters,
        simulation: &SimulationConfig,
        model: &ModelConfig,
    ) -> Result<Self, SimulationError> {
        let num_simulations = simulation.effective_num_simulations();
        if num_simulations == 0 {
            return Err(InputError::NonPositiveSimulations.into());
        }
        let horizon_days = simulation.effective_horizon_days();
        if horizon_days == 0 {
            return Err(InputError::NonPositiveHorizon.into());
        }
        Ok(Self {
            simulator: PathSimulator::new(params, model)?,
            num_simulations,
            horizon_days,
            progress_interval: simulation.effective_progress_interval(),
            seed: simulation.seed,
            threads: simulation.threads.filter(|&t| t > 0),
        })
    }

    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Run the batch from `initial_total`, reporting progress to `handler`.
    pub fn run(
        &self,
        initial_total: f64,
        handler: &dyn ForecastEventHandler,
    ) -> Result<EnsembleRun, SimulationError> {
        validate_start(initial_total, self.horizon_days)?;

        let seed = resolve_seed(self.seed);
        let start = Instant::now();
        tracing::info!(
            num_simulations = self.num_simulations,
            horizon_days = self.horizon_days,
            initial_total,
            "starting ensemble batch"
        );
        tracing::debug!(seed, "ensemble base seed");
        handler.on_batch_started(&BatchStartedEvent {
            num_simulations: self.num_simulations,
            horizon_days: self.horizon_days,
            initial_total,
            seed,
        });

        let ensemble = self
            .collect_paths(initial_total, seed, handler)
            .and_then(Ensemble::from_paths)
            .inspect_err(|e| tracing::warn!(error = %e, "ensemble batch aborted"))?;

        let elapsed = start.elapsed();
        let duration_ms = elapsed.as_millis() as u64;
        tracing::info!(
            ensemble_duration_ms = duration_ms,
            simulations_per_second = self.num_simulations as f64 / elapsed.as_secs_f64().max(1e-9),
            "ensemble batch complete"
        );
        handler.on_batch_complete(&BatchCompleteEvent {
            num_simulations: self.num_simulations,
            duration_ms,
        });

        Ok(EnsembleRun { ensemble, seed })
    }

    fn collect_paths(
        &self,
        initial_total: f64,
        seed: u64,
        handler: &dyn ForecastEventHandler,
    ) -> Result<Vec<SimulationPath>, SimulationError> {
        let completed = AtomicUsize::new(0);
        let run_one = |run: usize| -> Result<SimulationPath, SimulationError> {
            let mut rng = stream_rng(seed, run as u64);
            let path = self.simulator.simulate(initial_total, self.horizon_days, &mut rng)?;
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % self.progress_interval == 0 {
                tracing::debug!(completed = done, total = self.num_simulations, "simulation progress");
                handler.on_simulation_progress(&SimulationProgressEvent {
                    completed: done,
                    total: self.num_simulations,
                });
            }
            Ok(path)
        };

        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SimulationError::WorkerPool {
                        message: e.to_string(),
                    })?;
                pool.install(|| (0..self.num_simulations).into_par_iter().map(run_one).collect())
            }
            None => (0..self.num_simulations).into_par_iter().map(run_one).collect(),
        }
    }
}
