//! End-to-end forecast: estimate, simulate, summarize, sweep.

use chrono::NaiveDate;
use epiforecast_core::config::ForecastConfig;
use epiforecast_core::errors::{ForecastError, ForecastErrorCode};
use epiforecast_core::events::handler::ForecastEventHandler;
use epiforecast_core::events::types::ErrorEvent;
use epiforecast_core::types::{future_dates, HistoricalSeries};
use serde::{Deserialize, Serialize};

use crate::estimation::{EstimatedParameters, ParameterEstimator};
use crate::sensitivity::{ScenarioResult, SensitivitySweeper};
use crate::simulation::EnsembleRunner;
use crate::summary::{ResultSummarizer, SummaryStatistics};

/// Everything the reporting collaborator consumes from one forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub parameters: EstimatedParameters,
    pub initial_total: f64,
    pub num_simulations: usize,
    /// Base seed of the main ensemble; the sweep derives its seeds from it.
    pub seed: u64,
    /// One date per horizon day, starting the day after the last observation.
    pub future_dates: Vec<NaiveDate>,
    pub summary: SummaryStatistics,
    /// Final-day totals of every run, for histograms.
    pub final_day_distribution: Vec<f64>,
    /// Empty when the sweep is disabled.
    pub scenarios: Vec<ScenarioResult>,
}

/// Runs the full pipeline from a [`ForecastConfig`].
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast from `series`, reporting progress to `handler`.
    pub fn run(
        &self,
        series: &HistoricalSeries,
        handler: &dyn ForecastEventHandler,
    ) -> Result<ForecastReport, ForecastError> {
        self.run_inner(series, handler).inspect_err(|e| {
            tracing::error!(error = %e, code = e.error_code(), "forecast failed");
            handler.on_error(&ErrorEvent {
                message: e.to_string(),
                error_code: e.error_code().to_string(),
            });
        })
    }

    fn run_inner(
        &self,
        series: &HistoricalSeries,
        handler: &dyn ForecastEventHandler,
    ) -> Result<ForecastReport, ForecastError> {
        ForecastConfig::validate(&self.config)?;

        let parameters = ParameterEstimator::new().estimate(series)?;
        let initial_total = series.last_total() as f64;

        let runner =
            EnsembleRunner::new(&parameters, &self.config.simulation, &self.config.model)?;
        let dates = future_dates(series.last_date(), runner.horizon_days())?;
        let run = runner.run(initial_total, handler)?;

        let summary =
            ResultSummarizer::new(&self.config.summary)?.summarize(&run.ensemble, initial_total)?;

        let scenarios = if self.config.sensitivity.is_enabled() {
            let mut sweep_config = self.config.sensitivity.clone();
            sweep_config.horizon_days.get_or_insert(runner.horizon_days());
            SensitivitySweeper::new(&sweep_config)?.sweep(
                parameters.mean_growth_rate,
                parameters.std_growth_rate,
                initial_total,
                run.seed,
                handler,
            )?
        } else {
            Vec::new()
        };

        Ok(ForecastReport {
            parameters,
            initial_total,
            num_simulations: run.ensemble.num_simulations(),
            seed: run.seed,
            future_dates: dates,
            final_day_distribution: run.ensemble.final_day_totals(),
            summary,
            scenarios,
        })
    }
}
