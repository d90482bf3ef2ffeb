//! ResultSummarizer: per-day statistics and final-day risk metrics.

use epiforecast_core::config::SummaryConfig;
use epiforecast_core::errors::{InputError, SimulationError};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use super::percentile::{percentile_sorted, sorted_copy};
use crate::simulation::Ensemble;

/// Final-day risk metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// `initial_total * risk_multiplier`.
    pub threshold: f64,
    /// Fraction of runs whose final total strictly exceeds `threshold`.
    pub probability: f64,
    pub exceed_count: usize,
    /// Smallest final-day total.
    pub best_case: f64,
    /// Largest final-day total.
    pub worst_case: f64,
}

/// Per-day arrays, each of length `horizon_days`.
///
/// Standard deviations are population (N denominator) stds across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean: Vec<f64>,
    pub std_dev: Vec<f64>,
    pub lower: Vec<f64>,
    pub median: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower_percentile: f64,
    pub upper_percentile: f64,
    pub new_cases_mean: Vec<f64>,
    pub new_cases_std_dev: Vec<f64>,
    pub risk: RiskMetrics,
}

/// Pure reduction of an [`Ensemble`]; the ensemble is only read.
#[derive(Debug, Clone, Copy)]
pub struct ResultSummarizer {
    risk_multiplier: f64,
    lower_percentile: f64,
    upper_percentile: f64,
}

impl Default for ResultSummarizer {
    fn default() -> Self {
        Self {
            risk_multiplier: epiforecast_core::constants::DEFAULT_RISK_MULTIPLIER,
            lower_percentile: epiforecast_core::constants::DEFAULT_LOWER_PERCENTILE,
            upper_percentile: epiforecast_core::constants::DEFAULT_UPPER_PERCENTILE,
        }
    }
}

impl ResultSummarizer {
    /// Percentiles must lie in `[0, 100]` with lower <= upper, and the risk
    /// multiplier must be finite and positive.
    pub fn new(config: &SummaryConfig) -> Result<Self, SimulationError> {
        let risk_multiplier = config.effective_risk_multiplier();
        if !risk_multiplier.is_finite() || risk_multiplier <= 0.0 {
            return Err(SimulationError::InvalidSummary {
                field: "risk_multiplier",
                message: format!("{risk_multiplier} must be finite and greater than 0"),
            });
        }
        let lower_percentile = config.effective_lower_percentile();
        let upper_percentile = config.effective_upper_percentile();
        for (field, p) in [
            ("lower_percentile", lower_percentile),
            ("upper_percentile", upper_percentile),
        ] {
            if !(0.0..=100.0).contains(&p) {
                return Err(SimulationError::InvalidSummary {
                    field,
                    message: format!("{p} is outside [0, 100]"),
                });
            }
        }
        if lower_percentile > upper_percentile {
            return Err(SimulationError::InvalidSummary {
                field: "lower_percentile",
                message: format!("{lower_percentile} exceeds upper percentile {upper_percentile}"),
            });
        }
        Ok(Self {
            risk_multiplier,
            lower_percentile,
            upper_percentile,
        })
    }

    pub fn summarize(
        &self,
        ensemble: &Ensemble,
        initial_total: f64,
    ) -> Result<SummaryStatistics, SimulationError> {
        if !initial_total.is_finite() || initial_total < 0.0 {
            return Err(InputError::InvalidInitialTotal {
                value: initial_total,
            }
            .into());
        }
        if ensemble.num_simulations() == 0 || ensemble.horizon_days() == 0 {
            return Err(SimulationError::EmptyEnsemble);
        }

        let days = ensemble.horizon_days();
        let mut summary = SummaryStatistics {
            mean: Vec::with_capacity(days),
            std_dev: Vec::with_capacity(days),
            lower: Vec::with_capacity(days),
            median: Vec::with_capacity(days),
            upper: Vec::with_capacity(days),
            lower_percentile: self.lower_percentile,
            upper_percentile: self.upper_percentile,
            new_cases_mean: Vec::with_capacity(days),
            new_cases_std_dev: Vec::with_capacity(days),
            risk: self.risk(&ensemble.final_day_totals(), initial_total)?,
        };

        for day in 0..days {
            let totals = ensemble.total_column(day);
            summary.mean.push(totals.iter().mean());
            summary.std_dev.push(totals.iter().population_std_dev());

            let sorted = sorted_copy(&totals);
            summary.lower.push(pct(&sorted, self.lower_percentile)?);
            summary.median.push(pct(&sorted, 50.0)?);
            summary.upper.push(pct(&sorted, self.upper_percentile)?);

            let new_cases = ensemble.new_case_column(day);
            summary.new_cases_mean.push(new_cases.iter().mean());
            summary.new_cases_std_dev.push(new_cases.iter().population_std_dev());
        }

        tracing::debug!(
            risk_probability = summary.risk.probability,
            best_case = summary.risk.best_case,
            worst_case = summary.risk.worst_case,
            "ensemble summarized"
        );
        Ok(summary)
    }

    fn risk(&self, finals: &[f64], initial_total: f64) -> Result<RiskMetrics, SimulationError> {
        if finals.is_empty() {
            return Err(SimulationError::EmptyEnsemble);
        }
        let threshold = initial_total * self.risk_multiplier;
        let exceed_count = finals.iter().filter(|&&t| t > threshold).count();
        Ok(RiskMetrics {
            threshold,
            probability: exceed_count as f64 / finals.len() as f64,
            exceed_count,
            best_case: finals.iter().copied().fold(f64::INFINITY, f64::min),
            worst_case: finals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

fn pct(sorted: &[f64], p: f64) -> Result<f64, SimulationError> {
    percentile_sorted(sorted, p).ok_or(SimulationError::EmptyEnsemble)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ensemble() -> Ensemble {
        Ensemble::from_rows(
            vec![
                vec![110.0, 120.0],
                vec![105.0, 160.0],
                vec![100.0, 140.0],
                vec![120.0, 200.0],
            ],
            vec![
                vec![10.0, 10.0],
                vec![5.0, 55.0],
                vec![0.0, 40.0],
                vec![20.0, 80.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn per_day_statistics() {
        let s = ResultSummarizer::default().summarize(&ensemble(), 100.0).unwrap();
        assert_eq!(s.mean, vec![108.75, 155.0]);
        assert_eq!(s.median, vec![107.5, 150.0]);
        assert_eq!(s.new_cases_mean, vec![8.75, 46.25]);
        // population std of {110, 105, 100, 120}
        let expected = ((1.5625 + 14.0625 + 76.5625 + 126.5625) / 4.0_f64).sqrt();
        assert!((s.std_dev[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn risk_threshold_is_strict() {
        let s = ResultSummarizer::default().summarize(&ensemble(), 100.0).unwrap();
        // threshold 150: only 160 and 200 exceed it
        assert_eq!(s.risk.threshold, 150.0);
        assert_eq!(s.risk.exceed_count, 2);
        assert_eq!(s.risk.probability, 0.5);
        assert_eq!(s.risk.best_case, 120.0);
        assert_eq!(s.risk.worst_case, 200.0);
    }

    #[test]
    fn inverted_band_rejected() {
        let err = ResultSummarizer::new(&SummaryConfig {
            lower_percentile: Some(95.0),
            upper_percentile: Some(5.0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidSummary { field: "lower_percentile", .. }));
    }

    #[test]
    fn invalid_initial_total_rejected() {
        let err = ResultSummarizer::default()
            .summarize(&ensemble(), f64::NAN)
            .unwrap_err();
        assert!(matches!(err, SimulationError::Input(InputError::InvalidInitialTotal { .. })));
    }
}
