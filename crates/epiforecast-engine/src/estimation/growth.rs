//! Day-over-day growth rates over strictly increasing day pairs.

use epiforecast_core::types::HistoricalSeries;

/// Fractional increases `(later - earlier) / earlier`, collected only where
/// the earlier total is positive and the later total is strictly larger.
/// Flat and decreasing days are excluded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GrowthRateSample {
    rates: Vec<f64>,
}

impl GrowthRateSample {
    pub fn from_series(series: &HistoricalSeries) -> Self {
        let totals: Vec<u64> = series.totals().collect();
        Self::from_totals(&totals)
    }

    pub fn from_totals(totals: &[u64]) -> Self {
        let rates = totals
            .windows(2)
            .filter(|w| w[0] > 0 && w[1] > w[0])
            .map(|w| (w[1] - w[0]) as f64 / w[0] as f64)
            .collect();
        Self { rates }
    }

    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
