//! Validated historical case series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_HISTORY_POINTS;
use crate::errors::InputError;

/// One day of observed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub total_cases: u64,
    pub new_cases: u64,
}

/// Daily records sorted by strictly ascending date.
///
/// Totals may be non-monotonic; reporting corrections are common in real
/// data and the estimator tolerates them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalSeries {
    records: Vec<DailyRecord>,
}

impl HistoricalSeries {
    /// Build a series, checking length and date ordering.
    pub fn new(records: Vec<DailyRecord>) -> Result<Self, InputError> {
        if records.is_empty() {
            return Err(InputError::EmptySeries);
        }
        if records.len() < MIN_HISTORY_POINTS {
            return Err(InputError::InsufficientHistory {
                required: MIN_HISTORY_POINTS,
                actual: records.len(),
            });
        }
        if let Some(index) = records
            .windows(2)
            .position(|w| w[1].date <= w[0].date)
        {
            return Err(InputError::UnsortedDates { index: index + 1 });
        }
        Ok(Self { records })
    }

    /// Build a series of consecutive days from cumulative totals.
    ///
    /// New cases are the day-over-day increase, floored at zero; the first
    /// day has no reference and records zero.
    pub fn from_totals(start: NaiveDate, totals: &[u64]) -> Result<Self, InputError> {
        let mut records = Vec::with_capacity(totals.len());
        let mut date = start;
        let mut previous: Option<u64> = None;
        for (i, &total) in totals.iter().enumerate() {
            if i > 0 {
                date = date.succ_opt().ok_or_else(|| InputError::DateOverflow {
                    last_date: date.to_string(),
                    days: 1,
                })?;
            }
            let new_cases = previous.map_or(0, |p| total.saturating_sub(p));
            records.push(DailyRecord {
                date,
                total_cases: total,
                new_cases,
            });
            previous = Some(total);
        }
        Self::new(records)
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total-case counts in date order.
    pub fn totals(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.iter().map(|r| r.total_cases)
    }

    /// New-case counts in date order.
    pub fn new_cases(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.iter().map(|r| r.new_cases)
    }

    /// The last known total, used as the starting point of every forecast.
    pub fn last_total(&self) -> u64 {
        self.records.last().map_or(0, |r| r.total_cases)
    }

    pub fn last_date(&self) -> NaiveDate {
        self.records.last().map_or(NaiveDate::MIN, |r| r.date)
    }
}

impl<'de> Deserialize<'de> for HistoricalSeries {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<DailyRecord>::deserialize(deserializer)?;
        Self::new(records).map_err(serde::de::Error::custom)
    }
}
