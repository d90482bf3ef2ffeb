//! Future date axis for forecast output.

use chrono::{Days, NaiveDate};

use crate::errors::InputError;

/// Dates `last + 1 ..= last + horizon`, one per forecast day.
pub fn future_dates(last: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>, InputError> {
    (1..=horizon)
        .map(|offset| {
            last.checked_add_days(Days::new(offset as u64))
                .ok_or_else(|| InputError::DateOverflow {
                    last_date: last.to_string(),
                    days: offset,
                })
        })
        .collect()
}
