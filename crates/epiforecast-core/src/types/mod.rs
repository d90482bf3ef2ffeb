//! Data model shared between the loader, the engine, and reporting.

pub mod dates;
pub mod series;

pub use dates::future_dates;
pub use series::{DailyRecord, HistoricalSeries};
