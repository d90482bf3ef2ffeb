//! Reduction of an ensemble into per-day statistics and risk metrics.

pub mod percentile;
pub mod summarizer;

pub use percentile::percentile_sorted;
pub use summarizer::{ResultSummarizer, RiskMetrics, SummaryStatistics};
