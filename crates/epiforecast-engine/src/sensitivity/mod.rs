//! What-if sweep over alternative mean growth assumptions.
//!
//! The sweep uses a lighter growth-only recurrence and does not share the
//! main path model: no mixture, no multiplicative noise, no new-case model.

pub mod scenario;
pub mod sweeper;

pub use scenario::{Scenario, ScenarioResult};
pub use sweeper::{GrowthOnlySimulator, SensitivitySweeper};
