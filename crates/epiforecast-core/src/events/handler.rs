//! ForecastEventHandler trait with no-op defaults.

use super::types::*;

/// Observability sink invoked by the engine.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. The trait requires `Send + Sync`
/// because progress is reported from rayon worker threads.
pub trait ForecastEventHandler: Send + Sync {
    // ---- Ensemble batches ----
    fn on_batch_started(&self, _event: &BatchStartedEvent) {}
    fn on_simulation_progress(&self, _event: &SimulationProgressEvent) {}
    fn on_batch_complete(&self, _event: &BatchCompleteEvent) {}

    // ---- Sensitivity sweep ----
    fn on_scenario_complete(&self, _event: &ScenarioCompleteEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ForecastEventHandler for NoOpHandler {}
