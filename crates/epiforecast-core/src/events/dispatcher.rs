//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::ForecastEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// The dispatcher is itself a `ForecastEventHandler`, so it can be passed
/// anywhere the engine expects a sink.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ForecastEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn ForecastEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from receiving the event.
    fn emit<F: Fn(&dyn ForecastEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }
}

impl ForecastEventHandler for EventDispatcher {
    fn on_batch_started(&self, event: &BatchStartedEvent) {
        self.emit(|h| h.on_batch_started(event));
    }

    fn on_simulation_progress(&self, event: &SimulationProgressEvent) {
        self.emit(|h| h.on_simulation_progress(event));
    }

    fn on_batch_complete(&self, event: &BatchCompleteEvent) {
        self.emit(|h| h.on_batch_complete(event));
    }

    fn on_scenario_complete(&self, event: &ScenarioCompleteEvent) {
        self.emit(|h| h.on_scenario_complete(event));
    }

    fn on_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}
