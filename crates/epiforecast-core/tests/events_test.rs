//! Tests for the event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use epiforecast_core::events::types::*;
use epiforecast_core::events::{EventDispatcher, ForecastEventHandler, NoOpHandler};

#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    progress: AtomicUsize,
    complete: AtomicUsize,
    scenarios: AtomicUsize,
    errors: AtomicUsize,
}

impl ForecastEventHandler for CountingHandler {
    fn on_batch_started(&self, _event: &BatchStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_simulation_progress(&self, _event: &SimulationProgressEvent) {
        self.progress.fetch_add(1, Ordering::Relaxed);
    }

    fn on_batch_complete(&self, _event: &BatchCompleteEvent) {
        self.complete.fetch_add(1, Ordering::Relaxed);
    }

    fn on_scenario_complete(&self, _event: &ScenarioCompleteEvent) {
        self.scenarios.fetch_add(1, Ordering::Relaxed);
    }

    fn on_error(&self, _event: &ErrorEvent) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl ForecastEventHandler for PanickingHandler {
    fn on_simulation_progress(&self, _event: &SimulationProgressEvent) {
        panic!("handler failure");
    }
}

fn progress() -> SimulationProgressEvent {
    SimulationProgressEvent {
        completed: 100,
        total: 1000,
    }
}

#[test]
fn test_noop_defaults() {
    let handler = NoOpHandler;
    handler.on_simulation_progress(&progress());
    handler.on_error(&ErrorEvent {
        message: "m".into(),
        error_code: "TEST".into(),
    });
}

#[test]
fn test_dispatcher_zero_handlers() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.on_simulation_progress(&progress());
}

#[test]
fn test_dispatcher_fans_out() {
    let mut dispatcher = EventDispatcher::new();
    let a = Arc::new(CountingHandler::default());
    let b = Arc::new(CountingHandler::default());
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());

    dispatcher.on_batch_started(&BatchStartedEvent {
        num_simulations: 10,
        horizon_days: 5,
        initial_total: 100.0,
        seed: 1,
    });
    dispatcher.on_simulation_progress(&progress());
    dispatcher.on_batch_complete(&BatchCompleteEvent {
        num_simulations: 10,
        duration_ms: 3,
    });
    dispatcher.on_scenario_complete(&ScenarioCompleteEvent {
        scenario: "Expected".into(),
        effective_growth_rate: 0.1,
        final_mean_total: 400.0,
    });

    for h in [&a, &b] {
        assert_eq!(h.started.load(Ordering::Relaxed), 1);
        assert_eq!(h.progress.load(Ordering::Relaxed), 1);
        assert_eq!(h.complete.load(Ordering::Relaxed), 1);
        assert_eq!(h.scenarios.load(Ordering::Relaxed), 1);
        assert_eq!(h.errors.load(Ordering::Relaxed), 0);
    }
}

/// A panicking handler does not starve handlers registered after it.
#[test]
fn test_panicking_handler_isolated() {
    let mut dispatcher = EventDispatcher::new();
    let counter = Arc::new(CountingHandler::default());
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.on_simulation_progress(&progress());

    assert_eq!(counter.progress.load(Ordering::Relaxed), 1);
}
