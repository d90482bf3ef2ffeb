//! Event payload types.

/// Payload for `on_batch_started`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStartedEvent {
    pub num_simulations: usize,
    pub horizon_days: usize,
    pub initial_total: f64,
    pub seed: u64,
}

/// Payload for `on_simulation_progress`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationProgressEvent {
    pub completed: usize,
    pub total: usize,
}

/// Payload for `on_batch_complete`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchCompleteEvent {
    pub num_simulations: usize,
    pub duration_ms: u64,
}

/// Payload for `on_scenario_complete`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioCompleteEvent {
    pub scenario: String,
    pub effective_growth_rate: f64,
    pub final_mean_total: f64,
}

/// Payload for `on_error`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
