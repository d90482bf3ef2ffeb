//! Stochastic forward simulation: single paths and Monte Carlo ensembles.

pub mod ensemble;
pub mod mixture;
pub mod path;
pub mod rng;
pub mod types;

pub use ensemble::EnsembleRunner;
pub use mixture::{ModelMixture, NewCaseModel};
pub use path::PathSimulator;
pub use types::{DayState, Ensemble, SimulationPath};
