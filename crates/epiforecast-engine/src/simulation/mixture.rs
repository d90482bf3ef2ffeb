//! Daily choice between the two new-case models.

use epiforecast_core::errors::SimulationError;
use rand::Rng;
use rand::distributions::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};

/// Strategy used to produce one day's new cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewCaseModel {
    /// `current_total * |growth|`.
    GrowthBased,
    /// A draw from the historical new-case distribution.
    AverageBased,
}

impl NewCaseModel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GrowthBased => "growth_based",
            Self::AverageBased => "average_based",
        }
    }

    /// New cases under this model, before noise.
    pub fn new_cases(&self, current_total: f64, growth: f64, average_draw: f64) -> f64 {
        match self {
            Self::GrowthBased => current_total * growth.abs(),
            Self::AverageBased => average_draw,
        }
    }
}

impl std::fmt::Display for NewCaseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Discrete sampler over [`NewCaseModel`], re-rolled independently each day.
#[derive(Debug, Clone, Copy)]
pub struct ModelMixture {
    growth_based: Bernoulli,
}

impl ModelMixture {
    /// `growth_weight` is the probability of [`NewCaseModel::GrowthBased`].
    pub fn new(growth_weight: f64) -> Result<Self, SimulationError> {
        let growth_based =
            Bernoulli::new(growth_weight).map_err(|e| SimulationError::InvalidDistribution {
                name: "model mixture",
                message: format!("weight {growth_weight}: {e}"),
            })?;
        Ok(Self { growth_based })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NewCaseModel {
        if self.growth_based.sample(rng) {
            NewCaseModel::GrowthBased
        } else {
            NewCaseModel::AverageBased
        }
    }
}
