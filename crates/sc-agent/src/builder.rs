//! Builder for sizing a [`Population`] from scaled settlement populations.
//!
//! # Usage
//!
//! ```rust
//! use sc_agent::PopulationBuilder;
//! use sc_core::{ModelConfig, Settlement};
//!
//! let population = PopulationBuilder::from_model(&ModelConfig::default()).build();
//! assert_eq!(population.residents_of(Settlement::Gibsons), 1852);
//!
//! // Mode preferences and balk points start at defaults; the initializer
//! // fills them in after building.
//! ```

use sc_core::{ModelConfig, Settlement};

use crate::Population;

/// Builder for [`Population`].
///
/// Agents are laid out in contiguous blocks per settlement, in the order the
/// blocks were added.
#[derive(Default)]
pub struct PopulationBuilder {
    blocks: Vec<(Settlement, usize)>,
}

impl PopulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One block per settlement sized `population / model_scale`, Vancouver
    /// first and then the coast in road order.
    pub fn from_model(model: &ModelConfig) -> Self {
        Settlement::ALL.into_iter().fold(Self::new(), |b, s| {
            b.residents(s, model.populations.agent_count(s, model.model_scale))
        })
    }

    /// Append `count` agents living in `settlement`.
    pub fn residents(mut self, settlement: Settlement, count: usize) -> Self {
        if count > 0 {
            self.blocks.push((settlement, count));
        }
        self
    }

    /// Total agents the builder will create.
    pub fn count(&self) -> usize {
        self.blocks.iter().map(|&(_, n)| n).sum()
    }

    /// Allocate the SoA arrays.  Every agent starts as a `NeverBikes` agent
    /// with a zero balk point.
    pub fn build(self) -> Population {
        let mut home = Vec::with_capacity(self.count());
        for (settlement, n) in self.blocks {
            home.extend(std::iter::repeat_n(settlement, n));
        }
        Population::new(home)
    }
}
