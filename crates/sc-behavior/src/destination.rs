//! Pre-simulation destination assignment.

use sc_agent::Population;
use sc_core::{AgentId, Settlement, SimRng};

use crate::Generators;

/// Each agent's cross-ferry destination, indexed by `AgentId`.
///
/// Vancouver residents get a coast settlement drawn with probability
/// proportional to its population; coast residents always travel to
/// Vancouver.  Computed once and reused for every day of every iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destinations(Vec<Settlement>);

impl Destinations {
    pub fn assign(population: &Population, generators: &Generators, rng: &mut SimRng) -> Self {
        let inner = population
            .home
            .iter()
            .map(|&home| match home {
                Settlement::Vancouver => generators.sample_destination(rng),
                _                     => Settlement::Vancouver,
            })
            .collect();
        Destinations(inner)
    }

    #[inline]
    pub fn of(&self, agent: AgentId) -> Settlement {
        self.0[agent.index()]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Settlement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many agents are bound for `settlement`.
    pub fn count_to(&self, settlement: Settlement) -> usize {
        self.0.iter().filter(|&&d| d == settlement).count()
    }
}

impl From<Vec<Settlement>> for Destinations {
    fn from(v: Vec<Settlement>) -> Self {
        Destinations(v)
    }
}
