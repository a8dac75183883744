//! Fluent builder for constructing a [`Sim`].

use sc_agent::{Population, PopulationBuilder};
use sc_behavior::{Destinations, Generators, initialize_population};
use sc_core::{SimConfig, SimRng};
use sc_ferry::BoardingScheduler;

use crate::{Sim, SimError, SimResult};

/// RNG stream for mode preferences and balk points.  Iteration `k` uses
/// stream `k`, so the setup streams sit at the top of the range.
pub(crate) const POPULATION_STREAM: u64 = u64::MAX;
/// RNG stream for destination assignment.
pub(crate) const DESTINATION_STREAM: u64 = u64::MAX - 1;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: model calibration, policy levers, seed, balking switch
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                            |
/// |---------------------|----------------------------------------------------|
/// | `.population(p)`    | Sized from `config.model`, preferences drawn       |
/// | `.destinations(d)`  | Drawn once from the population-weighted coast mix  |
///
/// A population passed to `.population` is used as-is: its mode preferences
/// and balk points are NOT redrawn.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig::new(policy, seed)).build()?;
/// let results = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    population:   Option<Population>,
    destinations: Option<Destinations>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, population: None, destinations: None }
    }

    /// Supply a fully initialized population template.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Supply per-agent destinations (must be length `population.count`).
    pub fn destinations(mut self, destinations: Destinations) -> Self {
        self.destinations = Some(destinations);
        self
    }

    /// Validate the configuration, build the population template and
    /// destinations, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let generators = Generators::new(&self.config.model, &self.config.policy)?;

        // ── Population template ───────────────────────────────────────────
        let population = match self.population {
            Some(p) => p,
            None => {
                let mut p = PopulationBuilder::from_model(&self.config.model).build();
                let mut rng = SimRng::stream(self.config.seed, POPULATION_STREAM);
                initialize_population(&mut p, &generators, &mut rng);
                p
            }
        };

        // ── Destinations ──────────────────────────────────────────────────
        let destinations = match self.destinations {
            Some(d) => {
                if d.len() != population.count {
                    return Err(SimError::AgentCountMismatch {
                        expected: population.count,
                        got:      d.len(),
                        what:     "destinations",
                    });
                }
                d
            }
            None => {
                let mut rng = SimRng::stream(self.config.seed, DESTINATION_STREAM);
                Destinations::assign(&population, &generators, &mut rng)
            }
        };

        let scheduler = BoardingScheduler::from_model(&self.config.model, self.config.balking);

        log::info!(
            "built sim: {} agents, corridor={}, p_bike_if_path={}, p_always_bike={}, iterations={}",
            population.count,
            self.config.policy.corridor,
            self.config.policy.p_bike_if_path,
            self.config.policy.p_always_bike,
            self.config.policy.iterations,
        );

        Ok(Sim {
            config: self.config,
            population,
            destinations,
            generators,
            scheduler,
        })
    }
}
