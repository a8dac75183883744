//! One-time population initializer.

use sc_agent::Population;
use sc_core::SimRng;

use crate::Generators;

/// Draw every agent's mode preference and balk point.
///
/// Called once after [`PopulationBuilder::build`](sc_agent::PopulationBuilder::build);
/// the draws are part of the shared template and are not repeated per
/// iteration.
pub fn initialize_population(population: &mut Population, generators: &Generators, rng: &mut SimRng) {
    for pref in population.mode_preference.iter_mut() {
        *pref = generators.sample_mode_preference(rng);
    }
    for balk in population.balk_point.iter_mut() {
        *balk = generators.sample_balk_point(rng);
    }
}
