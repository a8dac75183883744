//! The named random processes that drive the model.
//!
//! | Process                  | Distribution                                   |
//! |--------------------------|------------------------------------------------|
//! | trip initiation          | Bernoulli, peak or off-peak scaled rate        |
//! | trip duration            | Poisson, mean 3.3 nights                       |
//! | destination              | categorical over the coast, population-weighted |
//! | mode preference          | two chained Bernoulli draws                    |
//! | balk point               | uniform over the configured sailing range      |
//!
//! All distributions are validated once in [`Generators::new`]; sampling is
//! infallible afterwards.

use rand::distributions::{Bernoulli, Uniform, WeightedIndex};
use rand_distr::Poisson;

use sc_agent::ModePreference;
use sc_core::{ModelConfig, PolicyInput, Settlement, SimRng};

use crate::{BehaviorError, BehaviorResult};

/// Distributions built once at startup from configuration.
#[derive(Clone, Debug)]
pub struct Generators {
    peak_start:     Bernoulli,
    off_peak_start: Bernoulli,
    trip_nights:    Poisson<f64>,
    destination:    WeightedIndex<f64>,
    always_bike:    Bernoulli,
    bike_if_path:   Bernoulli,
    balk_point:     Uniform<f64>,
}

impl Generators {
    pub fn new(model: &ModelConfig, policy: &PolicyInput) -> BehaviorResult<Self> {
        let weights = Settlement::COAST.map(|s| model.populations.get(s));
        let (lo, hi) = (model.balk_min_sailings, model.balk_max_sailings);
        if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
            return Err(BehaviorError::Distribution {
                what:   "balk point",
                reason: format!(
                    "range {}..={} is empty or unbounded",
                    model.balk_min_sailings, model.balk_max_sailings
                ),
            });
        }

        Ok(Self {
            peak_start:     bernoulli("peak trip initiation", model.agent_trip_rate(true))?,
            off_peak_start: bernoulli("off-peak trip initiation", model.agent_trip_rate(false))?,
            trip_nights:    Poisson::new(model.mean_trip_nights).map_err(|e| {
                BehaviorError::Distribution { what: "trip duration", reason: e.to_string() }
            })?,
            destination:    WeightedIndex::new(weights).map_err(|e| {
                BehaviorError::Distribution { what: "destination", reason: e.to_string() }
            })?,
            always_bike:    bernoulli("always-bikes", policy.p_always_bike)?,
            bike_if_path:   bernoulli("bikes-if-path", policy.p_bike_if_path)?,
            balk_point:     Uniform::new_inclusive(model.balk_min_sailings, model.balk_max_sailings),
        })
    }

    /// Does an agent at home start a trip today?
    #[inline]
    pub fn sample_trip_initiation(&self, rng: &mut SimRng, peak: bool) -> bool {
        if peak {
            rng.sample(&self.peak_start)
        } else {
            rng.sample(&self.off_peak_start)
        }
    }

    /// Nights away.  May be zero, which the decision engine treats as not
    /// travelling.
    #[inline]
    pub fn sample_trip_duration(&self, rng: &mut SimRng) -> u32 {
        let nights: f64 = rng.sample(&self.trip_nights);
        nights as u32
    }

    /// Coast destination for a Vancouver resident, weighted by population.
    #[inline]
    pub fn sample_destination(&self, rng: &mut SimRng) -> Settlement {
        let idx: usize = rng.sample(&self.destination);
        Settlement::COAST[idx]
    }

    /// Die-hard cyclist first; failing that, path-willing cyclist; otherwise
    /// never bikes.
    pub fn sample_mode_preference(&self, rng: &mut SimRng) -> ModePreference {
        if rng.sample(&self.always_bike) {
            ModePreference::AlwaysBikes
        } else if rng.sample(&self.bike_if_path) {
            ModePreference::BikesIfPathAvailable
        } else {
            ModePreference::NeverBikes
        }
    }

    /// Sailings an agent tolerates waiting before it balks.
    #[inline]
    pub fn sample_balk_point(&self, rng: &mut SimRng) -> f64 {
        rng.sample(&self.balk_point)
    }
}

fn bernoulli(what: &'static str, p: f64) -> BehaviorResult<Bernoulli> {
    Bernoulli::new(p).map_err(|e| BehaviorError::Distribution { what, reason: e.to_string() })
}
