//! Model constants and run configuration.
//!
//! Three layers:
//!
//! - [`ModelConfig`]: calibration constants (populations, capacities, trip
//!   rates).  `Default` reproduces the calibrated reference values.
//! - [`PolicyInput`]: the three policy levers collected from the user plus
//!   the always-bikes share.
//! - [`SimConfig`]: both of the above plus the master seed and the balking
//!   switch; this is what the orchestrator consumes.
//!
//! Every layer has a `validate()` that rejects out-of-range values with
//! [`CoreError::Config`] before the core ever sees them.

use crate::{Calendar, CoreError, CoreResult, Corridor, Settlement};

// ── Calibration constants ─────────────────────────────────────────────────────

/// Number of real people represented by one simulated agent.
pub const MODEL_SCALE: f64 = 2.7;

/// Car slots per sailing, in agents.
pub const CARS_PER_FERRY: u32 = (311.0 / MODEL_SCALE) as u32;

/// Bicycle slots per sailing, in agents.
pub const BIKES_PER_FERRY: u32 = (1000.0 / MODEL_SCALE) as u32;

pub const FERRIES_PER_DAY: u32 = 4;

/// Share of die-hard cyclists who ride with or without a corridor.
pub const DEFAULT_P_ALWAYS_BIKE: f64 = 0.01;

/// Upper bound on repeated yearly runs.
pub const MAX_ITERATIONS: u32 = 100;

// Tourist spend of CA$250M at CA$245 per trip, two thirds of it in a 90-day
// peak, spread over ~3M potential travellers.
const PEAK_TRIP_RATE: f64 = 0.0025;
const OFF_PEAK_TRIP_RATE: f64 = 0.00042;
const MEAN_TRIP_NIGHTS: f64 = 3.3;

// ── Populations ───────────────────────────────────────────────────────────────

/// Resident population (people, not agents) of each settlement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Populations {
    pub vancouver:     f64,
    pub gibsons:       f64,
    pub roberts_creek: f64,
    pub sechelt:       f64,
}

impl Default for Populations {
    fn default() -> Self {
        Self {
            vancouver:     2.64e6,
            gibsons:       5.0e3,
            roberts_creek: 3.0e3,
            sechelt:       1.0e4,
        }
    }
}

impl Populations {
    pub fn get(&self, settlement: Settlement) -> f64 {
        match settlement {
            Settlement::Vancouver    => self.vancouver,
            Settlement::Gibsons      => self.gibsons,
            Settlement::RobertsCreek => self.roberts_creek,
            Settlement::Sechelt      => self.sechelt,
        }
    }

    /// Combined population of the three coast settlements.
    pub fn coast_total(&self) -> f64 {
        Settlement::COAST.iter().map(|&s| self.get(s)).sum()
    }

    /// Number of agents representing `settlement` at `model_scale` people
    /// per agent (rounded to the nearest whole agent).
    pub fn agent_count(&self, settlement: Settlement, model_scale: f64) -> usize {
        (self.get(settlement) / model_scale).round() as usize
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Calibration constants for one model build.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// People per agent.  Default: [`MODEL_SCALE`].
    pub model_scale: f64,

    pub populations: Populations,

    /// Car slots per sailing.  Default: [`CARS_PER_FERRY`].
    pub cars_per_ferry: u32,

    /// Bicycle slots per sailing.  Default: [`BIKES_PER_FERRY`].
    pub bikes_per_ferry: u32,

    /// Sailings per day in each direction.  Default: [`FERRIES_PER_DAY`].
    pub ferries_per_day: u32,

    pub calendar: Calendar,

    /// Per-person daily probability of starting a trip during the peak.
    pub peak_trip_rate: f64,

    /// Per-person daily probability of starting a trip off-peak.
    pub off_peak_trip_rate: f64,

    /// Mean of the Poisson trip-length distribution, in nights.
    pub mean_trip_nights: f64,

    /// Lower bound of each agent's balk point, in sailings waited.
    pub balk_min_sailings: f64,

    /// Upper bound of each agent's balk point, in sailings waited.
    pub balk_max_sailings: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_scale:        MODEL_SCALE,
            populations:        Populations::default(),
            cars_per_ferry:     CARS_PER_FERRY,
            bikes_per_ferry:    BIKES_PER_FERRY,
            ferries_per_day:    FERRIES_PER_DAY,
            calendar:           Calendar::default(),
            peak_trip_rate:     PEAK_TRIP_RATE,
            off_peak_trip_rate: OFF_PEAK_TRIP_RATE,
            mean_trip_nights:   MEAN_TRIP_NIGHTS,
            balk_min_sailings:  4.0,
            balk_max_sailings:  12.0,
        }
    }
}

impl ModelConfig {
    /// Daily trip-initiation probability for one agent, i.e. the per-person
    /// rate multiplied by the model scale.
    #[inline]
    pub fn agent_trip_rate(&self, peak: bool) -> f64 {
        let base = if peak { self.peak_trip_rate } else { self.off_peak_trip_rate };
        base * self.model_scale
    }

    /// Total agents across all four settlements.
    pub fn agent_count(&self) -> usize {
        Settlement::ALL
            .iter()
            .map(|&s| self.populations.agent_count(s, self.model_scale))
            .sum()
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.model_scale.is_finite() && self.model_scale > 0.0) {
            return Err(config_err("model_scale", self.model_scale));
        }
        for s in Settlement::ALL {
            let pop = self.populations.get(s);
            if !(pop.is_finite() && pop >= 0.0) {
                return Err(CoreError::Config(format!("population of {s} must be >= 0, got {pop}")));
            }
        }
        if self.populations.coast_total() <= 0.0 {
            return Err(CoreError::Config("coast population must be positive".into()));
        }
        if self.ferries_per_day == 0 {
            return Err(CoreError::Config("ferries_per_day must be at least 1".into()));
        }
        if self.calendar.days == 0 {
            return Err(CoreError::Config("calendar must have at least one day".into()));
        }
        for peak in [true, false] {
            let rate = self.agent_trip_rate(peak);
            if !is_probability(rate) {
                return Err(config_err("scaled trip rate", rate));
            }
        }
        if !(self.mean_trip_nights.is_finite() && self.mean_trip_nights > 0.0) {
            return Err(config_err("mean_trip_nights", self.mean_trip_nights));
        }
        if !(self.balk_min_sailings >= 0.0 && self.balk_min_sailings <= self.balk_max_sailings)
            || !self.balk_max_sailings.is_finite()
        {
            return Err(CoreError::Config(format!(
                "balk range must satisfy 0 <= min <= max, got {}..={}",
                self.balk_min_sailings, self.balk_max_sailings
            )));
        }
        Ok(())
    }
}

// ── PolicyInput ───────────────────────────────────────────────────────────────

/// The policy levers for one study.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyInput {
    pub corridor: Corridor,

    /// Share of residents who bike if the corridor covers their leg.
    pub p_bike_if_path: f64,

    /// Share of residents who bike regardless.  Default: [`DEFAULT_P_ALWAYS_BIKE`].
    pub p_always_bike: f64,

    /// Independent yearly runs to average over, `1..=MAX_ITERATIONS`.
    pub iterations: u32,
}

impl Default for PolicyInput {
    fn default() -> Self {
        Self {
            corridor:       Corridor::None,
            p_bike_if_path: 0.0,
            p_always_bike:  DEFAULT_P_ALWAYS_BIKE,
            iterations:     1,
        }
    }
}

impl PolicyInput {
    pub fn validate(&self) -> CoreResult<()> {
        if !is_probability(self.p_bike_if_path) {
            return Err(config_err("p_bike_if_path", self.p_bike_if_path));
        }
        if !is_probability(self.p_always_bike) {
            return Err(config_err("p_always_bike", self.p_always_bike));
        }
        if !(1..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(CoreError::Config(format!(
                "iterations must be between 1 and {MAX_ITERATIONS}, got {}",
                self.iterations
            )));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Everything the orchestrator needs for one study.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    pub model: ModelConfig,

    pub policy: PolicyInput,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// When `false`, queued agents wait indefinitely instead of balking.
    pub balking: bool,
}

impl SimConfig {
    /// Reference calibration with the given policy and seed, balking on.
    pub fn new(policy: PolicyInput, seed: u64) -> Self {
        Self { model: ModelConfig::default(), policy, seed, balking: true }
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.model.validate()?;
        self.policy.validate()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

fn config_err(field: &str, value: f64) -> CoreError {
    CoreError::Config(format!("{field} out of range: {value}"))
}
