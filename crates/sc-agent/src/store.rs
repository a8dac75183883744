//! Core agent storage: `Population` (shared template) and `RunState`
//! (per-iteration mutable state).
//!
//! # Why two structs?
//!
//! Repeated iterations share one population but must never share mutable
//! state.  Keeping the fields a run mutates in a separate `RunState` lets the
//! orchestrator hand `&Population` to any number of iteration workers while
//! each worker holds `&mut` to its own `RunState`:
//!
//! ```ignore
//! let population: &Population = &sim.population;
//! let series = (0..n)
//!     .into_par_iter()
//!     .map(|k| run_iteration(population, RunState::new(population), k))
//!     .collect::<Vec<_>>();
//! ```

use sc_core::{AgentId, Settlement};

use crate::ModePreference;

// ── Population ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for the fields fixed at agent creation.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.
#[derive(Clone, Debug)]
pub struct Population {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Home settlement.  Never mutated after construction.
    pub home: Vec<Settlement>,

    /// Bicycle-mode preference.  Filled once by the initializer.
    pub mode_preference: Vec<ModePreference>,

    /// Sailings the agent will wait in a queue before giving up for the day.
    pub balk_point: Vec<f64>,
}

impl Population {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn home_of(&self, agent: AgentId) -> Settlement {
        self.home[agent.index()]
    }

    #[inline]
    pub fn mode_of(&self, agent: AgentId) -> ModePreference {
        self.mode_preference[agent.index()]
    }

    /// Number of agents whose home is `settlement`.
    pub fn residents_of(&self, settlement: Settlement) -> usize {
        self.home.iter().filter(|&&h| h == settlement).count()
    }

    /// Number of agents with the given preference.
    pub fn count_preference(&self, pref: ModePreference) -> usize {
        self.mode_preference.iter().filter(|&&p| p == pref).count()
    }

    pub(crate) fn new(home: Vec<Settlement>) -> Self {
        let count = home.len();
        Self {
            count,
            home,
            mode_preference: vec![ModePreference::NeverBikes; count],
            balk_point: vec![0.0; count],
        }
    }
}

// ── RunState ──────────────────────────────────────────────────────────────────

/// Mutable per-agent state for one iteration.
///
/// Invariant: `location[i] == population.home[i]` exactly when agent `i` is
/// not away on a trip.  `location` is written only by the boarding scheduler.
#[derive(Clone, Debug)]
pub struct RunState {
    /// Current settlement.
    pub location: Vec<Settlement>,

    /// Remaining trip nights.  At home, a positive value is a trip waiting to
    /// depart; away, it counts down to the homeward crossing.
    pub trip_nights: Vec<u32>,

    /// `true` while the agent holds a slot in one of the ferry queues.
    pub queued: Vec<bool>,
}

impl RunState {
    /// Fresh state: every agent at home, no trips, empty queues.
    pub fn new(population: &Population) -> Self {
        Self {
            location:    population.home.clone(),
            trip_nights: vec![0; population.count],
            queued:      vec![false; population.count],
        }
    }

    /// Send every agent home and clear all trips, as at the start of an
    /// iteration.
    pub fn reset(&mut self, population: &Population) {
        self.location.clone_from(&population.home);
        self.trip_nights.clear();
        self.trip_nights.resize(population.count, 0);
        self.queued.clear();
        self.queued.resize(population.count, false);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.location.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.location.is_empty()
    }

    /// `true` if the agent is currently away from home.
    #[inline]
    pub fn is_away(&self, population: &Population, agent: AgentId) -> bool {
        self.location[agent.index()] != population.home[agent.index()]
    }

    /// Number of agents away from home.
    pub fn away_count(&self, population: &Population) -> usize {
        self.location
            .iter()
            .zip(&population.home)
            .filter(|(loc, home)| loc != home)
            .count()
    }
}
