//! Mode/route classification: which of the four ferry queues an agent joins.
//!
//! # Rule
//!
//! The sailing direction follows from where the agent stands: in Vancouver it
//! rides `Outbound`, on the coast it rides `Return`.
//!
//! The mode follows from the agent's preference and whether the corridor
//! covers the coast-side end of its crossing.  That end is the destination
//! for a Vancouver resident and home for a coast resident, on both legs of
//! the trip:
//!
//! | preference             | corridor covers coast end? | mode |
//! |------------------------|----------------------------|------|
//! | `NeverBikes`           | —                          | Car  |
//! | `AlwaysBikes`          | —                          | Bike |
//! | `BikesIfPathAvailable` | yes                        | Bike |
//! | `BikesIfPathAvailable` | no                         | Car  |
//!
//! Agent states that cannot describe a ferry crossing (a Vancouver resident
//! bound for Vancouver, a homeward leg for an agent already home, …) are
//! rejected with [`BehaviorError::Unclassified`] rather than dropped.

use sc_agent::{ModePreference, Population, RunState};
use sc_core::{AgentId, Corridor, FerryDirection, Mode, QueueKey, Settlement};

use crate::{BehaviorError, BehaviorResult, Destinations};

/// Which half of its trip an agent is making.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Leg {
    /// Leaving home for the destination.
    Departure,
    /// Heading back home.
    Homeward,
}

/// The agent fields the classifier reads.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Traveller {
    pub agent:       AgentId,
    pub home:        Settlement,
    pub location:    Settlement,
    pub destination: Settlement,
    pub preference:  ModePreference,
}

impl Traveller {
    /// Gather `agent`'s fields from the template, run state, and destinations.
    #[inline]
    pub fn of(
        agent:        AgentId,
        population:   &Population,
        state:        &RunState,
        destinations: &Destinations,
    ) -> Self {
        let i = agent.index();
        Self {
            agent,
            home:        population.home[i],
            location:    state.location[i],
            destination: destinations.of(agent),
            preference:  population.mode_preference[i],
        }
    }
}

/// Map a travelling agent to exactly one ferry queue.
pub fn classify(traveller: &Traveller, leg: Leg, corridor: Corridor) -> BehaviorResult<QueueKey> {
    let Traveller { home, location, destination, preference, .. } = *traveller;

    let expected_location = match leg {
        Leg::Departure => home,
        Leg::Homeward  => destination,
    };
    let crosses_ferry = home.is_coast() != destination.is_coast();
    if !crosses_ferry || location != expected_location {
        return Err(unclassified(traveller, leg, corridor));
    }

    let direction = if location.is_coast() {
        FerryDirection::Return
    } else {
        FerryDirection::Outbound
    };

    let coast_end = if home.is_coast() { home } else { destination };
    let covered = corridor.covers(coast_end);

    let mode = match (preference, covered) {
        (ModePreference::NeverBikes, _)                  => Mode::Car,
        (ModePreference::AlwaysBikes, _)                 => Mode::Bike,
        (ModePreference::BikesIfPathAvailable, true)     => Mode::Bike,
        (ModePreference::BikesIfPathAvailable, false)    => Mode::Car,
    };

    Ok(QueueKey::new(mode, direction))
}

fn unclassified(t: &Traveller, leg: Leg, corridor: Corridor) -> BehaviorError {
    BehaviorError::Unclassified {
        agent:       t.agent,
        leg,
        home:        t.home,
        location:    t.location,
        destination: t.destination,
        preference:  t.preference,
        corridor,
    }
}
