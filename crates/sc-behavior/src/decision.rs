//! The daily trip state machine.
//!
//! ```text
//!             ┌──────── initiation draw fails / 0 nights ───────┐
//!             ▼                                                 │
//!   at home ──┴── initiation + n>0 nights ──► Depart ─► queued ─┴─► boards ─► away
//!                                                                            │
//!   away: nights>0 → decrement → Continue … nights==0 → Return ─► queued ─► boards ─► home
//! ```
//!
//! Agents already holding a queue slot are left alone (`Queued`).  An agent
//! that balked keeps its trip state: at home with nights pending it departs
//! again the next day without re-rolling; away with zero nights it returns
//! again the next day.

use sc_agent::{Population, RunState};
use sc_core::SimRng;

use crate::{BehaviorError, BehaviorResult, Generators};

/// Exactly one outcome per agent per day.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TripDecision {
    /// At home and not travelling today.
    Stay,
    /// At home, starting (or retrying) a trip: join an outbound-leg queue.
    Depart,
    /// Already waiting in a ferry queue.
    Queued,
    /// Away with nights remaining.
    Continue,
    /// Away with no nights remaining: join a homeward-leg queue.
    Return,
}

/// Run the trip decision for every agent, writing one [`TripDecision`] per
/// agent into `decisions` (cleared first) and updating `state.trip_nights`.
///
/// # Errors
///
/// [`BehaviorError::AgentCountMismatch`] if `state` was not built for
/// `population`; nothing is decided in that case.
pub fn advance_day(
    population: &Population,
    state:      &mut RunState,
    generators: &Generators,
    rng:        &mut SimRng,
    peak:       bool,
    decisions:  &mut Vec<TripDecision>,
) -> BehaviorResult<()> {
    check_len(population.count, state.location.len(), "agent locations")?;
    check_len(population.count, state.trip_nights.len(), "trip lengths")?;
    check_len(population.count, state.queued.len(), "queue flags")?;

    decisions.clear();
    decisions.reserve(population.count);

    for i in 0..population.count {
        let nights = &mut state.trip_nights[i];
        let decision = if state.queued[i] {
            TripDecision::Queued
        } else if state.location[i] == population.home[i] {
            if *nights > 0 {
                TripDecision::Depart
            } else if generators.sample_trip_initiation(rng, peak) {
                // A zero-night draw is the same as not travelling.
                *nights = generators.sample_trip_duration(rng);
                if *nights > 0 { TripDecision::Depart } else { TripDecision::Stay }
            } else {
                TripDecision::Stay
            }
        } else {
            *nights = nights.saturating_sub(1);
            if *nights == 0 { TripDecision::Return } else { TripDecision::Continue }
        };
        decisions.push(decision);
    }
    Ok(())
}

fn check_len(expected: usize, got: usize, what: &'static str) -> BehaviorResult<()> {
    if expected != got {
        return Err(BehaviorError::AgentCountMismatch { expected, got, what });
    }
    Ok(())
}
