//! The boarding scheduler: runs a day's sailings against the four queues.

use sc_agent::{Population, RunState};
use sc_core::{Mode, ModelConfig, QueueKey, Settlement};

use crate::{DailyTally, FerryError, FerryQueues, FerryResult, SailingReport};

/// Fixed per-sailing capacities and the daily sailing count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardingScheduler {
    /// Car slots per sailing.
    pub cars_per_ferry: u32,
    /// Bicycle slots per sailing.
    pub bikes_per_ferry: u32,
    /// Sailings per day.
    pub ferries_per_day: u32,
    /// When `false`, agents wait indefinitely.
    pub balking: bool,
}

impl BoardingScheduler {
    pub fn new(cars_per_ferry: u32, bikes_per_ferry: u32, ferries_per_day: u32, balking: bool) -> Self {
        Self { cars_per_ferry, bikes_per_ferry, ferries_per_day, balking }
    }

    pub fn from_model(model: &ModelConfig, balking: bool) -> Self {
        Self::new(model.cars_per_ferry, model.bikes_per_ferry, model.ferries_per_day, balking)
    }

    #[inline]
    pub fn capacity(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Car  => self.cars_per_ferry,
            Mode::Bike => self.bikes_per_ferry,
        }
    }

    /// Run all of today's sailings and return the day's tally.
    ///
    /// # Errors
    ///
    /// [`FerryError::AgentCountMismatch`] if `state` or `destinations` was not
    /// sized for `population`.
    pub fn run_day(
        &self,
        queues:       &mut FerryQueues,
        population:   &Population,
        state:        &mut RunState,
        destinations: &[Settlement],
    ) -> FerryResult<DailyTally> {
        check_len(population.count, state.len(), "run state")?;
        check_len(population.count, destinations.len(), "destinations")?;

        let mut tally = DailyTally::default();
        for _ in 0..self.ferries_per_day {
            let report = self.run_sailing(queues, population, state, destinations);
            tally.record_sailing(&report);
        }
        for key in QueueKey::ALL {
            tally.queue_len[key.index()] = queues.len(key) as u32;
        }
        Ok(tally)
    }

    /// One sailing: balk, board, then age the remaining queue.
    ///
    /// Lengths are assumed checked by the caller.
    pub fn run_sailing(
        &self,
        queues:       &mut FerryQueues,
        population:   &Population,
        state:        &mut RunState,
        destinations: &[Settlement],
    ) -> SailingReport {
        let mut report = SailingReport::default();

        for key in QueueKey::ALL {
            let queue = queues.queue_mut(key);

            // Balk before boarding so a balker never takes a slot.
            if self.balking {
                let before = queue.len();
                queue.retain(|slot| {
                    let i = slot.agent.index();
                    let stays = f64::from(slot.sailings_waited) <= population.balk_point[i];
                    if !stays {
                        state.queued[i] = false;
                    }
                    stays
                });
                report.balked[key.index()] = (before - queue.len()) as u32;
            }

            let n = queue.len().min(self.capacity(key.mode()) as usize);
            let boarded = &mut report.boarded[key.index()];
            boarded.reserve(n);
            for slot in queue.drain(..n) {
                let i = slot.agent.index();
                let home = population.home[i];
                state.location[i] = if state.location[i] == home {
                    destinations[i]
                } else {
                    home
                };
                state.queued[i] = false;
                boarded.push(slot.agent);
            }

            for slot in queue.iter_mut() {
                slot.sailings_waited += 1;
            }
        }

        report
    }
}

fn check_len(expected: usize, got: usize, what: &'static str) -> FerryResult<()> {
    if expected != got {
        return Err(FerryError::AgentCountMismatch { expected, got, what });
    }
    Ok(())
}
