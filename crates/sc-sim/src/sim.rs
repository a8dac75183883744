//! The `Sim` struct and its day loop.

use sc_agent::{Population, RunState};
use sc_behavior::{
    Destinations, Generators, Leg, Traveller, TripDecision, advance_day, classify,
};
use sc_core::{AgentId, Day, IterationId, SimConfig, SimRng};
use sc_ferry::{BoardingScheduler, DailyTally, FerryQueues};

use crate::{IterationSeries, SimObserver, SimResult, SimResults};

// ── Per-iteration mutable state ───────────────────────────────────────────────

/// Everything one iteration mutates.  Built fresh per iteration so iterations
/// never share state.
struct IterationRun {
    state:     RunState,
    queues:    FerryQueues,
    rng:       SimRng,
    decisions: Vec<TripDecision>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` holds the read-only population template and drives the four-phase
/// day loop for every iteration:
///
/// 1. **Decide**: [`advance_day`] produces one [`TripDecision`] per agent.
/// 2. **Classify** (ascending `AgentId`): each `Depart` / `Return` agent is
///    mapped to exactly one queue by [`classify`] and enqueued.
/// 3. **Board**: [`BoardingScheduler::run_day`] runs the day's sailings.
/// 4. **Record**: the day's [`DailyTally`] is appended to the series.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Calibration, policy, seed and balking switch.
    pub config: SimConfig,

    /// Homes, mode preferences and balk points.  Never mutated by a run.
    pub population: Population,

    /// Each agent's cross-ferry destination, shared by every iteration.
    pub destinations: Destinations,

    pub generators: Generators,

    pub scheduler: BoardingScheduler,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `config.policy.iterations` independent iterations.
    ///
    /// Iteration `k` draws from RNG stream `k` of the master seed, so its
    /// series is identical to `run_iteration(IterationId(k), ..)` and does
    /// not depend on how many iterations run or on the `parallel` feature.
    pub fn run<O: SimObserver>(&self, observer: &mut O) -> SimResult<SimResults> {
        let n = self.config.policy.iterations;
        log::info!(
            "running {n} iteration(s) of {} days with {} agents",
            self.config.model.calendar.days,
            self.population.count,
        );
        observer.on_run_start(&self.config, self.population.count);

        #[cfg(not(feature = "parallel"))]
        let series = {
            let mut series = Vec::with_capacity(n as usize);
            for k in 0..n {
                series.push(self.run_iteration(IterationId(k), observer)?);
            }
            series
        };

        #[cfg(feature = "parallel")]
        let series = {
            use rayon::prelude::*;

            let series = (0..n)
                .into_par_iter()
                .map(|k| self.run_iteration(IterationId(k), &mut crate::NoopObserver))
                .collect::<SimResult<Vec<_>>>()?;

            // Replay in iteration order so observers see the sequential stream.
            for s in &series {
                observer.on_iteration_start(s.iteration);
                for (t, tally) in s.days.iter().enumerate() {
                    observer.on_day_end(s.iteration, Day(t as u16), tally);
                }
                observer.on_iteration_end(s);
            }
            series
        };

        let results = SimResults::new(series);
        observer.on_sim_end(&results);
        Ok(results)
    }

    /// Run a single iteration from a fresh state: every agent at home, all
    /// queues empty.
    pub fn run_iteration<O: SimObserver>(
        &self,
        iteration: IterationId,
        observer:  &mut O,
    ) -> SimResult<IterationSeries> {
        observer.on_iteration_start(iteration);

        let mut run = IterationRun {
            state:     RunState::new(&self.population),
            queues:    FerryQueues::new(),
            rng:       SimRng::stream(self.config.seed, u64::from(iteration.0)),
            decisions: Vec::with_capacity(self.population.count),
        };

        let calendar = &self.config.model.calendar;
        let mut days = Vec::with_capacity(calendar.days as usize);
        for day in calendar.days() {
            let tally = self.step_day(day, &mut run)?;
            observer.on_day_end(iteration, day, &tally);
            observer.on_day_snapshot(iteration, day, &run.state, &run.queues);
            days.push(tally);
        }

        let series = IterationSeries::new(iteration, days);
        let totals = series.totals();
        log::info!(
            "{iteration}: boarded {} (car out {}, bike out {}, car return {}, bike return {}), balked {}",
            totals.total_boarded(),
            totals.car_outbound(),
            totals.bike_outbound(),
            totals.car_return(),
            totals.bike_return(),
            totals.total_balked(),
        );
        observer.on_iteration_end(&series);
        Ok(series)
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn step_day(&self, day: Day, run: &mut IterationRun) -> SimResult<DailyTally> {
        let IterationRun { state, queues, rng, decisions } = run;
        let peak = self.config.model.calendar.is_peak(day);

        // ── Phase 1: trip decisions ───────────────────────────────────────
        advance_day(&self.population, state, &self.generators, rng, peak, decisions)?;

        // ── Phase 2: classify and enqueue, ascending AgentId ──────────────
        //
        // Queue order within a day follows agent order, which keeps FIFO
        // boarding deterministic for a given seed.
        let corridor = self.config.policy.corridor;
        let mut joined = 0usize;
        for (i, &decision) in decisions.iter().enumerate() {
            let leg = match decision {
                TripDecision::Depart => Leg::Departure,
                TripDecision::Return => Leg::Homeward,
                _ => continue,
            };
            let agent = AgentId(i as u32);
            let traveller = Traveller::of(agent, &self.population, state, &self.destinations);
            let key = classify(&traveller, leg, corridor)?;
            queues.enqueue(key, agent, state)?;
            joined += 1;
        }

        // ── Phase 3: sailings ─────────────────────────────────────────────
        let tally = self.scheduler.run_day(
            queues,
            &self.population,
            state,
            self.destinations.as_slice(),
        )?;

        log::debug!(
            "{day}: {joined} joined, boarded {:?}, balked {:?}, waiting {:?}",
            tally.boarded,
            tally.balked,
            tally.queue_len,
        );
        Ok(tally)
    }
}
