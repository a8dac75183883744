//! Simulation observer trait for progress reporting and data collection.

use sc_agent::RunState;
use sc_core::{Day, IterationId, SimConfig};
use sc_ferry::{DailyTally, FerryQueues};

use crate::{IterationSeries, SimResults};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// day loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// With the `parallel` feature, iterations run on worker threads and the
/// observer is replayed afterwards in iteration order: every hook except
/// [`on_day_snapshot`](Self::on_day_snapshot) still fires, with identical
/// arguments.
pub trait SimObserver {
    /// Called once before the first iteration.
    fn on_run_start(&mut self, _config: &SimConfig, _agent_count: usize) {}

    fn on_iteration_start(&mut self, _iteration: IterationId) {}

    /// Called after each day's last sailing with that day's counts.
    fn on_day_end(&mut self, _iteration: IterationId, _day: Day, _tally: &DailyTally) {}

    /// Called after [`on_day_end`](Self::on_day_end) with read-only access to
    /// the live agent state and queues.  Sequential runs only.
    fn on_day_snapshot(
        &mut self,
        _iteration: IterationId,
        _day:       Day,
        _state:     &RunState,
        _queues:    &FerryQueues,
    ) {}

    fn on_iteration_end(&mut self, _series: &IterationSeries) {}

    /// Called once after the final iteration completes.
    fn on_sim_end(&mut self, _results: &SimResults) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
