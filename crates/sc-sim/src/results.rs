//! In-memory result series.

use sc_core::{Day, IterationId, QueueKey};
use sc_ferry::DailyTally;

/// One iteration's per-day tallies, indexed by day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationSeries {
    pub iteration: IterationId,
    pub days:      Vec<DailyTally>,
}

impl IterationSeries {
    pub fn new(iteration: IterationId, days: Vec<DailyTally>) -> Self {
        Self { iteration, days }
    }

    #[inline]
    pub fn day(&self, day: Day) -> Option<&DailyTally> {
        self.days.get(day.index())
    }

    /// Boardings and balks summed over the year.
    pub fn totals(&self) -> DailyTally {
        let mut total = DailyTally::default();
        for d in &self.days {
            total.accumulate(d);
        }
        total
    }

    /// Running totals: entry `t` holds everything boarded on days `0..=t`.
    pub fn cumulative(&self) -> Vec<DailyTally> {
        let mut running = DailyTally::default();
        self.days
            .iter()
            .map(|d| {
                running.accumulate(d);
                running
            })
            .collect()
    }
}

/// Every iteration's series.  Index with [`get`](Self::get) by
/// `(day, iteration)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimResults {
    pub series: Vec<IterationSeries>,
}

impl SimResults {
    pub fn new(series: Vec<IterationSeries>) -> Self {
        Self { series }
    }

    pub fn iterations(&self) -> usize {
        self.series.len()
    }

    /// Days per iteration (every series has the same length).
    pub fn days(&self) -> usize {
        self.series.first().map_or(0, |s| s.days.len())
    }

    #[inline]
    pub fn get(&self, day: Day, iteration: IterationId) -> Option<&DailyTally> {
        self.series.get(iteration.index())?.day(day)
    }

    /// Mean boardings per queue for each day, averaged across iterations.
    pub fn mean_by_day(&self) -> Vec<[f64; 4]> {
        let n = self.iterations();
        if n == 0 {
            return Vec::new();
        }
        (0..self.days())
            .map(|t| {
                let mut mean = [0.0; 4];
                for s in &self.series {
                    for key in QueueKey::ALL {
                        mean[key.index()] += f64::from(s.days[t].boarded(key));
                    }
                }
                mean.map(|v| v / n as f64)
            })
            .collect()
    }
}
