//! Plain data row types written by output backends.

use std::fmt;

use sc_core::{Day, IterationId};
use sc_ferry::DailyTally;
use sc_sim::IterationSeries;

/// How daily counts are presented in written output.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum CountConvention {
    /// Each row holds that day's boardings and balks only.
    #[default]
    Daily,
    /// Each row holds running totals from day 0 through that day.
    Cumulative,
}

impl CountConvention {
    /// The series' tallies under this convention.  Queue lengths are levels
    /// and are never summed.
    pub fn apply(self, series: &IterationSeries) -> Vec<DailyTally> {
        match self {
            CountConvention::Daily      => series.days.clone(),
            CountConvention::Cumulative => series.cumulative(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CountConvention::Daily      => "daily",
            CountConvention::Cumulative => "cumulative",
        }
    }
}

impl fmt::Display for CountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One iteration-day of the long-format tally stream.
///
/// Arrays are indexed by `QueueKey::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTallyRow {
    pub iteration: u32,
    pub day:       u16,
    pub boarded:   [u32; 4],
    pub balked:    [u32; 4],
    pub queue_len: [u32; 4],
}

impl DailyTallyRow {
    pub fn new(iteration: IterationId, day: Day, tally: &DailyTally) -> Self {
        Self {
            iteration: iteration.0,
            day:       day.0,
            boarded:   tally.boarded,
            balked:    tally.balked,
            queue_len: tally.queue_len,
        }
    }
}
