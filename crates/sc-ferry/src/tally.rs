//! Passenger counts per sailing and per day.

use sc_core::{AgentId, QueueKey};

/// What happened on one sailing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SailingReport {
    /// Agents boarded from each queue, in boarding order.
    pub boarded: [Vec<AgentId>; 4],
    /// Agents that balked from each queue before this sailing.
    pub balked: [u32; 4],
}

impl SailingReport {
    #[inline]
    pub fn boarded_count(&self, key: QueueKey) -> u32 {
        self.boarded[key.index()].len() as u32
    }
}

/// One day's counts for all four queues.
///
/// `boarded` and `balked` are daily (non-cumulative) totals; `queue_len` is
/// the number still waiting after the day's last sailing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DailyTally {
    pub boarded:   [u32; 4],
    pub balked:    [u32; 4],
    pub queue_len: [u32; 4],
}

impl DailyTally {
    #[inline]
    pub fn boarded(&self, key: QueueKey) -> u32 {
        self.boarded[key.index()]
    }

    #[inline]
    pub fn car_outbound(&self) -> u32 {
        self.boarded(QueueKey::CarOutbound)
    }

    #[inline]
    pub fn bike_outbound(&self) -> u32 {
        self.boarded(QueueKey::BikeOutbound)
    }

    #[inline]
    pub fn car_return(&self) -> u32 {
        self.boarded(QueueKey::CarReturn)
    }

    #[inline]
    pub fn bike_return(&self) -> u32 {
        self.boarded(QueueKey::BikeReturn)
    }

    pub fn total_boarded(&self) -> u32 {
        self.boarded.iter().sum()
    }

    pub fn total_balked(&self) -> u32 {
        self.balked.iter().sum()
    }

    /// Fold one sailing's boardings and balks into the day.
    pub fn record_sailing(&mut self, report: &SailingReport) {
        for key in QueueKey::ALL {
            self.boarded[key.index()] += report.boarded_count(key);
            self.balked[key.index()] += report.balked[key.index()];
        }
    }

    /// Element-wise sum of boardings and balks; `queue_len` takes `other`'s
    /// value (queue length is a level, not a flow).
    pub fn accumulate(&mut self, other: &DailyTally) {
        for i in 0..4 {
            self.boarded[i] += other.boarded[i];
            self.balked[i] += other.balked[i];
        }
        self.queue_len = other.queue_len;
    }
}
