//! Simulation calendar.
//!
//! Time advances in whole days.  The year is `days` long (365 by default) and
//! contains a single contiguous peak season, inclusive at both ends, during
//! which trips are initiated at the elevated peak rate.

use std::fmt;

// ── Day ───────────────────────────────────────────────────────────────────────

/// A 0-based day index within one simulated year.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u16);

impl Day {
    pub const ZERO: Day = Day(0);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// Length of the simulated year and the position of its peak season.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    /// Days simulated per iteration.  Default: 365.
    pub days: u16,
    /// First peak day (inclusive).  Default: 151.
    pub peak_start: u16,
    /// Last peak day (inclusive).  Default: 243.
    pub peak_end: u16,
}

impl Default for Calendar {
    fn default() -> Self {
        Self { days: 365, peak_start: 151, peak_end: 243 }
    }
}

impl Calendar {
    /// `true` if `day` falls inside the peak window.
    #[inline]
    pub fn is_peak(&self, day: Day) -> bool {
        (self.peak_start..=self.peak_end).contains(&day.0)
    }

    /// Number of peak days in the year.
    pub fn peak_len(&self) -> u16 {
        if self.peak_end < self.peak_start || self.peak_start >= self.days {
            return 0;
        }
        self.peak_end.min(self.days.saturating_sub(1)) - self.peak_start + 1
    }

    /// Every day of the year in order.
    pub fn days(&self) -> impl Iterator<Item = Day> + use<> {
        (0..self.days).map(Day)
    }
}
