//! The `OutputWriter` trait implemented by backend writers.

use sc_sim::SimResults;

use crate::{CountConvention, DailyTallyRow, OutputResult};

/// A destination for simulation results.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one iteration-day row of the long-format stream.
    fn write_tally(&mut self, row: &DailyTallyRow) -> OutputResult<()>;

    /// Write the wide per-day table covering every iteration.
    fn write_series(&mut self, results: &SimResults, convention: CountConvention) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
