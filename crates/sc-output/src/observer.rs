//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sc_core::{Day, IterationId};
use sc_ferry::DailyTally;
use sc_sim::{SimObserver, SimResults};

use crate::row::{CountConvention, DailyTallyRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams daily tallies and writes the final series
/// table to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    convention: CountConvention,
    /// Running totals for the current iteration (cumulative convention).
    running:    DailyTally,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, convention: CountConvention) -> Self {
        Self {
            writer,
            convention,
            running:    DailyTally::default(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_iteration_start(&mut self, _iteration: IterationId) {
        self.running = DailyTally::default();
    }

    fn on_day_end(&mut self, iteration: IterationId, day: Day, tally: &DailyTally) {
        let shown = match self.convention {
            CountConvention::Daily => *tally,
            CountConvention::Cumulative => {
                self.running.accumulate(tally);
                self.running
            }
        };
        let result = self.writer.write_tally(&DailyTallyRow::new(iteration, day, &shown));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, results: &SimResults) {
        let result = self.writer.write_series(results, self.convention);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
