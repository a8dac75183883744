//! `sc-output` — result sinks for the ferry demand model.
//!
//! | Writer       | Files created                          |
//! |--------------|----------------------------------------|
//! | [`CsvWriter`] | `data.csv`, `daily_tallies.csv`        |
//!
//! `data.csv` is the wide per-day table of outbound car and bike trips, one
//! column pair per iteration.  `daily_tallies.csv` is the long-format stream
//! of every queue's boardings, balks and end-of-day length.
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sc_output::{CountConvention, CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("."))?;
//! let mut obs = SimOutputObserver::new(writer, CountConvention::Daily);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CountConvention, DailyTallyRow};
pub use writer::OutputWriter;
