//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `data.csv`: day × iteration table of outbound car and bike trips
//! - `daily_tallies.csv`: one row per iteration-day with all four queues

use std::fs::File;
use std::path::Path;

use csv::Writer;
use sc_core::QueueKey;
use sc_sim::SimResults;

use crate::writer::OutputWriter;
use crate::{CountConvention, DailyTallyRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    series:   Writer<File>,
    tallies:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the tally header row.
    ///
    /// The `data.csv` header depends on the iteration count and is written
    /// by [`write_series`](OutputWriter::write_series).
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let series = Writer::from_path(dir.join("data.csv"))?;

        let mut tallies = Writer::from_path(dir.join("daily_tallies.csv"))?;
        tallies.write_record(tally_header())?;

        Ok(Self {
            series,
            tallies,
            finished: false,
        })
    }
}

/// `iteration,day`, then boarded, balked and queue-length columns per queue.
fn tally_header() -> Vec<String> {
    let mut header = vec!["iteration".to_owned(), "day".to_owned()];
    header.extend(QueueKey::ALL.iter().map(|k| k.as_str().to_owned()));
    header.extend(QueueKey::ALL.iter().map(|k| format!("{k}_balked")));
    header.extend(QueueKey::ALL.iter().map(|k| format!("{k}_queue")));
    header
}

/// `Day,Car Trips to Coast,Bike Trips to Coast` for a single iteration,
/// otherwise one `Car Trips k,Bike Trips k` pair per iteration.
fn series_header(iterations: usize) -> Vec<String> {
    let mut header = vec!["Day".to_owned()];
    if iterations == 1 {
        header.push("Car Trips to Coast".to_owned());
        header.push("Bike Trips to Coast".to_owned());
    } else {
        for k in 0..iterations {
            header.push(format!("Car Trips {k}"));
            header.push(format!("Bike Trips {k}"));
        }
    }
    header
}

impl OutputWriter for CsvWriter {
    fn write_tally(&mut self, row: &DailyTallyRow) -> OutputResult<()> {
        let mut record = Vec::with_capacity(14);
        record.push(row.iteration.to_string());
        record.push(row.day.to_string());
        for counts in [&row.boarded, &row.balked, &row.queue_len] {
            record.extend(counts.iter().map(u32::to_string));
        }
        self.tallies.write_record(&record)?;
        Ok(())
    }

    fn write_series(&mut self, results: &SimResults, convention: CountConvention) -> OutputResult<()> {
        self.series.write_record(series_header(results.iterations()))?;

        let columns: Vec<_> = results.series.iter().map(|s| convention.apply(s)).collect();
        for t in 0..results.days() {
            let mut record = Vec::with_capacity(1 + 2 * columns.len());
            record.push(t.to_string());
            for days in &columns {
                record.push(days[t].car_outbound().to_string());
                record.push(days[t].bike_outbound().to_string());
            }
            self.series.write_record(&record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.series.flush()?;
        self.tallies.flush()?;
        Ok(())
    }
}
