//! coast — interactive ferry demand study for the Sunshine Coast.
//!
//! Asks for a bike corridor, the share of residents who would bike if the
//! path covers their trip, and an iteration count, then simulates a year of
//! ferry demand and writes `data.csv` and `daily_tallies.csv` to the working
//! directory.
//!
//! Environment:
//! - `SC_LOG`:  log level (`error` … `trace`), default `info`
//! - `SC_SEED`: master seed, default drawn from the clock
//!
//! Pass `--cumulative` to write running totals instead of daily counts.

mod prompt;

use std::env;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use sc_core::{QueueKey, SimConfig};
use sc_output::{CountConvention, CsvWriter, SimOutputObserver};
use sc_sim::SimBuilder;

use prompt::prompt_policy;

// ── Setup ─────────────────────────────────────────────────────────────────────

fn log_level() -> Result<LevelFilter> {
    match env::var("SC_LOG") {
        Ok(s)  => LevelFilter::from_str(&s).with_context(|| format!("invalid SC_LOG level {s:?}")),
        Err(_) => Ok(LevelFilter::Info),
    }
}

fn seed() -> Result<u64> {
    if let Ok(s) = env::var("SC_SEED") {
        return s.parse().with_context(|| format!("invalid SC_SEED {s:?}"));
    }
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(now.as_nanos() as u64)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    SimpleLogger::new().with_level(log_level()?).init()?;

    let convention = if env::args().any(|a| a == "--cumulative") {
        CountConvention::Cumulative
    } else {
        CountConvention::Daily
    };

    println!("=== coast — Sunshine Coast ferry demand ===");
    let policy = {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        prompt_policy(&mut stdin.lock(), &mut stdout)?
    };

    let seed = seed()?;
    log::info!("seed {seed}, writing {convention} counts");
    let config = SimConfig::new(policy, seed);

    // 1. Build the population template and destinations.
    let sim = SimBuilder::new(config).build()?;

    // 2. Run with output streaming to the working directory.
    let writer = CsvWriter::new(Path::new("."))?;
    let mut obs = SimOutputObserver::new(writer, convention);

    let t0 = Instant::now();
    let results = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing output");
    }

    // 3. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!(
        "{:<10} {:>12} {:>12} {:>12} {:>12} {:>8}",
        "Iteration", "car_out", "bike_out", "car_return", "bike_return", "balked"
    );
    println!("{}", "-".repeat(71));
    for s in &results.series {
        let t = s.totals();
        println!(
            "{:<10} {:>12} {:>12} {:>12} {:>12} {:>8}",
            s.iteration.0,
            t.car_outbound(),
            t.bike_outbound(),
            t.car_return(),
            t.bike_return(),
            t.total_balked(),
        );
    }

    let means = results.mean_by_day();
    let yearly = |key: QueueKey| -> f64 { means.iter().map(|d| d[key.index()]).sum() };
    println!();
    println!(
        "Mean per year: {:.1} car / {:.1} bike to the coast, {:.1} car / {:.1} bike to Vancouver",
        yearly(QueueKey::CarOutbound),
        yearly(QueueKey::BikeOutbound),
        yearly(QueueKey::CarReturn),
        yearly(QueueKey::BikeReturn),
    );
    println!("Wrote data.csv and daily_tallies.csv");
    Ok(())
}
