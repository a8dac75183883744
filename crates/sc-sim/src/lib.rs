//! `sc-sim` — the simulation orchestrator.
//!
//! # Loop structure
//!
//! ```text
//! build once: population template, mode preferences, balk points, destinations
//!
//! for iteration in 0..n_iterations:            (parallel with `parallel`)
//!   reset every agent home; empty all queues
//!   for day in 0..365:
//!     ① Decide    advance_day -> stay / depart / queued / continue / return
//!     ② Classify  each Depart/Return agent joins exactly one ferry queue
//!     ③ Board     FERRIES_PER_DAY sailings; balk, board FIFO up to capacity
//!     ④ Record    append the day's DailyTally to the iteration's series
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs iterations on Rayon's thread pool.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sc_core::{PolicyInput, SimConfig};
//! use sc_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(policy, seed);
//! let sim = SimBuilder::new(config).build()?;
//! let results = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod results;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use results::{IterationSeries, SimResults};
pub use sim::Sim;
