//! `sc-ferry` — ferry queues and boarding.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`queue`]     | `FerryQueues` — four FIFO queues keyed by `QueueKey`            |
//! | [`scheduler`] | `BoardingScheduler` — per-sailing balking and capacity draw-down |
//! | [`tally`]     | `DailyTally`, `SailingReport` — passenger counts                |
//! | [`error`]     | `FerryError`, `FerryResult<T>`                                  |
//!
//! # Boarding model
//!
//! Each sailing, independently for each of the four queues:
//!
//! 1. **Balk**: agents that have already waited more sailings than their
//!    `balk_point` leave the queue without boarding (when balking is on).
//! 2. **Board**: up to the mode's capacity leave the front of the queue, in
//!    FIFO order, and cross: an agent at home moves to its destination, an
//!    agent away moves home.
//! 3. **Wait**: everyone still queued has waited one more sailing.
//!
//! Cars and bikes have separate capacity pools and never compete.  Agents
//! still queued after the last sailing of the day stay queued overnight.

pub mod error;
pub mod queue;
pub mod scheduler;
pub mod tally;


pub use error::{FerryError, FerryResult};
pub use queue::{FerryQueues, QueuedAgent};
pub use scheduler::BoardingScheduler;
pub use tally::{DailyTally, SailingReport};
