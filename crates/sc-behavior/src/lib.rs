//! `sc-behavior` — how agents decide to travel and which queue they join.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`generators`]  | `Generators` — the named random processes, built once         |
//! | [`init`]        | `initialize_population` — mode preferences and balk points    |
//! | [`destination`] | `Destinations` — one-time cross-ferry destination assignment  |
//! | [`decision`]    | `TripDecision`, `advance_day` — the daily trip state machine  |
//! | [`classifier`]  | `Traveller`, `Leg`, `classify` — the exhaustive queue table   |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! `Generators` holds distributions only, never RNG state.  Every sampling
//! call takes an explicit `&mut SimRng`, so one `Generators` can be shared
//! immutably by every iteration worker while each worker owns its stream.

pub mod classifier;
pub mod decision;
pub mod destination;
pub mod error;
pub mod generators;
pub mod init;

#[cfg(test)]
mod tests;

pub use classifier::{Leg, Traveller, classify};
pub use decision::{TripDecision, advance_day};
pub use destination::Destinations;
pub use error::{BehaviorError, BehaviorResult};
pub use generators::Generators;
pub use init::initialize_population;
