//! `sc-core` — foundational types for the Sunshine Coast ferry demand model.
//!
//! This crate is a dependency of every other `sc-*` crate.  It has no `sc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `IterationId`                                  |
//! | [`settlement`]  | `Settlement` (the four-node chain), `Corridor`            |
//! | [`calendar`]    | `Day`, `Calendar` (365-day year with a peak window)       |
//! | [`config`]      | `ModelConfig`, `PolicyInput`, `SimConfig`, constants      |
//! | [`ferry`]       | `Mode`, `FerryDirection`, `QueueKey`                      |
//! | [`rng`]         | `SimRng` (explicitly owned, per-stream seeded)            |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and enum types.   |

pub mod calendar;
pub mod config;
pub mod error;
pub mod ferry;
pub mod ids;
pub mod rng;
pub mod settlement;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calendar::{Calendar, Day};
pub use config::{
    BIKES_PER_FERRY, CARS_PER_FERRY, DEFAULT_P_ALWAYS_BIKE, FERRIES_PER_DAY, MAX_ITERATIONS,
    MODEL_SCALE, ModelConfig, PolicyInput, Populations, SimConfig,
};
pub use error::{CoreError, CoreResult};
pub use ferry::{FerryDirection, Mode, QueueKey};
pub use ids::{AgentId, IterationId};
pub use rng::SimRng;
pub use settlement::{Corridor, Settlement};
