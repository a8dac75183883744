//! `sc-agent` — population storage for the Sunshine Coast ferry demand model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`mode`]        | `ModePreference` (never / always / if-path cyclist)        |
//! | [`store`]       | `Population` (shared template), `RunState` (per iteration) |
//! | [`builder`]     | `PopulationBuilder` (sizing from scaled populations)       |
//!
//! # Template vs run state
//!
//! Everything fixed at creation (`home`, `mode_preference`, `balk_point`)
//! lives in [`Population`], which is built once and shared immutably by every
//! iteration.  Everything a run mutates (`location`, remaining trip nights,
//! queue membership) lives in [`RunState`]; each iteration owns its own copy.

pub mod builder;
pub mod mode;
pub mod store;


pub use builder::PopulationBuilder;
pub use mode::ModePreference;
pub use store::{Population, RunState};
