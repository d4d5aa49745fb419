//! Shared type definitions for the signalbox simulation driver.
//!
//! This crate is the single source of truth for the data model exchanged
//! with the train-scheduling backend and derived by the run controller.
//! The wire types mirror the backend's JSON shape exactly (camelCase
//! field names); the derived types never cross the wire.
//!
//! # Modules
//!
//! - [`snapshot`] -- Wire types received once per tick: the full simulation
//!   state with stations, trains, and the simulated clock.
//! - [`outcome`] -- The run verdict computed after the tick loop ends.
//! - [`mode`] -- Which scheduling policy a run exercises.

pub mod mode;
pub mod outcome;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use mode::RunMode;
pub use outcome::{OutcomeStatus, RunOutcome};
pub use snapshot::{ScheduleEntry, SimulationSnapshot, Station, Train, TrainStatus};
