//! Run orchestration and outcome scoring for the Signalbox controller.
//!
//! This crate owns the run lifecycle that drives the remote simulation:
//! plan fetch, reset, tick loop, termination, and scoring.
//!
//! # Modules
//!
//! - [`backend`] -- [`SimulationBackend`] trait, the seam to the remote
//!   simulation service.
//! - [`controller`] -- [`RunController`], the async state machine that
//!   executes one run end to end.
//! - [`evaluate`] -- Pure outcome scoring from a final snapshot.
//! - [`sink`] -- [`PresentationSink`] trait and [`NoOpSink`], the
//!   push-only surface the controller renders through.
//!
//! [`SimulationBackend`]: backend::SimulationBackend
//! [`RunController`]: controller::RunController
//! [`PresentationSink`]: sink::PresentationSink
//! [`NoOpSink`]: sink::NoOpSink

pub mod backend;
pub mod controller;
pub mod evaluate;
pub mod sink;
