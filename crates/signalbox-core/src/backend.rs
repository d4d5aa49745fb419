//! The seam between the run controller and the remote simulation service.
//!
//! The controller only ever needs three operations: fetch a plan, reset
//! the scenario, and advance one tick. [`SimulationBackend`] abstracts
//! the mechanism -- the production implementation speaks HTTP, tests use
//! a scripted stub.
//!
//! Every error is treated uniformly as a transport failure: the
//! controller never branches on what went wrong, only on the stage where
//! it happened. The associated `Error` type therefore only has to be
//! displayable.

use signalbox_types::{RunMode, SimulationSnapshot};

/// A remote simulation service the controller can drive.
///
/// Async methods make this trait non-dyn-compatible, so the controller
/// is generic over it (static dispatch) rather than holding a trait
/// object.
#[allow(async_fn_in_trait)]
pub trait SimulationBackend {
    /// Transport-level failure type. Collapsed to a display string by the
    /// controller; no variant-specific handling exists anywhere.
    type Error: std::fmt::Display;

    /// Ask the optimizer for a scheduling plan. The returned text is
    /// opaque to the controller and shown to the user verbatim.
    async fn request_plan(&self) -> Result<String, Self::Error>;

    /// Reset the scenario to its pristine state before the first tick.
    async fn reset(&self) -> Result<(), Self::Error>;

    /// Advance the simulation by one tick under the given policy and
    /// return the resulting snapshot.
    async fn tick(&self, mode: RunMode) -> Result<SimulationSnapshot, Self::Error>;
}
