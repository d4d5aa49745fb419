//! Run lifecycle controller.
//!
//! [`RunController`] drives one complete run against the backend:
//!
//! - **Plan fetch** (optimized runs only): request the AI plan up front;
//!   a failure here aborts the run before anything else is touched
//! - **Reset**: put the backend into a clean state before the first tick
//! - **Tick loop**: advance the simulation one tick at a time, pushing
//!   every snapshot to the presentation sink in arrival order
//! - **Termination**: stop when every train has settled, when the
//!   simulated clock passes the ceiling, or when the transport drops
//! - **Scoring**: hand the last good snapshot to the evaluator and push
//!   the verdict
//!
//! The controller owns the single-run guard: a second `run` call while
//! one is in flight is rejected with [`RunError::AlreadyRunning`] instead
//! of trusting the caller to serialize invocations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info, warn};

use signalbox_types::{RunMode, RunOutcome, SimulationSnapshot};

use crate::backend::SimulationBackend;
use crate::evaluate::evaluate;
use crate::sink::{PresentationSink, Severity};

/// Default pause between ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Default simulated-minutes ceiling after which a run is cut off.
pub const DEFAULT_TIME_CEILING_MINUTES: u64 = 300;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning for one controller instance.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Pause between ticks. Pacing is a presentation device, not a
    /// simulation requirement; zero skips the sleep entirely.
    pub tick_interval: Duration,
    /// Simulated-minutes ceiling. The loop stops once a snapshot's clock
    /// passes this value, whatever the trains are doing.
    pub time_ceiling_minutes: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            time_ceiling_minutes: DEFAULT_TIME_CEILING_MINUTES,
        }
    }
}

// ---------------------------------------------------------------------------
// Run results
// ---------------------------------------------------------------------------

/// Why the tick loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// Every train reached a settled status.
    AllTrainsSettled,
    /// The simulated clock passed the configured ceiling.
    TimeCeilingReached,
    /// A tick request failed; the loop kept the last good snapshot.
    TransportLost,
}

/// What one completed run produced.
///
/// `outcome` is `None` when the run ended without a scoreable snapshot,
/// in which case the failure was already pushed to the sink as an error
/// message.
#[derive(Debug)]
pub struct RunReport {
    /// Which tick policy the run used.
    pub mode: RunMode,
    /// Why the tick loop stopped.
    pub end: RunEnd,
    /// The scored verdict, if the final snapshot could be evaluated.
    pub outcome: Option<RunOutcome>,
    /// Number of snapshots received before the loop stopped.
    pub ticks: u64,
}

/// Errors that abort a run before the tick loop produces a report.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Another run is still in flight on this controller.
    #[error("a run is already in progress")]
    AlreadyRunning,

    /// The optimizer could not be reached; nothing else was attempted.
    #[error("plan fetch failed: {reason}")]
    PlanFetch {
        /// Transport failure rendered to a string.
        reason: String,
    },

    /// The backend refused to reset; ticking never started.
    #[error("reset failed: {reason}")]
    Reset {
        /// Transport failure rendered to a string.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Drives runs against a [`SimulationBackend`], one at a time.
#[derive(Debug)]
pub struct RunController<B> {
    backend: B,
    config: ControllerConfig,
    running: AtomicBool,
}

impl<B: SimulationBackend> RunController<B> {
    /// Create a controller over the given backend.
    pub const fn new(backend: B, config: ControllerConfig) -> Self {
        Self {
            backend,
            config,
            running: AtomicBool::new(false),
        }
    }

    /// Execute one complete run and score it.
    ///
    /// Triggers are disabled on the sink before any request is issued and
    /// re-enabled as the last action of the run, on every path out.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::AlreadyRunning`] if a run is already in flight
    /// (the sink is not touched in that case), [`RunError::PlanFetch`] if
    /// an optimized run cannot obtain its plan, and [`RunError::Reset`]
    /// if the backend cannot be reset. Tick failures are not errors: the
    /// run still completes with a report, scored from the last good
    /// snapshot when one exists.
    pub async fn run(
        &self,
        mode: RunMode,
        sink: &mut dyn PresentationSink,
    ) -> Result<RunReport, RunError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(RunError::AlreadyRunning);
        }

        sink.set_triggers_enabled(false);
        let result = self.run_inner(mode, sink).await;
        sink.set_triggers_enabled(true);
        self.running.store(false, Ordering::Release);

        result
    }

    /// The run body between the trigger toggles.
    async fn run_inner(
        &self,
        mode: RunMode,
        sink: &mut dyn PresentationSink,
    ) -> Result<RunReport, RunError> {
        info!(mode = %mode, "run starting");
        sink.log_message(
            if mode.is_optimized() {
                "Running simulation with AI plan..."
            } else {
                "Running normal simulation..."
            },
            Severity::Info,
        );

        // --- Plan fetch (optimized runs only) ---
        if mode.is_optimized() {
            match self.backend.request_plan().await {
                Ok(plan) => sink.show_plan(&plan),
                Err(e) => {
                    warn!(error = %e, "plan fetch failed");
                    sink.log_message(
                        "Error: Failed to get AI plan from backend.",
                        Severity::Error,
                    );
                    return Err(RunError::PlanFetch {
                        reason: e.to_string(),
                    });
                }
            }
        }

        // --- Reset before the first tick ---
        if let Err(e) = self.backend.reset().await {
            warn!(error = %e, "reset failed");
            sink.log_message("Error: Failed to reset the simulation.", Severity::Error);
            return Err(RunError::Reset {
                reason: e.to_string(),
            });
        }

        // --- Tick until a termination condition fires ---
        let (latest, end, ticks) = self.tick_loop(mode, sink).await;

        info!(mode = %mode, end = ?end, ticks, "run finished");

        // --- Score whatever the loop left behind ---
        let outcome = match evaluate(latest.as_ref()) {
            Ok(outcome) => {
                sink.show_outcome(&outcome);
                Some(outcome)
            }
            Err(e) => {
                warn!(error = %e, "run could not be scored");
                sink.log_message(&format!("Error: {e}."), Severity::Error);
                None
            }
        };

        Ok(RunReport {
            mode,
            end,
            outcome,
            ticks,
        })
    }

    /// Poll ticks until the roster settles, the clock runs out, or the
    /// transport drops. Returns the last good snapshot alongside the end
    /// reason and tick count.
    async fn tick_loop(
        &self,
        mode: RunMode,
        sink: &mut dyn PresentationSink,
    ) -> (Option<SimulationSnapshot>, RunEnd, u64) {
        let mut latest: Option<SimulationSnapshot> = None;
        let mut ticks: u64 = 0;

        loop {
            // --- Advance one tick ---
            let snapshot = match self.backend.tick(mode).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!(error = %e, tick = ticks, "tick failed");
                    sink.log_message(
                        "Error: Lost connection to backend during simulation.",
                        Severity::Error,
                    );
                    return (latest, RunEnd::TransportLost, ticks);
                }
            };

            ticks = ticks.saturating_add(1);
            debug!(
                tick = ticks,
                sim_minutes = snapshot.simulation_time_minutes,
                trains = snapshot.trains.len(),
                "snapshot received"
            );

            // --- Render in arrival order ---
            sink.render_snapshot(&snapshot);

            // --- Check termination (after render) ---
            let settled = snapshot.all_trains_settled();
            let over_ceiling = snapshot.simulation_time_minutes > self.config.time_ceiling_minutes;
            latest = Some(snapshot);

            if settled {
                return (latest, RunEnd::AllTrainsSettled, ticks);
            }
            if over_ceiling {
                return (latest, RunEnd::TimeCeilingReached, ticks);
            }

            // --- Pace the next tick ---
            if !self.config.tick_interval.is_zero() {
                tokio::time::sleep(self.config.tick_interval).await;
            }
        }
    }
}
