//! Presentation sink trait and no-op implementation.
//!
//! The controller pushes everything the user should see through a
//! [`PresentationSink`]: snapshots for rendering, the optimizer's plan,
//! log lines, the final outcome, and the enabled/disabled state of the
//! run triggers. The sink never talks back -- all methods are push-only
//! with no return values, so a failing renderer can never derail a run.
//!
//! The terminal front end provides the real implementation; tests record
//! calls; [`NoOpSink`] discards them.

use signalbox_types::{RunOutcome, SimulationSnapshot};

/// Severity classification for user-facing log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine progress message.
    Info,
    /// A failure the user should notice.
    Error,
}

impl Severity {
    /// Lowercase label for the severity.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver for everything the controller wants shown to the user.
///
/// Calls arrive strictly in run order: triggers are disabled first,
/// snapshots arrive in tick order with no skips or reordering, and
/// triggers are re-enabled as the very last call of every run, no matter
/// how the run ended.
pub trait PresentationSink {
    /// Render one simulation snapshot.
    fn render_snapshot(&mut self, snapshot: &SimulationSnapshot);

    /// Display the optimizer's plan text before an optimized run.
    fn show_plan(&mut self, plan: &str);

    /// Append a log line with the given severity.
    fn log_message(&mut self, message: &str, severity: Severity);

    /// Display the scored outcome of a finished run.
    fn show_outcome(&mut self, outcome: &RunOutcome);

    /// Enable or disable the controls that start a run.
    fn set_triggers_enabled(&mut self, enabled: bool);
}

/// A sink that discards everything. Useful for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl PresentationSink for NoOpSink {
    fn render_snapshot(&mut self, _snapshot: &SimulationSnapshot) {}

    fn show_plan(&mut self, _plan: &str) {}

    fn log_message(&mut self, _message: &str, _severity: Severity) {}

    fn show_outcome(&mut self, _outcome: &RunOutcome) {}

    fn set_triggers_enabled(&mut self, _enabled: bool) {}
}
