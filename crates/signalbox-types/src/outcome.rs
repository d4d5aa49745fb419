//! The run verdict derived from a final snapshot.
//!
//! A [`RunOutcome`] is computed once per run by the outcome evaluator and
//! pushed to the presentation sink. It is never persisted and never
//! crosses the wire to the backend.

use serde::{Deserialize, Serialize};

/// Verdict category for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    /// Every train arrived; delay is scored against the express timetable.
    Success,
    /// At least one train ended in conflict. Takes precedence over any
    /// count-based success.
    FailureConflict,
    /// The run ended with trains still en route and none in conflict.
    FailureTimeout,
}

impl OutcomeStatus {
    /// Human-readable verdict label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::FailureConflict => "FAILURE (Conflict)",
            Self::FailureTimeout => "FAILURE (Timeout)",
        }
    }

    /// Whether this verdict counts as a success.
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scored result of one complete run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Verdict category.
    pub status: OutcomeStatus,
    /// Total delay in simulated minutes. Fixed penalty for failures,
    /// computed against the express checkpoint for successes. Never
    /// negative.
    pub total_delay_minutes: u64,
    /// Number of trains that reached their destination.
    pub trains_arrived: usize,
    /// Number of trains in the run.
    pub total_trains: usize,
}
