//! Which scheduling policy a run exercises.

use serde::{Deserialize, Serialize};

/// Scheduling policy selector for one run.
///
/// Chooses the tick endpoint and whether a plan is fetched from the
/// optimizer before the run starts. Each run is either entirely baseline
/// or entirely optimized; the mode never changes mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// First-come-first-served scheduling with no plan fetch.
    Baseline,
    /// AI-planned scheduling; a plan is fetched and displayed first.
    Optimized,
}

impl RunMode {
    /// Whether this mode requires a plan fetch before the run.
    pub const fn is_optimized(self) -> bool {
        matches!(self, Self::Optimized)
    }

    /// Lowercase label used in logs and CLI output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Optimized => "optimized",
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
