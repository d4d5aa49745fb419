//! Outcome scoring for a finished run.
//!
//! Scoring is a pure function of the last snapshot the controller managed
//! to fetch. Verdict precedence is fixed: any conflicted train fails the
//! run outright, a fully arrived roster is a success scored on the express
//! service's delay, and anything else is a timeout. The same snapshot
//! always scores to the same outcome.

use chrono::{NaiveTime, Timelike};
use signalbox_types::{OutcomeStatus, RunOutcome, SimulationSnapshot, TrainStatus};

/// Substring in a train id that marks it as the express service.
pub const EXPRESS_MARKER: &str = "EXP";

/// Penalty minutes charged when any train ends the run in conflict.
pub const CONFLICT_PENALTY_MINUTES: u64 = 200;

/// Penalty minutes charged when the run ends with trains still en route.
pub const TIMEOUT_PENALTY_MINUTES: u64 = 300;

/// Schedule index of the express checkpoint used for delay scoring.
const EXPRESS_CHECKPOINT: usize = 1;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a run could not be scored.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    /// The run produced no snapshot at all, so there is nothing to score.
    #[error("could not get final state from simulation")]
    NoFinalSnapshot,

    /// Every train arrived but none of them carries the express marker.
    #[error("no express train ({EXPRESS_MARKER}) found in the final state")]
    ExpressTrainMissing,

    /// The express train's schedule has no entry at the scoring checkpoint.
    #[error("express train {train_id} has no schedule entry to score against")]
    CheckpointMissing {
        /// Id of the express train with the short schedule.
        train_id: String,
    },

    /// The scheduled arrival at the checkpoint is not an `HH:MM` time.
    #[error("unparseable scheduled arrival time: {value}")]
    BadScheduleTime {
        /// The raw schedule string that failed to parse.
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a finished run from its last observed snapshot.
///
/// Passing `None` means the run never produced a snapshot (the very first
/// tick failed), which is unscoreable.
///
/// # Errors
///
/// Returns [`EvaluationError::NoFinalSnapshot`] when there is no snapshot,
/// and the express-schedule errors when a fully arrived roster cannot be
/// scored for delay. Conflict and timeout verdicts never fail: they do not
/// consult the schedule.
pub fn evaluate(
    final_snapshot: Option<&SimulationSnapshot>,
) -> Result<RunOutcome, EvaluationError> {
    let snapshot = final_snapshot.ok_or(EvaluationError::NoFinalSnapshot)?;

    let total_trains = snapshot.trains.len();
    let trains_arrived = snapshot
        .trains
        .iter()
        .filter(|t| t.status == TrainStatus::Arrived)
        .count();
    let conflicts = snapshot
        .trains
        .iter()
        .filter(|t| t.status == TrainStatus::Conflict)
        .count();

    // Conflict outranks everything, including a roster that also has
    // every other train arrived.
    if conflicts > 0 {
        return Ok(RunOutcome {
            status: OutcomeStatus::FailureConflict,
            total_delay_minutes: CONFLICT_PENALTY_MINUTES,
            trains_arrived,
            total_trains,
        });
    }

    if trains_arrived == total_trains {
        let delay = express_delay_minutes(snapshot)?;
        return Ok(RunOutcome {
            status: OutcomeStatus::Success,
            total_delay_minutes: delay,
            trains_arrived,
            total_trains,
        });
    }

    Ok(RunOutcome {
        status: OutcomeStatus::FailureTimeout,
        total_delay_minutes: TIMEOUT_PENALTY_MINUTES,
        trains_arrived,
        total_trains,
    })
}

/// Delay of the express service against its checkpoint arrival, clamped
/// to zero when it ran early.
fn express_delay_minutes(snapshot: &SimulationSnapshot) -> Result<u64, EvaluationError> {
    let express = snapshot
        .trains
        .iter()
        .find(|t| t.id.contains(EXPRESS_MARKER))
        .ok_or(EvaluationError::ExpressTrainMissing)?;

    let entry = express.schedule.get(EXPRESS_CHECKPOINT).ok_or_else(|| {
        EvaluationError::CheckpointMissing {
            train_id: express.id.clone(),
        }
    })?;

    let scheduled = NaiveTime::parse_from_str(&entry.scheduled_arrival, "%H:%M").map_err(
        |_err| EvaluationError::BadScheduleTime {
            value: entry.scheduled_arrival.clone(),
        },
    )?;

    let scheduled_minutes = u64::from(scheduled.hour())
        .saturating_mul(60)
        .saturating_add(u64::from(scheduled.minute()));

    // Early arrivals score zero rather than negative.
    Ok(snapshot.simulation_time_minutes.saturating_sub(scheduled_minutes))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
