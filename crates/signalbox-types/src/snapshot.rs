//! Wire types for the simulation state received from the backend.
//!
//! One [`SimulationSnapshot`] arrives per tick as the complete simulation
//! state. Field names are camelCase on the wire; the required fields
//! (`trains`, `stations`, `simulationTimeMinutes`) are not optional here,
//! so a response missing any of them fails to decode instead of producing
//! a half-empty snapshot. Unknown extra fields are tolerated.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TrainStatus
// ---------------------------------------------------------------------------

/// Operational status of a single train.
///
/// The member set is owned by the backend; only [`Arrived`] and
/// [`Conflict`] carry meaning for the run controller and the outcome
/// evaluator. Statuses this client does not know about decode to
/// [`Other`] rather than failing the whole snapshot, and are treated as
/// "still moving".
///
/// [`Arrived`]: TrainStatus::Arrived
/// [`Conflict`]: TrainStatus::Conflict
/// [`Other`]: TrainStatus::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainStatus {
    /// Moving along the track.
    Running,
    /// Held by the scheduling policy at a conflict point.
    Halted,
    /// Reached its final scheduled stop. Terminal.
    Arrived,
    /// Collided with another train's block. Terminal.
    Conflict,
    /// Any status string this client does not recognize.
    #[serde(other)]
    Other,
}

impl TrainStatus {
    /// Whether the train has reached a terminal status.
    ///
    /// The tick loop stops once every train is settled.
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Arrived | Self::Conflict)
    }

    /// Uppercase label matching the backend's wire spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Halted => "HALTED",
            Self::Arrived => "ARRIVED",
            Self::Conflict => "CONFLICT",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Station / ScheduleEntry / Train
// ---------------------------------------------------------------------------

/// A fixed stop on the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Backend identifier, referenced by schedule entries.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position along the track as a percentage (0-100).
    pub position_km: f64,
}

/// One scheduled stop in a train's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// The station this entry refers to.
    pub station_id: String,
    /// Scheduled arrival time, `HH:MM`, 24-hour, zero-padded.
    pub scheduled_arrival: String,
}

/// A train within one run of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    /// Unique id within a run, e.g. `12801-EXP`. The segment before the
    /// first `-` is the short display label; the designated express train
    /// carries a marker substring in its id.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Priority class (1 = high, 3 = low). Display only.
    pub priority: u8,
    /// Cruising speed in km/h. Display only; motion happens backend-side.
    pub speed_kmph: f64,
    /// Current operational status.
    pub status: TrainStatus,
    /// Position along the track as a percentage (0-100).
    pub current_position_km: f64,
    /// Ordered timetable; index 1 is the express delay checkpoint.
    pub schedule: Vec<ScheduleEntry>,
}

impl Train {
    /// The short display label: everything before the first `-` in the id.
    ///
    /// Falls back to the whole id if there is no separator.
    pub fn short_label(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }
}

// ---------------------------------------------------------------------------
// SimulationSnapshot
// ---------------------------------------------------------------------------

/// The complete simulation state at one point in simulated time.
///
/// Immutable once received. `simulation_time_minutes` is monotonically
/// non-decreasing across ticks within one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    /// Minutes of simulated time elapsed since the run started.
    pub simulation_time_minutes: u64,
    /// Fixed stops along the track, in track order.
    pub stations: Vec<Station>,
    /// All trains in the run, in backend order.
    pub trains: Vec<Train>,
}

impl SimulationSnapshot {
    /// Whether every train has reached a terminal status.
    ///
    /// Vacuously true for a snapshot with no trains; the controller treats
    /// that as an immediately finished run.
    pub fn all_trains_settled(&self) -> bool {
        self.trains.iter().all(|t| t.status.is_settled())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wire_snapshot() -> &'static str {
        r#"{
            "simulationTimeMinutes": 125,
            "stations": [
                {"id": "STN-A", "name": "Alpha Junction", "positionKm": 0.0},
                {"id": "STN-B", "name": "Beta Central", "positionKm": 100.0}
            ],
            "trains": [
                {
                    "id": "12801-EXP",
                    "name": "Morning Express",
                    "priority": 1,
                    "speedKmph": 110.0,
                    "status": "RUNNING",
                    "currentPositionKm": 42.5,
                    "schedule": [
                        {"stationId": "STN-A", "scheduledArrival": "08:00"},
                        {"stationId": "STN-B", "scheduledArrival": "10:00"}
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn snapshot_decodes_from_wire_shape() {
        let snapshot: SimulationSnapshot = serde_json::from_str(wire_snapshot()).unwrap();

        assert_eq!(snapshot.simulation_time_minutes, 125);
        assert_eq!(snapshot.stations.len(), 2);
        assert_eq!(
            snapshot.stations.first().map(|s| s.name.as_str()),
            Some("Alpha Junction")
        );

        let train = snapshot.trains.first().unwrap();
        assert_eq!(train.id, "12801-EXP");
        assert_eq!(train.priority, 1);
        assert_eq!(train.status, TrainStatus::Running);
        assert_eq!(
            train.schedule.get(1).map(|e| e.scheduled_arrival.as_str()),
            Some("10:00")
        );
    }

    #[test]
    fn snapshot_missing_trains_fails_to_decode() {
        let body = r#"{"simulationTimeMinutes": 0, "stations": []}"#;
        let result: Result<SimulationSnapshot, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[test]
    fn snapshot_missing_time_fails_to_decode() {
        let body = r#"{"stations": [], "trains": []}"#;
        let result: Result<SimulationSnapshot, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[test]
    fn snapshot_tolerates_unknown_fields() {
        let body = r#"{
            "simulationTimeMinutes": 3,
            "stations": [],
            "trains": [],
            "weather": "sunny"
        }"#;
        let snapshot: SimulationSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.simulation_time_minutes, 3);
    }

    #[test]
    fn unknown_status_decodes_to_other() {
        let body = r#"{
            "id": "99-X", "name": "Mystery", "priority": 2, "speedKmph": 70.0,
            "status": "DERAILED", "currentPositionKm": 0.0, "schedule": []
        }"#;
        let train: Train = serde_json::from_str(body).unwrap();
        assert_eq!(train.status, TrainStatus::Other);
        assert!(!train.status.is_settled());
    }

    #[test]
    fn settled_statuses() {
        assert!(TrainStatus::Arrived.is_settled());
        assert!(TrainStatus::Conflict.is_settled());
        assert!(!TrainStatus::Running.is_settled());
        assert!(!TrainStatus::Halted.is_settled());
    }

    #[test]
    fn short_label_cuts_at_first_separator() {
        let train: Train = serde_json::from_str(
            r#"{
                "id": "54321-GOODS-SLOW", "name": "Freight", "priority": 3,
                "speedKmph": 60.0, "status": "RUNNING",
                "currentPositionKm": 10.0, "schedule": []
            }"#,
        )
        .unwrap();
        assert_eq!(train.short_label(), "54321");
    }

    #[test]
    fn short_label_without_separator_is_whole_id() {
        let train: Train = serde_json::from_str(
            r#"{
                "id": "SHUNTER", "name": "Yard", "priority": 3,
                "speedKmph": 25.0, "status": "HALTED",
                "currentPositionKm": 0.0, "schedule": []
            }"#,
        )
        .unwrap();
        assert_eq!(train.short_label(), "SHUNTER");
    }

    #[test]
    fn all_settled_is_vacuously_true_without_trains() {
        let snapshot = SimulationSnapshot {
            simulation_time_minutes: 0,
            stations: Vec::new(),
            trains: Vec::new(),
        };
        assert!(snapshot.all_trains_settled());
    }

    #[test]
    fn all_settled_mixed_statuses() {
        let body = r#"{
            "simulationTimeMinutes": 90,
            "stations": [],
            "trains": [
                {"id": "1-A", "name": "A", "priority": 1, "speedKmph": 90.0,
                 "status": "ARRIVED", "currentPositionKm": 100.0, "schedule": []},
                {"id": "2-B", "name": "B", "priority": 2, "speedKmph": 90.0,
                 "status": "RUNNING", "currentPositionKm": 60.0, "schedule": []}
            ]
        }"#;
        let snapshot: SimulationSnapshot = serde_json::from_str(body).unwrap();
        assert!(!snapshot.all_trains_settled());
    }

    #[test]
    fn status_wire_spelling_round_trips() {
        let json = serde_json::to_string(&TrainStatus::Conflict).unwrap();
        assert_eq!(json, "\"CONFLICT\"");
        let back: TrainStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TrainStatus::Conflict);
    }
}
