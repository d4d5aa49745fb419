//! Terminal rendering for snapshots, plans, and outcomes.
//!
//! [`ConsoleSink`] is the presentation sink for interactive use: each
//! snapshot becomes one track line with stations and trains placed by
//! their percentage positions, headed by the simulated `HH:MM` clock,
//! followed by a per-train status table. Verdicts and error messages are
//! colored; `colored` drops the escapes when stdout is not a terminal.

use colored::{ColoredString, Colorize};
use signalbox_core::sink::{PresentationSink, Severity};
use signalbox_types::{RunOutcome, SimulationSnapshot, TrainStatus};

/// Width of the rendered track, in character cells.
const TRACK_WIDTH: usize = 64;

/// Push-only sink that renders to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl PresentationSink for ConsoleSink {
    fn render_snapshot(&mut self, snapshot: &SimulationSnapshot) {
        println!(
            "{} [{}]",
            clock_label(snapshot.simulation_time_minutes).bold(),
            track_line(snapshot)
        );
        for train in &snapshot.trains {
            println!(
                "      {:<8} P{}  {:>3.0} km/h  {:>5.1} km  {}  {}",
                train.short_label(),
                train.priority,
                train.speed_kmph,
                train.current_position_km,
                status_label(train.status),
                train.name.dimmed()
            );
        }
    }

    fn show_plan(&mut self, plan: &str) {
        println!();
        println!("{}", "AI Optimization Plan".bold().underline());
        println!("{plan}");
        println!();
    }

    fn log_message(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => println!("{message}"),
            Severity::Error => println!("{}", message.red().bold()),
        }
    }

    fn show_outcome(&mut self, outcome: &RunOutcome) {
        let verdict = if outcome.status.is_success() {
            outcome.status.as_str().green().bold()
        } else {
            outcome.status.as_str().red().bold()
        };
        println!();
        println!("Outcome:     {verdict}");
        println!("Total delay: {} minutes", outcome.total_delay_minutes);
        println!(
            "Throughput:  {} / {} trains",
            outcome.trains_arrived, outcome.total_trains
        );
    }

    fn set_triggers_enabled(&mut self, _enabled: bool) {
        // One-shot CLI invocations have no persistent controls to toggle.
    }
}

// ---------------------------------------------------------------------------
// Layout helpers
// ---------------------------------------------------------------------------

/// Map a percentage position onto a track column.
///
/// Despite the km name, positions arrive as percentages of track length.
/// Out-of-range values clamp to the track ends.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn track_column(position_km: f64) -> usize {
    // Clamped to [0, 100] and scaled to at most TRACK_WIDTH - 1, so the
    // cast back to usize cannot truncate or wrap.
    let clamped = position_km.clamp(0.0, 100.0);
    let span = TRACK_WIDTH.saturating_sub(1) as f64;
    ((clamped / 100.0) * span).round() as usize
}

/// One line of track with stations and trains at their positions.
fn track_line(snapshot: &SimulationSnapshot) -> String {
    let mut cells: Vec<char> = vec!['-'; TRACK_WIDTH];

    for station in &snapshot.stations {
        if let Some(cell) = cells.get_mut(track_column(station.position_km)) {
            *cell = '|';
        }
    }

    // Trains overlay stations; a later train wins a contested cell.
    for train in &snapshot.trains {
        let start = track_column(train.current_position_km);
        for (offset, ch) in train.short_label().chars().enumerate() {
            match cells.get_mut(start.saturating_add(offset)) {
                Some(cell) => *cell = ch,
                None => break,
            }
        }
    }

    cells.into_iter().collect()
}

/// Simulated clock rendered `HH:MM`. Hours count elapsed simulation time
/// and run past 23 rather than wrapping.
fn clock_label(simulation_time_minutes: u64) -> String {
    let hours = simulation_time_minutes.checked_div(60).unwrap_or(0);
    let minutes = simulation_time_minutes.checked_rem(60).unwrap_or(0);
    format!("{hours:02}:{minutes:02}")
}

/// Status word colored by operational meaning.
fn status_label(status: TrainStatus) -> ColoredString {
    match status {
        TrainStatus::Running => status.as_str().green(),
        TrainStatus::Halted => status.as_str().yellow(),
        TrainStatus::Arrived => status.as_str().blue(),
        TrainStatus::Conflict => status.as_str().red().bold(),
        TrainStatus::Other => status.as_str().normal(),
    }
}
