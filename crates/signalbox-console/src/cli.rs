//! Command-line interface definition.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use signalbox_client::DEFAULT_BASE_URL;
use signalbox_core::controller::{
    ControllerConfig, DEFAULT_TICK_INTERVAL_MS, DEFAULT_TIME_CEILING_MINUTES,
};
use signalbox_types::RunMode;

/// Drive the train-scheduling simulation backend from the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the simulation backend API.
    #[arg(
        long,
        value_name = "URL",
        env = "SIGNALBOX_API_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute one simulation run and print the outcome.
    Run(RunArgs),
    /// Fetch and render the current simulation state without advancing it.
    Status,
}

/// Arguments for the `run` command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Run with the AI-optimized schedule instead of the baseline policy.
    #[arg(long)]
    pub optimized: bool,

    /// Pause between ticks, in milliseconds. Zero disables pacing.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    pub tick_interval_ms: u64,

    /// Simulated-minutes ceiling before a run is cut off.
    #[arg(long, value_name = "MINUTES", default_value_t = DEFAULT_TIME_CEILING_MINUTES)]
    pub time_ceiling_minutes: u64,
}

impl RunArgs {
    /// Which tick policy this invocation selects.
    pub const fn mode(&self) -> RunMode {
        if self.optimized {
            RunMode::Optimized
        } else {
            RunMode::Baseline
        }
    }

    /// Controller tuning from the parsed flags.
    pub const fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            time_ceiling_minutes: self.time_ceiling_minutes,
        }
    }
}
