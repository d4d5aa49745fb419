//! Terminal entry point for the train simulation controller.
//!
//! `signalbox run` executes one complete run against the backend,
//! rendering every tick on a character track, and prints the scored
//! outcome. `signalbox status` fetches and renders the current state
//! without advancing the simulation.
//!
//! All user-facing output goes through the presentation sink; `tracing`
//! carries the diagnostic layer underneath it (`RUST_LOG=debug` to see
//! request-level detail).

mod cli;
mod render;

use std::process::ExitCode;

use clap::Parser;
use signalbox_client::ApiClient;
use signalbox_core::controller::RunController;
use signalbox_core::sink::{PresentationSink, Severity};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, RunArgs};
use crate::render::ConsoleSink;

#[tokio::main]
async fn main() -> ExitCode {
    // Quiet by default: the sink owns stdout, diagnostics are opt-in.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();
    info!(api_url = %cli.api_url, "signalbox starting");

    let client = ApiClient::new(&cli.api_url);

    match cli.command {
        Command::Run(args) => run_command(client, &args).await,
        Command::Status => status_command(&client).await,
    }
}

/// Execute one run end to end and report it on the console.
async fn run_command(client: ApiClient, args: &RunArgs) -> ExitCode {
    let controller = RunController::new(client, args.controller_config());
    let mut sink = ConsoleSink;

    match controller.run(args.mode(), &mut sink).await {
        Ok(report) => {
            info!(
                mode = %report.mode,
                end = ?report.end,
                ticks = report.ticks,
                "run complete"
            );
            // A run that produced no scoreable snapshot exits non-zero;
            // the sink already carried the error message.
            if report.outcome.is_some() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            warn!(error = %e, "run aborted");
            ExitCode::FAILURE
        }
    }
}

/// Render the backend's current state without advancing it.
async fn status_command(client: &ApiClient) -> ExitCode {
    let mut sink = ConsoleSink;

    match client.fetch_state().await {
        Ok(snapshot) => {
            sink.render_snapshot(&snapshot);
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "state fetch failed");
            sink.log_message(
                "Error: Could not connect to the backend server. Please ensure it's running.",
                Severity::Error,
            );
            ExitCode::FAILURE
        }
    }
}
