//! Band of the Hour - interactive console
//!
//! Reads operator answers from stdin and writes the transcript to stdout.
//! Diagnostics go to stderr, filtered by `RUST_LOG`.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use band_of_the_hour::{Console, StadiumLayout};
use clap::Parser;
use cli::Cli;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let layout = cli
        .layout
        .as_deref()
        .map(StadiumLayout::from_file)
        .transpose()
        .context("Failed to load stadium layout")?;

    run_console(layout.as_ref())
}

/// Runs the interactive session on stdin/stdout.
#[instrument(skip_all)]
fn run_console(layout: Option<&StadiumLayout>) -> Result<()> {
    info!("Starting Band of the Hour");

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    band_of_the_hour::play(console, layout)?;

    info!("Session finished");
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
