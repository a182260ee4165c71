//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_terminal::Driver;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so the game transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let game = Driver::new(stdin.lock(), stdout.lock())
        .run()
        .context("Terminal I/O failed")?;

    info!(state = ?game.state(), move_count = game.move_count(), "Exiting");
    Ok(())
}
