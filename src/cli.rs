//! Command-line interface for the tictactoe binary.

use clap::Parser;

/// Two-player tic-tac-toe at the terminal.
///
/// Players take turns typing a row and a column, e.g. `1 1` for the center.
/// Set `RUST_LOG` to see diagnostics on stderr.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {}
