//! The terminal game loop.
//!
//! The driver owns the only mutable game binding. Each turn it reads a line,
//! validates it, asks the engine for the next game and either replaces its
//! binding or prints a banner and asks again.

use crate::config::DriverConfig;
use crate::render::{render_board, render_error, render_outcome};
use derive_more::{Display, Error, From};
use std::io::{self, BufRead, Write};
use tictactoe_rules::validation::parse_and_validate;
use tictactoe_rules::{ErrorKind, Game, InputError, MoveError};
use tracing::{debug, info, instrument};

/// Why a turn was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum TurnError {
    /// The line did not validate.
    Input(InputError),
    /// The engine refused the move.
    Move(MoveError),
}

impl TurnError {
    /// The sentinel kind, shared by validator and engine errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TurnError::Input(err) => err.kind().into(),
            TurnError::Move(err) => err.kind().into(),
        }
    }
}

/// Validates one input line and applies it to `game`.
///
/// `game` itself is never modified; on error the caller keeps it and the
/// same player tries again.
#[instrument(skip(game), fields(player = %game.current_player()))]
pub fn attempt_turn(game: &Game, line: &str) -> Result<Game, TurnError> {
    let pos = parse_and_validate(line)?;
    Ok(game.play(pos)?)
}

/// Runs a game over any line source and output sink.
#[derive(Debug)]
pub struct Driver<R, W> {
    input: R,
    output: W,
    config: DriverConfig,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver with the default presentation.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, DriverConfig::default())
    }

    /// Creates a driver with custom presentation text.
    pub fn with_config(input: R, output: W, config: DriverConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays until the game ends or input runs out.
    ///
    /// Returns the last game value. End of input before a terminal state
    /// prints the final board without an announcement.
    #[instrument(skip(self))]
    pub fn run(mut self) -> io::Result<Game> {
        writeln!(self.output, "{}", self.config.header())?;
        writeln!(self.output)?;

        let mut game = Game::new();
        let mut buf = Vec::new();

        while !game.is_over() {
            write!(self.output, "{}", render_board(game.board()))?;
            write!(
                self.output,
                "\n{}'s turn\n{}",
                game.current_player(),
                self.config.prompt()
            )?;
            self.output.flush()?;

            // A line that is not UTF-8 is a rejected turn, not an I/O failure.
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                info!(move_count = game.move_count(), "Input closed before the game ended");
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            match attempt_turn(&game, &line) {
                Ok(next) => game = next,
                Err(err) => {
                    debug!(kind = ?err.kind(), error = %err, "Turn rejected");
                    write!(self.output, "{}", render_error(err.kind()))?;
                }
            }
        }

        write!(self.output, "{}", render_board(game.board()))?;
        writeln!(self.output)?;
        if let Some(outcome) = render_outcome(game.state()) {
            writeln!(self.output, "{}", outcome)?;
        }
        self.output.flush()?;

        info!(state = ?game.state(), move_count = game.move_count(), "Game finished");
        Ok(game)
    }
}
