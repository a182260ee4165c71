//! Terminal front end for two-player tic-tac-toe.
//!
//! The rules live in [`tictactoe_rules`]; this crate is the driver around
//! them: reading lines, rendering boards and banners, announcing the result.
//!
//! # Example
//!
//! ```
//! use tictactoe_terminal::{Driver, GameState};
//!
//! let input: &[u8] = b"0 0\n1 0\n0 1\n1 1\n0 2\n";
//! let mut output = Vec::new();
//! let game = Driver::new(input, &mut output).run().unwrap();
//! assert_eq!(game.state(), GameState::Player1Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod driver;
mod render;

pub use config::DriverConfig;
pub use driver::{Driver, TurnError, attempt_turn};
pub use render::{render_board, render_error, render_outcome};

// Re-exports of the game types
pub use tictactoe_rules::{
    Board, Cell, ErrorKind, Game, GameState, InputError, InputErrorKind, Mark, MoveError,
    MoveErrorKind, Player, Position, rules, validation,
};
