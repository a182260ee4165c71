//! Pure tic-tac-toe rules for two human players.
//!
//! # Architecture
//!
//! - **Types**: [`Cell`], [`Mark`], [`Player`], [`Position`], [`Board`]
//! - **Engine**: [`Game`] is an immutable value; [`Game::apply_move`] returns
//!   the next game or a [`MoveError`]
//! - **Rules**: line and draw predicates in [`rules`]
//! - **Validation**: text line to [`Position`] in [`validation`]
//! - **Invariants**: properties checked after every transition in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Game, GameState, validation::parse_and_validate};
//!
//! let pos = parse_and_validate("1 1").unwrap();
//! let game = Game::new().play(pos).unwrap();
//! assert_eq!(game.state(), GameState::InProgress);
//! assert_eq!(game.move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod types;

pub mod invariants;
pub mod rules;
pub mod validation;

pub use error::{ErrorKind, InputError, InputErrorKind, MoveError, MoveErrorKind};
pub use game::{CELL_COUNT, Game, GameState, InvalidSnapshot};
pub use types::{BOARD_SIZE, Board, Cell, Mark, Player, Position};
