//! Single outcome invariant: the status agrees with the board.

use super::Invariant;
use crate::rules::{check_draw, check_win};
use crate::{Game, GameState, Mark};

/// Invariant: at most one mark holds a line, and the state reports it.
pub struct SingleOutcomeInvariant;

impl Invariant<Game> for SingleOutcomeInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let x_wins = check_win(board, Mark::X);
        let o_wins = check_win(board, Mark::O);

        match game.state() {
            GameState::InProgress => !x_wins && !o_wins && !board.is_full(),
            GameState::Player1Won => x_wins && !o_wins,
            GameState::Player2Won => o_wins && !x_wins,
            GameState::Draw => check_draw(board),
        }
    }

    fn description() -> &'static str {
        "Game state matches the single outcome on the board"
    }
}
