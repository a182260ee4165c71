//! Move count invariant: the counter matches the marks on the board.

use super::Invariant;
use crate::Game;

/// Invariant: `move_count` equals the number of occupied cells.
pub struct MoveCountInvariant;

impl Invariant<Game> for MoveCountInvariant {
    fn holds(game: &Game) -> bool {
        game.move_count() == game.board().count_occupied()
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied cells"
    }
}
