//! Mark balance invariant: X and O counts follow strict alternation.

use super::Invariant;
use crate::{Game, Mark, Player};

/// Invariant: X never trails O, and leads by at most one.
///
/// X leads by exactly one iff X placed the last mark. While the game is in
/// progress that means O is to move; once it is over the mover keeps the
/// turn, so it means Player 1 is current.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count_of(Mark::X);
        let o = game.board().count_of(Mark::O);

        if x < o || x - o > 1 {
            return false;
        }

        let x_moved_last = if game.is_over() {
            game.current_player() == Player::Player1
        } else {
            game.current_player() == Player::Player2
        };

        (x - o == 1) == x_moved_last
    }

    fn description() -> &'static str {
        "X leads O by one exactly when X placed the last mark"
    }
}
