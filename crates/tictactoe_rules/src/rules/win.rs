//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Returns true if `mark` occupies all three cells of any line.
///
/// Independent of whose turn it is.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let cell = Cell::from(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == cell))
}

/// Returns the mark that holds a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| check_win(board, mark))
}
