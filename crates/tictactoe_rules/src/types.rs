//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A mark that can be placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Mark of the first player.
    X,
    /// Mark of the second player.
    O,
}

/// A single cell on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    #[display(" ")]
    Empty,
    /// Cell holding an X.
    #[display("X")]
    X,
    /// Cell holding an O.
    #[display("O")]
    O,
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    /// Returns true if the cell holds a mark.
    pub fn is_occupied(self) -> bool {
        self != Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// One of the two human players.
///
/// `Player1` always plays X and moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// First player, plays X.
    #[display("Player 1 (X)")]
    Player1,
    /// Second player, plays O.
    #[display("Player 2 (O)")]
    Player2,
}

impl Player {
    /// Returns the mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::Player1 => Mark::X,
            Player::Player2 => Mark::O,
        }
    }

    /// Returns the player who places the given mark.
    pub fn from_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::Player1,
            Mark::O => Player::Player2,
        }
    }

    /// Returns the opponent.
    pub fn other(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

/// A coordinate on the board, guaranteed to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Creates a position from raw coordinates.
    ///
    /// Returns `None` if either coordinate is outside `0..=2`.
    #[instrument]
    pub fn from_coords(row: i64, col: i64) -> Option<Self> {
        let in_range = |v: i64| (0..BOARD_SIZE as i64).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: [`Board::with_cell`] returns an updated copy
/// and leaves the receiver untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Returns a copy of this board with `pos` set to `cell`.
    #[must_use]
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[pos.row][pos.col] = cell;
        next
    }

    /// Returns true if the cell at `pos` is empty.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns true if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_occupied())
    }

    /// Number of occupied cells.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_occupied()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count_of(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().flatten().filter(|&&c| c == target).count()
    }

    /// Positions that are still free, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_cell_empty(pos))
            .collect()
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Empty.to_string(), " ");
        assert_eq!(Cell::X.to_string(), "X");
        assert_eq!(Cell::O.to_string(), "O");
    }

    #[test]
    fn test_cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(!Cell::Empty.is_occupied());
        assert!(Cell::X.is_occupied());
        assert!(Cell::O.is_occupied());
    }

    #[test]
    fn test_player_mark_is_bijective() {
        for player in Player::iter() {
            assert_eq!(Player::from_mark(player.mark()), player);
        }
        assert_eq!(Player::Player1.mark(), Mark::X);
        assert_eq!(Player::Player2.mark(), Mark::O);
    }

    #[test]
    fn test_other_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    fn test_player_names() {
        assert_eq!(Player::Player1.to_string(), "Player 1 (X)");
        assert_eq!(Player::Player2.to_string(), "Player 2 (O)");
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::from_coords(0, 0).is_some());
        assert!(Position::from_coords(2, 2).is_some());
        assert!(Position::from_coords(3, 1).is_none());
        assert!(Position::from_coords(-1, 0).is_none());
        assert!(Position::from_coords(1, i64::MAX).is_none());
    }

    #[test]
    fn test_position_all_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let board = Board::new();
        let center = Position::at(1, 1);
        let next = board.with_cell(center, Cell::X);

        assert_eq!(board.get(center), Cell::Empty);
        assert_eq!(next.get(center), Cell::X);
    }

    #[test]
    fn test_counts() {
        use crate::Cell::{Empty as E, O, X};
        let board = Board::from_rows([[X, O, X], [O, X, E], [E, E, E]]);
        assert_eq!(board.count_occupied(), 5);
        assert_eq!(board.count_of(Mark::X), 3);
        assert_eq!(board.count_of(Mark::O), 2);
        assert_eq!(board.empty_positions().len(), 4);
        assert!(!board.is_full());
    }

    #[test]
    fn test_full_board() {
        use crate::Cell::{O, X};
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
        assert!(board.is_full());
        assert_eq!(board.count_occupied(), 9);
        assert!(board.empty_positions().is_empty());
    }
}
