//! The rules engine: an immutable game value and its single transition.

use crate::error::{MoveError, MoveErrorKind};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation, assert_invariants};
use crate::rules::check_win;
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use derive_more::{Display, Error};
use tracing::{debug, instrument, warn};

/// Number of cells on the board; a game with this many moves is full.
pub const CELL_COUNT: usize = 9;

/// Terminal status of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum GameState {
    /// Game is ongoing. The only non-terminal state.
    #[default]
    InProgress,
    /// Player 1 (X) completed a line.
    Player1Won,
    /// Player 2 (O) completed a line.
    Player2Won,
    /// Board filled with no line for either mark.
    Draw,
}

impl GameState {
    /// Returns true for every state except `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::Player1Won => Some(Player::Player1),
            GameState::Player2Won => Some(Player::Player2),
            GameState::InProgress | GameState::Draw => None,
        }
    }

    /// The state reached when `player` completes a line.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Player1 => GameState::Player1Won,
            Player::Player2 => GameState::Player2Won,
        }
    }
}

/// A complete game: board, whose turn it is, status and move count.
///
/// `Game` is a plain `Copy` value. [`Game::apply_move`] borrows the receiver
/// and returns the next game, so every previously held value stays exactly
/// as it was.
///
/// Deserializing checks every game invariant, so a restored snapshot is
/// always a game the engine could have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) state: GameState,
    pub(crate) move_count: usize,
}

impl Game {
    /// Creates a new game: empty board, Player 1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Player1,
            state: GameState::InProgress,
            move_count: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns true once the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. the game is still in progress ([`MoveErrorKind::GameOver`]),
    /// 2. both coordinates are in `0..=2` ([`MoveErrorKind::InvalidRange`]),
    /// 3. the cell is empty ([`MoveErrorKind::CellOccupied`]).
    ///
    /// On success the mover keeps the turn if the move ended the game;
    /// otherwise the turn passes to the opponent.
    #[instrument(skip(self), fields(player = ?self.current_player, move_count = self.move_count))]
    pub fn apply_move(&self, row: i64, col: i64) -> Result<Game, MoveError> {
        self.ensure_in_progress()?;

        let pos = Position::from_coords(row, col).ok_or_else(|| {
            debug!(row, col, "Move outside the board");
            MoveError::new(MoveErrorKind::InvalidRange).with_context(format!("({}, {})", row, col))
        })?;

        self.place(pos)
    }

    /// Same transition as [`Game::apply_move`] for an already validated position.
    #[instrument(skip(self), fields(player = ?self.current_player, move_count = self.move_count))]
    pub fn play(&self, pos: Position) -> Result<Game, MoveError> {
        self.ensure_in_progress()?;
        self.place(pos)
    }

    /// Replays a sequence of moves from a new game.
    ///
    /// Stops at the first rejected move.
    #[instrument(skip(moves))]
    pub fn replay<I>(moves: I) -> Result<Game, MoveError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        moves
            .into_iter()
            .try_fold(Game::new(), |game, (row, col)| game.apply_move(row, col))
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            warn!(state = ?self.state, "Move attempted on a finished game");
            return Err(MoveError::new(MoveErrorKind::GameOver)
                .with_context(format!("{:?}", self.state)));
        }
        Ok(())
    }

    fn place(&self, pos: Position) -> Result<Game, MoveError> {
        if !self.board.is_cell_empty(pos) {
            debug!(%pos, "Cell already occupied");
            return Err(MoveError::new(MoveErrorKind::CellOccupied).with_context(pos.to_string()));
        }

        let mover = self.current_player;
        let mut next = *self;
        next.board = self.board.with_cell(pos, mover.mark().into());
        next.move_count += 1;

        if check_win(&next.board, mover.mark()) {
            next.state = GameState::won_by(mover);
        } else if next.move_count == CELL_COUNT {
            next.state = GameState::Draw;
        } else {
            next.current_player = mover.other();
        }

        assert_invariants(&next);
        debug!(%pos, state = ?next.state, move_count = next.move_count, "Move applied");

        Ok(next)
    }
}

/// Wire form of a [`Game`], checked before it becomes one.
#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    current_player: Player,
    state: GameState,
    move_count: usize,
}

/// A snapshot that no sequence of legal moves could produce.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Snapshot violates game invariants: {violations:?}")]
pub struct InvalidSnapshot {
    #[error(not(source))]
    violations: Vec<InvariantViolation>,
}

impl InvalidSnapshot {
    /// The invariants the snapshot broke.
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = InvalidSnapshot;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let game = Game {
            board: snapshot.board,
            current_player: snapshot.current_player,
            state: snapshot.state,
            move_count: snapshot.move_count,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            warn!(count = violations.len(), "Rejected game snapshot");
            InvalidSnapshot { violations }
        })?;
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
