//! Board consistency checks for [`Game`] values.
//!
//! Three properties tie the counter, the marks and the status together:
//!
//! - [`MoveCountInvariant`]: `move_count` is the number of marks on the board.
//! - [`MarkBalanceInvariant`]: X leads O by at most one, and the lead says
//!   who moved last.
//! - [`SingleOutcomeInvariant`]: the state names the one outcome the board
//!   shows.
//!
//! [`Game::apply_move`] asserts them after every move in debug builds, and
//! deserializing a [`Game`] rejects snapshots that break any of them.

use crate::Game;
use tracing::{instrument, warn};

pub mod mark_balance;
pub mod move_count;
pub mod single_outcome;

pub use mark_balance::MarkBalanceInvariant;
pub use move_count::MoveCountInvariant;
pub use single_outcome::SingleOutcomeInvariant;

/// One property of a game value.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Sentence naming the property, used in logs and snapshot errors.
    fn description() -> &'static str;
}

/// A failed check, named by the property's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The broken property.
    pub description: String,
}

impl InvariantViolation {
    /// Records a failed check.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several checks run as one, such as [`GameInvariants`].
///
/// Implemented for pairs and triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Runs every check and returns all failures, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Count, balance and outcome checks, in that order.
pub type GameInvariants = (
    MoveCountInvariant,
    MarkBalanceInvariant,
    SingleOutcomeInvariant,
);

/// Panics in debug builds if `game` breaks any of [`GameInvariants`].
///
/// Each broken property is logged before the panic. Release builds skip the
/// checks.
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Game invariant violated");
        }
        panic!("Game invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::replay([(0, 0), (1, 1), (0, 2)]).expect("legal moves");
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::replay([(1, 1)]).expect("legal move");
        let corner = Position::from_coords(0, 0).expect("in range");
        game.board = game.board.with_cell(corner, Cell::O);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        // Both the count and the balance are off.
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MoveCountInvariant, MarkBalanceInvariant);
        assert!(TwoInvariants::check_all(&Game::new()).is_ok());
    }
}
