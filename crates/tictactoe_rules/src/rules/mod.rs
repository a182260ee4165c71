//! Game rules for tic-tac-toe.
//!
//! Pure predicates over a [`Board`](crate::Board). They know nothing about
//! turns or game status, which lets the engine and the invariant checks
//! share them.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_full};
pub use win::{LINES, check_win, winner};
