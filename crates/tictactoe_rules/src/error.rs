//! Error types for input validation and move application.
//!
//! Every error carries a kind. Kinds are the stable identity callers match
//! on; the optional context (offending token, token count, position) is for
//! humans and never changes the kind.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Every error kind a turn can produce, regardless of origin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum ErrorKind {
    /// Coordinate outside `{0, 1, 2}`.
    #[display("Invalid position. Row and column must be between 0 and 2")]
    InvalidRange,
    /// Token is not a plain decimal integer, or more than two tokens.
    #[display("Invalid input format. Please enter numeric values only")]
    InvalidFormat,
    /// Fewer than two tokens on the line.
    #[display("Incomplete input. Please enter two numbers separated by space")]
    IncompleteInput,
    /// Target cell already holds a mark.
    #[display("Position already occupied. Please choose an empty cell")]
    CellOccupied,
    /// The game has already reached a terminal state.
    #[display("Game is already over")]
    GameOver,
}

/// Kinds produced by the input validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputErrorKind {
    /// Coordinate outside `{0, 1, 2}`.
    InvalidRange,
    /// Token is not a plain decimal integer, or more than two tokens.
    InvalidFormat,
    /// Fewer than two tokens on the line.
    IncompleteInput,
}

impl From<InputErrorKind> for ErrorKind {
    fn from(kind: InputErrorKind) -> Self {
        match kind {
            InputErrorKind::InvalidRange => ErrorKind::InvalidRange,
            InputErrorKind::InvalidFormat => ErrorKind::InvalidFormat,
            InputErrorKind::IncompleteInput => ErrorKind::IncompleteInput,
        }
    }
}

/// Kinds produced by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveErrorKind {
    /// Coordinate outside `{0, 1, 2}`.
    InvalidRange,
    /// Target cell already holds a mark.
    CellOccupied,
    /// The game has already reached a terminal state.
    GameOver,
}

impl From<MoveErrorKind> for ErrorKind {
    fn from(kind: MoveErrorKind) -> Self {
        match kind {
            MoveErrorKind::InvalidRange => ErrorKind::InvalidRange,
            MoveErrorKind::CellOccupied => ErrorKind::CellOccupied,
            MoveErrorKind::GameOver => ErrorKind::GameOver,
        }
    }
}

impl std::fmt::Display for InputErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&ErrorKind::from(*self), f)
    }
}

impl std::fmt::Display for MoveErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&ErrorKind::from(*self), f)
    }
}

fn write_with_context(
    f: &mut std::fmt::Formatter<'_>,
    message: impl std::fmt::Display,
    context: Option<&str>,
) -> std::fmt::Result {
    match context {
        Some(context) => write!(f, "{}: {}", message, context),
        None => write!(f, "{}", message),
    }
}

/// Input validation error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct InputError {
    kind: InputErrorKind,
    context: Option<String>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InputErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            context: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Attaches human-readable context without changing the kind.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The sentinel kind of this error.
    pub fn kind(&self) -> InputErrorKind {
        self.kind
    }

    /// Extra context, if any was attached.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_with_context(f, self.kind, self.context())
    }
}

impl From<InputErrorKind> for InputError {
    #[track_caller]
    fn from(kind: InputErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Move rejection from the rules engine, with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct MoveError {
    kind: MoveErrorKind,
    context: Option<String>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MoveError {
    /// Creates a new move error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: MoveErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            context: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Attaches human-readable context without changing the kind.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The sentinel kind of this error.
    pub fn kind(&self) -> MoveErrorKind {
        self.kind
    }

    /// Extra context, if any was attached.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_with_context(f, self.kind, self.context())
    }
}

impl From<MoveErrorKind> for MoveError {
    #[track_caller]
    fn from(kind: MoveErrorKind) -> Self {
        Self::new(kind)
    }
}
