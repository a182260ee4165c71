//! Input validation: raw text line to a validated board position.
//!
//! The pipeline runs tokenize, shape check, parse, then range check. Each
//! stage is public so callers can reuse the pieces, but
//! [`parse_and_validate`] is the entry point. The validator never looks at
//! a board; occupancy is the engine's concern.

use crate::Position;
use crate::error::{InputError, InputErrorKind};
use tracing::{debug, instrument};

/// Smallest valid board coordinate.
pub const MIN_COORDINATE: i64 = 0;
/// Largest valid board coordinate.
pub const MAX_COORDINATE: i64 = 2;

/// Splits a line on runs of whitespace, dropping leading and trailing blanks.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parses one token as a signed decimal integer.
///
/// An optional leading sign is accepted. Anything else that is not a digit,
/// including a fractional part, makes the token invalid, as does a value too
/// large for `i64`.
#[instrument]
pub fn parse_coordinate(token: &str) -> Result<i64, InputError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(InputError::new(InputErrorKind::InvalidFormat));
    }

    token.parse::<i64>().map_err(|_| {
        InputError::new(InputErrorKind::InvalidFormat)
            .with_context(format!("{:?} is not a valid number", token))
    })
}

/// Checks the shape of a line and parses both coordinates.
///
/// Does not check the range.
#[instrument]
pub fn parse_input_format(line: &str) -> Result<(i64, i64), InputError> {
    let tokens = tokenize(line);

    match tokens.as_slice() {
        [] | [_] => Err(InputError::new(InputErrorKind::IncompleteInput)),
        [row, col] => Ok((parse_coordinate(row)?, parse_coordinate(col)?)),
        _ => Err(InputError::new(InputErrorKind::InvalidFormat)
            .with_context(format!("expected 2 numbers, got {}", tokens.len()))),
    }
}

/// Checks that both coordinates lie in `MIN_COORDINATE..=MAX_COORDINATE`.
#[instrument]
pub fn validate_range(row: i64, col: i64) -> Result<Position, InputError> {
    Position::from_coords(row, col).ok_or_else(|| {
        InputError::new(InputErrorKind::InvalidRange).with_context(format!("({}, {})", row, col))
    })
}

/// Runs the full pipeline on one line of input.
///
/// Returns a position with both coordinates in `0..=2`, or exactly one of
/// [`InputErrorKind::IncompleteInput`], [`InputErrorKind::InvalidFormat`]
/// or [`InputErrorKind::InvalidRange`].
#[instrument]
pub fn parse_and_validate(line: &str) -> Result<Position, InputError> {
    let (row, col) = parse_input_format(line)?;
    let pos = validate_range(row, col)?;
    debug!(%pos, "Input accepted");
    Ok(pos)
}
