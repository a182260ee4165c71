//! Input validation through the public pipeline.

use tictactoe_terminal::validation::{parse_and_validate, parse_input_format, validate_range};
use tictactoe_terminal::{ErrorKind, InputErrorKind};

#[test]
fn test_validator_kinds() {
    let cases = [
        ("", InputErrorKind::IncompleteInput),
        ("1", InputErrorKind::IncompleteInput),
        ("a b", InputErrorKind::InvalidFormat),
        ("1 2 3", InputErrorKind::InvalidFormat),
        ("1.5 0", InputErrorKind::InvalidFormat),
        ("5 5", InputErrorKind::InvalidRange),
    ];

    for (line, expected) in cases {
        let err = parse_and_validate(line).unwrap_err();
        assert_eq!(err.kind(), expected, "line {:?}", line);
    }
}

#[test]
fn test_double_space_is_accepted() {
    let pos = parse_and_validate("1  1").expect("valid input");
    assert_eq!((pos.row(), pos.col()), (1, 1));
}

#[test]
fn test_every_cell_is_reachable() {
    for row in 0..3 {
        for col in 0..3 {
            let pos = parse_and_validate(&format!("{} {}", row, col)).expect("valid input");
            assert_eq!((pos.row(), pos.col()), (row, col));
        }
    }
}

#[test]
fn test_stages_compose() {
    let (row, col) = parse_input_format("7 -3").expect("well-formed");
    assert_eq!((row, col), (7, -3));
    let err = validate_range(row, col).unwrap_err();
    assert_eq!(err.kind(), InputErrorKind::InvalidRange);
}

#[test]
fn test_context_does_not_change_identity() {
    let plain = parse_and_validate("x 1").unwrap_err();
    let other = parse_and_validate("1 y").unwrap_err();

    assert_ne!(plain.context(), other.context());
    assert_eq!(plain.kind(), other.kind());
    assert_eq!(ErrorKind::from(plain.kind()), ErrorKind::InvalidFormat);
}
