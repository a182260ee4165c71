//! Plain-text rendering of boards, error banners and outcomes.

use std::fmt::{self, Write};
use tictactoe_rules::{BOARD_SIZE, Board, ErrorKind, GameState};

const SEPARATOR: &str = "  -----------";
const FRAME_TOP: &str = "╔════════════════════════════════════════════╗";
const FRAME_BOTTOM: &str = "╚════════════════════════════════════════════╝";
const FRAME_BLANK: &str = "║                                            ║";

/// Renders the board with row and column labels.
///
/// ```text
///
///   0   1   2
/// 0  X | O |
///   -----------
/// ...
/// ```
pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}

struct BoardView<'a>(&'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n  0   1   2\n")?;
        for (row, cells) in self.0.rows().iter().enumerate() {
            write!(f, "{} ", row)?;
            for (col, cell) in cells.iter().enumerate() {
                write!(f, " {} ", cell)?;
                if col < BOARD_SIZE - 1 {
                    f.write_char('|')?;
                }
            }
            f.write_char('\n')?;
            if row < BOARD_SIZE - 1 {
                writeln!(f, "{}", SEPARATOR)?;
            }
        }
        f.write_char('\n')
    }
}

fn banner_lines(kind: ErrorKind) -> [&'static str; 3] {
    match kind {
        ErrorKind::InvalidRange => [
            "║  ❌ Invalid Position                      ║",
            "║  Row and column must be between 0 and 2    ║",
            "║  Example: '1 1' for center position        ║",
        ],
        ErrorKind::InvalidFormat => [
            "║  ❌ Invalid Format                        ║",
            "║  Please enter numeric values only          ║",
            "║  Example: '0 2' or '1 1'                   ║",
        ],
        ErrorKind::IncompleteInput => [
            "║  ❌ Incomplete Input                      ║",
            "║  Please enter two numbers separated by     ║",
            "║  space (row and column)                    ║",
        ],
        ErrorKind::CellOccupied => [
            "║  ❌ Cell Already Occupied                 ║",
            "║  That position is already taken            ║",
            "║  Please choose an empty cell               ║",
        ],
        ErrorKind::GameOver => [
            "║  ❌ Game Over                             ║",
            "║  The game has already finished             ║",
            "║  No further moves are accepted             ║",
        ],
    }
}

/// Renders the framed error banner for one error kind.
pub fn render_error(kind: ErrorKind) -> String {
    let [title, first, second] = banner_lines(kind);
    [
        "",
        FRAME_TOP,
        title,
        FRAME_BLANK,
        first,
        second,
        FRAME_BOTTOM,
        "",
        "",
    ]
    .join("\n")
}

/// The closing announcement for a finished game.
///
/// Returns `None` while the game is still in progress.
pub fn render_outcome(state: GameState) -> Option<&'static str> {
    match state {
        GameState::Player1Won => Some("🎉 Player 1 (X) wins!"),
        GameState::Player2Won => Some("🎉 Player 2 (O) wins!"),
        GameState::Draw => Some("It's a draw!"),
        GameState::InProgress => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use tictactoe_rules::Game;

    #[test]
    fn test_empty_board_layout() {
        let expected = "\n  0   1   2\n\
                        0    |   |   \n  -----------\n\
                        1    |   |   \n  -----------\n\
                        2    |   |   \n\n";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_marks_are_rendered() {
        let game = Game::replay([(0, 0), (1, 1)]).expect("legal moves");
        let rendered = render_board(game.board());
        assert!(rendered.contains("0  X |   |   \n"));
        assert!(rendered.contains("1    | O |   \n"));
    }

    #[test]
    fn test_banner_is_framed() {
        let banner = render_error(ErrorKind::CellOccupied);
        let lines: Vec<_> = banner.lines().collect();
        assert_eq!(lines[1], FRAME_TOP);
        assert!(lines[2].contains("Cell Already Occupied"));
        assert_eq!(lines[6], FRAME_BOTTOM);
        assert!(banner.ends_with("\n\n"));
    }

    #[test]
    fn test_every_kind_has_a_distinct_banner() {
        let banners: Vec<_> = ErrorKind::iter().map(render_error).collect();
        for (i, banner) in banners.iter().enumerate() {
            assert!(banner.contains(FRAME_TOP));
            assert!(banners[i + 1..].iter().all(|other| other != banner));
        }
    }

    #[test]
    fn test_only_terminal_states_are_announced() {
        for state in GameState::iter() {
            assert_eq!(render_outcome(state).is_some(), state.is_terminal());
        }
    }

    #[test]
    fn test_outcome_lines() {
        assert_eq!(render_outcome(GameState::Draw), Some("It's a draw!"));
        assert_eq!(
            render_outcome(GameState::Player2Won),
            Some("🎉 Player 2 (O) wins!")
        );
        assert_eq!(render_outcome(GameState::InProgress), None);
    }
}
