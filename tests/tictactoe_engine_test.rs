//! End-to-end scenarios for the rules engine.

use tictactoe_terminal::rules::{check_draw, check_win};
use tictactoe_terminal::{Cell, Game, GameState, Mark, MoveErrorKind, Player, Position};

fn play_all(moves: &[(i64, i64)]) -> Game {
    moves.iter().fold(Game::new(), |game, &(row, col)| {
        game.apply_move(row, col)
            .unwrap_or_else(|e| panic!("move ({}, {}) rejected: {}", row, col, e))
    })
}

#[test]
fn test_diagonal_x_win() {
    let game = play_all(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    assert_eq!(game.state(), GameState::Player1Won);
    assert_eq!(game.move_count(), 5);
    assert_eq!(game.current_player(), Player::Player1);
    assert!(check_win(game.board(), Mark::X));
}

#[test]
fn test_full_board_draw() {
    let game = play_all(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);

    assert_eq!(game.state(), GameState::Draw);
    assert_eq!(game.move_count(), 9);
    assert!(!check_win(game.board(), Mark::X));
    assert!(!check_win(game.board(), Mark::O));
    assert!(check_draw(game.board()));
    // The ninth mark was X's, and the mover keeps the turn.
    assert_eq!(game.current_player(), Player::Player1);
}

#[test]
fn test_occupied_cell_rejection() {
    let game = play_all(&[(1, 1)]);
    let err = game.apply_move(1, 1).unwrap_err();

    assert_eq!(err.kind(), MoveErrorKind::CellOccupied);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.current_player(), Player::Player2);
}

#[test]
fn test_out_of_range_rejection() {
    let game = Game::new();
    for (row, col) in [(3, 1), (-1, 0), (10, 10), (1, -1), (0, 3)] {
        let err = game.apply_move(row, col).unwrap_err();
        assert_eq!(err.kind(), MoveErrorKind::InvalidRange, "({}, {})", row, col);
    }
    assert_eq!(game, Game::new());
}

#[test]
fn test_row_one_o_win() {
    let game = play_all(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);

    assert_eq!(game.state(), GameState::Player2Won);
    assert_eq!(game.current_player(), Player::Player2);
    assert_eq!(game.move_count(), 6);
    assert!(check_win(game.board(), Mark::O));
}

#[test]
fn test_prior_values_are_unchanged() {
    let start = Game::new();
    let first = start.apply_move(0, 0).expect("legal move");
    let second = first.apply_move(2, 2).expect("legal move");

    assert_eq!(start, Game::new());
    assert_eq!(first.move_count(), 1);
    assert_eq!(first.current_player(), Player::Player2);
    let corner = Position::from_coords(2, 2).expect("in range");
    assert_eq!(first.board().get(corner), Cell::Empty);
    assert_eq!(second.board().get(corner), Cell::O);
}

#[test]
fn test_finished_game_is_frozen() {
    let game = play_all(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    for pos in game.board().empty_positions() {
        let err = game.play(pos).unwrap_err();
        assert_eq!(err.kind(), MoveErrorKind::GameOver);
    }
    assert_eq!(game.state(), GameState::Player1Won);
    assert_eq!(game.move_count(), 5);
}

#[test]
fn test_replay_stops_at_first_rejection() {
    let err = Game::replay([(0, 0), (0, 0), (1, 1)]).unwrap_err();
    assert_eq!(err.kind(), MoveErrorKind::CellOccupied);
}
