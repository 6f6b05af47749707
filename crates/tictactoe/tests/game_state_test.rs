//! Tests for the tic-tac-toe state machine through its public API.

use strum::IntoEnumIterator;
use tictactoe::{
    Board, Cell, Coord, GameEvent, GameState, GameStatus, InvalidMove, Line, Player,
    StartingPlayerPolicy, invariants,
};

/// Plays `moves` in order, failing the test on any rejection.
fn play(game: &mut GameState, moves: &[(usize, usize)]) -> GameStatus {
    moves.iter().fold(game.status(), |_, &(row, col)| {
        game.apply_move(row, col).expect("Valid move")
    })
}

/// Two cells off `line` for O to play while X builds `line`.
///
/// Neither side holds three marks before X's final move, so nothing can
/// end the game early.
fn filler_for(line: Line) -> [(usize, usize); 2] {
    let mut off_line = Coord::ALL.into_iter().filter(|c| !line.contains(*c));
    let mut next = || {
        let c = off_line.next().expect("Six cells lie off any line");
        (c.row(), c.col())
    };
    [next(), next()]
}

#[test]
fn test_every_line_wins_for_x() {
    for line in Line::iter() {
        let mut game = GameState::new();
        let [a, b, c] = line.cells();
        let o = filler_for(line);
        play(
            &mut game,
            &[(a.row(), a.col()), o[0], (b.row(), b.col()), o[1]],
        );
        assert_eq!(game.status(), GameStatus::InProgress, "{line}");
        let status = game.apply_move(c.row(), c.col()).expect("Valid move");
        assert_eq!(
            status,
            GameStatus::Won {
                player: Player::X,
                line
            },
            "{line}"
        );
    }
}

#[test]
fn test_row_zero_scenario() {
    let mut game = GameState::new();
    let status = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(
        status,
        GameStatus::Won {
            player: Player::X,
            line: Line::Row0
        }
    );
    assert_eq!(game.status_message(), "Player X Wins! Press R to Restart");
}

#[test]
fn test_o_can_win() {
    let mut game = GameState::new();
    let status = play(&mut game, &[(0, 0), (0, 2), (1, 0), (1, 1), (2, 2), (2, 0)]);
    assert_eq!(
        status,
        GameStatus::Won {
            player: Player::O,
            line: Line::AscDiagonal
        }
    );
}

#[test]
fn test_draw_scenario() {
    // X O X / X O O / O X X
    let mut game = GameState::new();
    let status = play(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(status, GameStatus::Drawn);
    assert_eq!(
        game.board().display(),
        "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X"
    );
    assert_eq!(game.status_message(), "It's a Draw! Press R to Restart");
}

#[test]
fn test_out_of_range_move_is_rejected() {
    let mut game = GameState::new();
    let before = game.clone();
    assert_eq!(
        game.apply_move(5, 0),
        Err(InvalidMove::OutOfRange { row: 5, col: 0 })
    );
    assert_eq!(game, before);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut game = GameState::new();
    play(&mut game, &[(1, 1), (0, 0)]);
    let before = game.clone();

    let result = game.apply_move(1, 1);
    assert_eq!(result, Err(InvalidMove::Occupied { row: 1, col: 1 }));
    assert_eq!(game.board(), before.board());
    assert_eq!(game.current_player(), before.current_player());
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let board = game.board().clone();

    for coord in Coord::ALL {
        assert_eq!(
            game.apply_move(coord.row(), coord.col()),
            Err(InvalidMove::GameOver)
        );
    }
    assert_eq!(game.board(), &board);
}

#[test]
fn test_no_moves_after_draw() {
    // X O X / X O O / O X X
    let mut game = GameState::new();
    play(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    let before = game.clone();

    // Every cell is taken, but game over is reported first.
    for coord in Coord::ALL {
        assert_eq!(
            game.apply_move(coord.row(), coord.col()),
            Err(InvalidMove::GameOver)
        );
    }
    assert_eq!(game.apply_move(3, 3), Err(InvalidMove::GameOver));
    assert_eq!(game, before);
    assert_eq!(game.status(), GameStatus::Drawn);
}

#[test]
fn test_turn_alternates_on_every_non_terminal_move() {
    let mut game = GameState::new();
    for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0), (1, 0), (1, 2), (0, 1)] {
        let mover = game.current_player();
        let status = game.apply_move(row, col).expect("Valid move");
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.current_player(), mover.opponent());
        assert!(invariants::check_state(&game).is_ok());
    }
}

#[test]
fn test_reset_clears_board() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    game.reset();

    assert!(game.board().iter().all(|(_, cell)| cell == Cell::Empty));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::X);
    assert!(game.history().is_empty());
    assert_eq!(game.status_message(), "Player X's Turn");
}

#[test]
fn test_alternate_policy_across_resets() {
    let mut game = GameState::with_policy(StartingPlayerPolicy::Alternate);
    let mut openers = vec![game.current_player()];
    for _ in 0..3 {
        game.handle(GameEvent::ResetRequested).expect("Reset succeeds");
        openers.push(game.current_player());
    }
    assert_eq!(openers, [Player::X, Player::O, Player::X, Player::O]);
}

#[test]
fn test_always_x_policy_across_resets() {
    let mut game = GameState::new();
    game.apply_move(1, 1).expect("Valid move");
    for _ in 0..3 {
        game.reset();
        assert_eq!(game.current_player(), Player::X);
    }
}

#[test]
fn test_events_drive_a_full_match() {
    let mut game = GameState::new();
    let events = [(2, 0), (0, 0), (2, 1), (0, 1), (2, 2)]
        .map(|(row, col)| GameEvent::CellClicked { row, col });
    let mut status = GameStatus::InProgress;
    for event in events {
        status = game.handle(event).expect("Valid move");
    }
    assert_eq!(status.winning_line(), Some(Line::Row2));
    assert_eq!(
        game.handle(GameEvent::CellClicked { row: 1, col: 1 }),
        Err(InvalidMove::GameOver)
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let json = serde_json::to_value(&game).expect("Serializable");

    assert_eq!(json["current_player"], "X");
    assert_eq!(json["status"]["Won"]["line"], "Row0");
    assert_eq!(json["board"]["cells"][0][0], "X");
    assert_eq!(json["board"]["cells"][1][1], "O");
    assert_eq!(json["history"].as_array().map(Vec::len), Some(5));
}
