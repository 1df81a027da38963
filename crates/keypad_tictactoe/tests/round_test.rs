//! Tests for a round driven through the public API.

use keypad_tictactoe::{
    Board, Cell, GameState, GameStatus, MoveInputError, Outcome, Player, Square, WINNING_LINES,
    is_draw, is_winner, validate_token,
};

/// Plays keypad tokens through validation into a fresh round.
fn play(tokens: &[&str]) -> (GameState, Vec<GameStatus>) {
    let mut game = GameState::new();
    let mut statuses = Vec::new();
    for token in tokens {
        let cell = validate_token(token, game.used()).expect("Valid token");
        statuses.push(game.apply(cell).expect("Legal move"));
    }
    (game, statuses)
}

#[test]
fn test_middle_row_win_on_fifth_move() {
    let (game, statuses) = play(&["5", "1", "6", "2", "4"]);
    assert_eq!(statuses[..4], [GameStatus::InProgress; 4]);
    assert_eq!(statuses[4], GameStatus::Won(Player::X));
    assert_eq!(game.move_count(), 5);
}

#[test]
fn test_cells_five_six_seven_are_not_a_line() {
    // 7 sits on the top row, so X holding 5, 6, 7 has not won.
    let (game, statuses) = play(&["5", "1", "6", "2", "7"]);
    assert_eq!(statuses.last(), Some(&GameStatus::InProgress));
    assert_eq!(game.mover(), Player::O);
}

#[test]
fn test_draw_fires_once_after_ninth_move() {
    let (game, statuses) = play(&["7", "8", "9", "5", "4", "6", "2", "1", "3"]);
    let draws = statuses.iter().filter(|s| **s == GameStatus::Draw).count();
    assert_eq!(draws, 1);
    assert_eq!(statuses.last(), Some(&GameStatus::Draw));
    assert!(
        statuses
            .iter()
            .all(|s| !matches!(s, GameStatus::Won(_)))
    );
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_completing_a_line_on_ninth_move_is_a_win() {
    // X: 1, 2, 6, 5, 9 closes the 1-5-9 diagonal with the last cell.
    let (game, statuses) = play(&["1", "4", "2", "3", "6", "8", "5", "7", "9"]);
    assert_eq!(statuses[..8], [GameStatus::InProgress; 8]);
    assert_eq!(statuses[8], GameStatus::Won(Player::X));
    assert!(!is_draw(game.move_count(), true));
}

#[test]
fn test_movers_alternate_starting_with_x() {
    let (game, _) = play(&["7", "8", "9", "5", "4", "6", "2", "1", "3"]);
    for (i, mov) in game.history().iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(mov.player, expected);
    }
}

#[test]
fn test_repeated_cell_rejected_for_next_player() {
    let (game, _) = play(&["5"]);
    assert_eq!(game.mover(), Player::O);
    assert_eq!(
        validate_token("5", game.used()),
        Err(MoveInputError::Occupied(Cell::Center))
    );
}

#[test]
fn test_invalid_tokens_rejected_before_valid_move() {
    let game = GameState::new();
    assert!(matches!(
        validate_token("0", game.used()),
        Err(MoveInputError::OutOfRange(_))
    ));
    assert!(matches!(
        validate_token("10", game.used()),
        Err(MoveInputError::OutOfRange(_))
    ));
    assert!(matches!(
        validate_token("a", game.used()),
        Err(MoveInputError::NotANumber(_))
    ));
    assert_eq!(validate_token("3", game.used()), Ok(Cell::BottomRight));
    assert_eq!(game, GameState::new());
}

#[test]
fn test_winning_lines_on_keypad() {
    let mut keys: Vec<[u8; 3]> = WINNING_LINES
        .iter()
        .map(|line| {
            let mut keys = line.map(|cell| cell.key());
            keys.sort_unstable();
            keys
        })
        .collect();
    keys.sort_unstable();
    let mut expected = vec![
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
        [1, 5, 9],
        [3, 5, 7],
    ];
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn test_win_evaluator_matches_lines_for_any_board() {
    // Every assignment of X/O/empty to the nine squares, bounded to keep
    // the search small: 3^9 boards.
    for code in 0..3usize.pow(9) {
        let mut board = Board::new();
        let mut rest = code;
        for cell in Cell::ALL {
            match rest % 3 {
                1 => board.place(cell, Player::X).unwrap(),
                2 => board.place(cell, Player::O).unwrap(),
                _ => {}
            }
            rest /= 3;
        }

        for player in [Player::X, Player::O] {
            let mark = Square::Occupied(player);
            let at = |row: usize, col: usize| board.squares()[row * 3 + col] == mark;
            let has_line = (0..3).any(|r| (0..3).all(|c| at(r, c)))
                || (0..3).any(|c| (0..3).all(|r| at(r, c)))
                || (0..3).all(|i| at(i, i))
                || (0..3).all(|i| at(i, 2 - i));
            assert_eq!(is_winner(player, &board, 9), has_line, "board {}", code);
            for move_count in 0..=4 {
                assert!(!is_winner(player, &board, move_count));
            }
        }
    }
}
