//! Tests for the match controller: turn flow, naming, and reset.

use gridlock::{Mark, MatchController, Position, TurnError, TurnOutcome};

/// Plays the given indices in order, asserting each turn succeeds.
fn play_all(controller: &mut MatchController, indices: &[usize]) {
    for &index in indices {
        let pos = Position::from_index(index).expect("index in range");
        controller.play_turn(pos).expect("legal turn");
    }
}

#[test]
fn test_match_starts_with_defaults() {
    let controller = MatchController::new();
    assert_eq!(controller.player_one().name(), "Player 1");
    assert_eq!(controller.player_two().name(), "Player 2");
    assert_eq!(controller.current_player().mark(), &Mark::X);
    assert!(!controller.is_over());
    assert_eq!(controller.status_line(), "Player 1's turn.");
}

#[test]
fn test_turns_alternate_between_players() {
    let mut controller = MatchController::with_names("Alice", "Bob");
    assert_eq!(controller.current_player().name(), "Alice");

    let outcome = controller.play_turn(Position::Center).unwrap();
    assert_eq!(outcome, TurnOutcome::NextTurn);
    assert_eq!(controller.current_player().name(), "Bob");
    assert_eq!(controller.status_line(), "Bob's turn.");

    controller.play_turn(Position::TopLeft).unwrap();
    assert_eq!(controller.current_player().name(), "Alice");
}

#[test]
fn test_first_column_win() {
    let mut controller = MatchController::with_names("Alice", "Bob");
    // Alice takes 0, 3, 6 while Bob answers at 1 and 4.
    play_all(&mut controller, &[0, 1, 3, 4]);
    let outcome = controller.play_turn(Position::BottomLeft).unwrap();

    assert_eq!(outcome, TurnOutcome::Won);
    assert!(controller.is_over());
    assert_eq!(controller.winner().unwrap().name(), "Alice");
    assert_eq!(controller.winner().unwrap().mark(), &Mark::X);
    // The turn does not advance past the winning move.
    assert_eq!(controller.current_player().name(), "Alice");
    assert_eq!(controller.status_line(), "Alice is the winner!");
}

#[test]
fn test_taken_cell_keeps_the_acting_player() {
    let mut controller = MatchController::with_names("Alice", "Bob");
    controller.play_turn(Position::TopLeft).unwrap();

    let before = controller.board().cells();
    let err = controller.play_turn(Position::TopLeft).unwrap_err();

    match &err {
        TurnError::CellTaken { position, player } => {
            assert_eq!(*position, Position::TopLeft);
            assert_eq!(player, "Bob");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Choose a different cell. The top-left cell is taken. Still Bob's turn."
    );
    assert_eq!(controller.board().cells(), before);
    assert_eq!(controller.current_player().name(), "Bob");
    assert!(!controller.is_over());
}

#[test]
fn test_finished_match_rejects_turns() {
    let mut controller = MatchController::new();
    play_all(&mut controller, &[0, 1, 3, 4, 6]);
    assert!(controller.is_over());

    let err = controller.play_turn(Position::BottomRight).unwrap_err();
    assert_eq!(err, TurnError::MatchOver);
    assert!(controller.board().is_open(Position::BottomRight));
}

#[test]
fn test_draw_reports_no_winner() {
    let mut controller = MatchController::new();
    play_all(&mut controller, &[0, 4, 2, 1, 3, 5, 7, 6]);

    let outcome = controller.play_turn(Position::BottomRight).unwrap();
    assert_eq!(outcome, TurnOutcome::Drawn);
    assert!(controller.is_over());
    assert_eq!(controller.winner(), None);
    assert_eq!(controller.status_line(), "It's a draw!");
}

#[test]
fn test_reset_preserves_names() {
    let mut controller = MatchController::with_names("Alice", "Bob");
    play_all(&mut controller, &[0, 1, 3, 4, 6]);
    assert!(controller.is_over());

    controller.reset();

    assert!(!controller.is_over());
    assert_eq!(controller.current_player().name(), "Alice");
    assert_eq!(controller.player_two().name(), "Bob");
    for pos in Position::ALL {
        assert!(controller.board().is_open(pos));
    }
    assert_eq!(controller.status_line(), "Alice's turn.");
}

#[test]
fn test_renaming_mid_match_leaves_play_untouched() {
    let mut controller = MatchController::new();
    controller.play_turn(Position::Center).unwrap();

    controller.set_player_names("Alice", "Bob");

    // Marks and the turn are unchanged; only the names moved.
    assert_eq!(controller.current_player().name(), "Bob");
    assert_eq!(controller.current_player().mark(), &Mark::O);
    assert!(!controller.board().is_open(Position::Center));
}

#[test]
fn test_blank_names_fall_back_to_defaults() {
    let mut controller = MatchController::with_names("", "   ");
    assert_eq!(controller.player_one().name(), "Player 1");
    assert_eq!(controller.player_two().name(), "Player 2");

    controller.set_player_names("Alice", "");
    assert_eq!(controller.player_one().name(), "Alice");
    assert_eq!(controller.player_two().name(), "Player 2");
}

#[test]
fn test_independent_matches_do_not_share_state() {
    let mut first = MatchController::new();
    let second = MatchController::new();

    first.play_turn(Position::Center).unwrap();

    assert!(!first.board().is_open(Position::Center));
    assert!(second.board().is_open(Position::Center));
}
