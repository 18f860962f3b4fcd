//! Tests for the move-history timeline.

use tictactoe_rewind::{GameStatus, MoveError, Player, Position, Square, Timeline};

#[test]
fn test_game_start() {
    let timeline = Timeline::new();

    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.current(), 0);
    assert_eq!(timeline.status(), GameStatus::InProgress);
    assert_eq!(timeline.next_player(), Player::X);
    assert!(Position::ALL.iter().all(|&p| timeline.board().is_empty(p)));
}

#[test]
fn test_diagonal_win_sequence() {
    // X@0, O@1, X@4, O@2, X@8: X wins the 0-4-8 diagonal.
    let mut timeline = Timeline::new();
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ] {
        timeline.play(pos).expect("Legal move");
    }

    assert_eq!(timeline.status(), GameStatus::Won(Player::X));
    assert_eq!(timeline.len(), 6);

    let board = timeline.board();
    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        assert_eq!(board.get(pos), Square::Occupied(Player::X));
    }
}

#[test]
fn test_each_entry_adds_one_mark() {
    let mut timeline = Timeline::new();
    for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
        timeline.play(pos).expect("Legal move");
    }

    for (move_number, window) in timeline.boards().windows(2).enumerate() {
        let changed = Position::ALL
            .iter()
            .filter(|&&p| window[0].get(p) != window[1].get(p))
            .count();
        assert_eq!(changed, 1, "move {} must change one square", move_number + 1);
    }
}

#[test]
fn test_occupied_square_leaves_timeline_unchanged() {
    let mut timeline = Timeline::new();
    timeline.play(Position::Center).expect("Legal move");

    let before = timeline.clone();
    assert_eq!(
        timeline.play(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(timeline, before);
}

#[test]
fn test_finished_game_rejects_moves() {
    let mut timeline = Timeline::new();
    // X wins the top row.
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        timeline.play(pos).expect("Legal move");
    }
    assert_eq!(timeline.status(), GameStatus::Won(Player::X));

    let before = timeline.clone();
    assert_eq!(timeline.play(Position::BottomLeft), Err(MoveError::GameOver));
    assert_eq!(timeline, before);
}

#[test]
fn test_jump_then_play_discards_future() {
    let mut timeline = Timeline::new();
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
    ] {
        timeline.play(pos).expect("Legal move");
    }
    assert_eq!(timeline.len(), 6);

    timeline.jump_to(2);
    timeline.play(Position::BottomCenter).expect("Legal move");

    assert_eq!(timeline.len(), 4);
    assert_eq!(timeline.current(), 3);
    // The branch replays from entry 2: X moved there, so the new mark is X.
    assert_eq!(
        timeline.board().get(Position::BottomCenter),
        Square::Occupied(Player::X)
    );
    // The abandoned future is gone.
    assert!(timeline.board().is_empty(Position::TopRight));
}

#[test]
fn test_jumping_around_without_moves_keeps_history() {
    let mut timeline = Timeline::new();
    for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
        timeline.play(pos).expect("Legal move");
    }

    timeline.jump_to(1);
    timeline.jump_to(3);
    timeline.jump_to(0);

    assert_eq!(timeline.len(), 4);
    assert_eq!(timeline.current(), 0);
    assert_eq!(timeline.board(), &tictactoe_rewind::Board::new());
}

#[test]
fn test_jump_past_win_rewinds_turn() {
    let mut timeline = Timeline::new();
    // X wins the left column.
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ] {
        timeline.play(pos).expect("Legal move");
    }
    assert_eq!(timeline.status(), GameStatus::Won(Player::X));

    // Rewind to before the winning move: the game is live again.
    timeline.jump_to(4);
    assert_eq!(timeline.status(), GameStatus::InProgress);
    assert_eq!(timeline.next_player(), Player::X);

    // X goes somewhere else this time; O takes over from there.
    timeline.play(Position::BottomRight).expect("Legal move");
    assert_eq!(timeline.next_player(), Player::O);
    assert_eq!(timeline.len(), 6);
}

#[test]
fn test_serde_round_trip() {
    let mut timeline = Timeline::new();
    for pos in [Position::Center, Position::TopLeft] {
        timeline.play(pos).expect("Legal move");
    }
    timeline.jump_to(1);

    let json = serde_json::to_string(&timeline).expect("Serialize timeline");
    let restored: Timeline = serde_json::from_str(&json).expect("Deserialize timeline");
    assert_eq!(restored, timeline);
}
