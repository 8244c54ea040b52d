//! Placement rule tests, including the directional collision quirk.

use strictly_ladders::{Board, Endpoint, FeatureKind, PlacementError};

fn board() -> Board {
    Board::new(2, 10, 10).expect("Valid board")
}

/// Asserts a placement fails with `expected` and leaves the board as it was.
fn assert_refused(
    board: &mut Board,
    place: impl FnOnce(&mut Board) -> Result<(), PlacementError>,
    expected: PlacementError,
) {
    let before = board.clone();
    assert_eq!(place(board), Err(expected));
    assert_eq!(*board, before);
}

#[test]
fn test_range_message() {
    let mut board = board();
    let err = board.add_ladder(0, 50).unwrap_err();
    assert_eq!(
        err.to_string(),
        "A ladder can be placed within the board between 1 and 100"
    );
    assert!(board.add_snake(101, 5).is_err());
}

#[test]
fn test_self_loops_refused() {
    let mut board = board();
    assert_refused(
        &mut board,
        |b| b.add_ladder(10, 10),
        PlacementError::SelfLoop {
            kind: FeatureKind::Ladder,
            position: 10,
        },
    );
    assert_refused(
        &mut board,
        |b| b.add_snake(30, 30),
        PlacementError::SelfLoop {
            kind: FeatureKind::Snake,
            position: 30,
        },
    );
}

#[test]
fn test_inverted_ladder_refused() {
    let mut board = board();
    assert_refused(
        &mut board,
        |b| b.add_ladder(50, 10),
        PlacementError::Inverted {
            kind: FeatureKind::Ladder,
            entry: 50,
            exit: 10,
        },
    );
}

#[test]
fn test_snake_cannot_guard_last_square() {
    let mut board = board();
    assert_refused(
        &mut board,
        |b| b.add_snake(100, 50),
        PlacementError::WinSquareMouth { position: 100 },
    );
}

#[test]
fn test_ladder_bottom_collisions() {
    let mut board = board();
    board.add_ladder(5, 34).expect("Valid ladder");
    board.add_snake(60, 12).expect("Valid snake");

    for (bottom, existing) in [
        (5, Endpoint::LadderBottom),
        (60, Endpoint::SnakeMouth),
        (34, Endpoint::LadderTop),
        (12, Endpoint::SnakeTail),
    ] {
        assert_refused(
            &mut board,
            |b| b.add_ladder(bottom, 99),
            PlacementError::Occupied {
                incoming: Endpoint::LadderBottom,
                existing,
                position: bottom,
            },
        );
    }
}

#[test]
fn test_ladder_top_collisions() {
    let mut board = board();
    board.add_ladder(5, 34).expect("Valid ladder");
    board.add_snake(60, 12).expect("Valid snake");

    assert_refused(
        &mut board,
        |b| b.add_ladder(2, 5),
        PlacementError::Occupied {
            incoming: Endpoint::LadderTop,
            existing: Endpoint::LadderBottom,
            position: 5,
        },
    );
    assert_refused(
        &mut board,
        |b| b.add_ladder(2, 60),
        PlacementError::Occupied {
            incoming: Endpoint::LadderTop,
            existing: Endpoint::SnakeMouth,
            position: 60,
        },
    );
}

#[test]
fn test_snake_collisions() {
    let mut board = board();
    board.add_ladder(5, 34).expect("Valid ladder");
    board.add_snake(60, 12).expect("Valid snake");

    assert_refused(
        &mut board,
        |b| b.add_snake(34, 3),
        PlacementError::Occupied {
            incoming: Endpoint::SnakeMouth,
            existing: Endpoint::LadderTop,
            position: 34,
        },
    );
    assert_refused(
        &mut board,
        |b| b.add_snake(12, 3),
        PlacementError::Occupied {
            incoming: Endpoint::SnakeMouth,
            existing: Endpoint::SnakeTail,
            position: 12,
        },
    );
    assert_refused(
        &mut board,
        |b| b.add_snake(90, 60),
        PlacementError::Occupied {
            incoming: Endpoint::SnakeTail,
            existing: Endpoint::SnakeMouth,
            position: 60,
        },
    );
    assert_refused(
        &mut board,
        |b| b.add_snake(80, 5),
        PlacementError::Occupied {
            incoming: Endpoint::SnakeTail,
            existing: Endpoint::LadderBottom,
            position: 5,
        },
    );
}

/// Exits are only checked against entry points. Two ladders may share a
/// top, two snakes a tail, and a snake tail may sit on a ladder top.
#[test]
fn test_known_quirk_exits_may_share_squares() {
    let mut board = board();
    board.add_ladder(5, 34).expect("Valid ladder");
    board.add_ladder(8, 34).expect("Shared ladder top is allowed");
    board.add_snake(60, 12).expect("Valid snake");
    board.add_snake(70, 12).expect("Shared snake tail is allowed");
    board.add_snake(80, 34).expect("Snake tail on a ladder top is allowed");
    board.add_ladder(3, 12).expect("Ladder top on a snake tail is allowed");

    assert_eq!(board.ladders().len(), 3);
    assert_eq!(board.snakes().len(), 3);
}

#[test]
fn test_default_layout_on_populated_board_fails() {
    let mut board = board();
    board.add_snake(6, 5).expect("Valid snake");
    assert!(matches!(
        board.default_setup(),
        Err(PlacementError::Occupied {
            incoming: Endpoint::LadderBottom,
            existing: Endpoint::SnakeTail,
            position: 5,
        })
    ));
}

#[test]
fn test_default_layout_on_larger_board() {
    let mut board = Board::new(2, 12, 12).expect("Valid board");
    board.default_setup().expect("Layout fits any board of 100+ squares");
    assert_eq!(board.snakes().len(), 12);
}
