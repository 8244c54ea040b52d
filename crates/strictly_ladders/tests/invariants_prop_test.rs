//! Property tests over random roll sequences.

use proptest::prelude::*;
use strictly_ladders::invariants::{BoardInvariants, InvariantSet};
use strictly_ladders::{Board, MoveResult, PlayerId};

fn default_board() -> Board {
    let mut board = Board::new(2, 10, 10).expect("Valid board");
    board.default_setup().expect("Default layout fits");
    board
}

proptest! {
    #[test]
    fn prop_positions_stay_on_board(rolls in prop::collection::vec((1u32..=2, 1u32..=6), 0..200)) {
        let mut board = default_board();
        for (seat, roll) in rolls {
            let player = PlayerId::new(seat).expect("Seat 1 or 2");
            board.move_player(player, roll).expect("Seated player");
            let position = board.position(player).expect("Seated player");
            prop_assert!(position <= *board.win_position());
        }
        prop_assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn prop_history_counts_accepted_moves(rolls in prop::collection::vec(1u32..=30, 0..60)) {
        let mut board = Board::new(2, 6, 6).expect("Valid board");
        let mut accepted = 0;
        for roll in rolls {
            if board.move_player(PlayerId::FIRST, roll).expect("Seated player").is_accepted() {
                accepted += 1;
            }
        }
        let track = board.track(PlayerId::FIRST).expect("Seated player");
        prop_assert_eq!(track.moves().len(), accepted + 1);
        prop_assert_eq!(track.rolls().len(), accepted);
    }

    #[test]
    fn prop_overshoot_never_mutates(start in 0u32..=100, roll in 1u32..=200) {
        let mut board = Board::new(2, 10, 10).expect("Valid board");
        if start > 0 {
            board.move_player(PlayerId::FIRST, start).expect("Seated player");
        }
        let before = board.clone();
        let result = board.move_player(PlayerId::FIRST, roll).expect("Seated player");
        if start + roll > 100 {
            let is_rejected = matches!(result, MoveResult::Rejected { .. });
            prop_assert!(is_rejected);
            prop_assert_eq!(board, before);
        } else {
            prop_assert_eq!(board.position(PlayerId::FIRST), Some(start + roll));
        }
    }

    #[test]
    fn prop_refused_placement_leaves_board_unchanged(entry in 0u32..=110, exit in 0u32..=110, snake in any::<bool>()) {
        let mut board = default_board();
        let before = board.clone();
        let result = if snake { board.add_snake(entry, exit) } else { board.add_ladder(entry, exit) };
        if result.is_err() {
            prop_assert_eq!(board, before);
        } else {
            prop_assert!(BoardInvariants::check_all(&board).is_ok());
        }
    }
}
