//! History consistency invariant: one position per accepted roll.

use super::Invariant;
use crate::Board;

/// Invariant: each track starts at 0 and holds exactly one more position
/// than rolls.
pub struct HistoryConsistentInvariant;

impl Invariant<Board> for HistoryConsistentInvariant {
    fn holds(board: &Board) -> bool {
        board.tracks().iter().all(|track| {
            track.moves().first() == Some(&0) && track.moves().len() == track.rolls().len() + 1
        })
    }

    fn description() -> &'static str {
        "History length matches number of accepted rolls"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    #[test]
    fn test_rejected_moves_leave_history_consistent() {
        let mut board = Board::new(2, 3, 3).unwrap();
        board.move_player(PlayerId::FIRST, 4).unwrap();
        board.move_player(PlayerId::FIRST, 6).unwrap();
        assert!(HistoryConsistentInvariant::holds(&board));
        assert_eq!(board.track(PlayerId::FIRST).unwrap().moves().len(), 2);
    }

    #[test]
    fn test_detects_position_without_roll() {
        let mut board = Board::new(2, 3, 3).unwrap();
        board.tracks[0].moves_mut().push(4);
        assert!(!HistoryConsistentInvariant::holds(&board));
    }
}
