//! Bounds invariant: every player stands on `[0, win_position]`.

use super::Invariant;
use crate::Board;

/// Invariant: no recorded position lies outside the board.
///
/// Position 0 is the unmoved start, so the lower bound is inclusive of it.
pub struct PositionsInBoundsInvariant;

impl Invariant<Board> for PositionsInBoundsInvariant {
    fn holds(board: &Board) -> bool {
        let win = *board.win_position();
        board
            .tracks()
            .iter()
            .all(|track| track.moves().iter().all(|p| *p <= win))
    }

    fn description() -> &'static str {
        "Every player position lies within the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    #[test]
    fn test_holds_after_overshoot() {
        let mut board = Board::new(2, 2, 2).unwrap();
        board.move_player(PlayerId::FIRST, 3).unwrap();
        board.move_player(PlayerId::FIRST, 6).unwrap();
        assert!(PositionsInBoundsInvariant::holds(&board));
    }

    #[test]
    fn test_detects_position_past_board() {
        let mut board = Board::new(2, 2, 2).unwrap();
        *board.tracks[1].moves_mut().last_mut().unwrap() = 5;
        assert!(!PositionsInBoundsInvariant::holds(&board));
    }
}
