//! Feature invariant: placed ladders and snakes obey the placement rules.

use super::Invariant;
use crate::Board;

/// Invariant: features sit on the board, point the right way, are keyed by
/// their entry square, and no snake guards the winning square.
pub struct FeaturesWellFormedInvariant;

impl Invariant<Board> for FeaturesWellFormedInvariant {
    fn holds(board: &Board) -> bool {
        let win = *board.win_position();
        let on_board = |p: u32| (1..=win).contains(&p);

        let ladders_ok = board
            .ladders()
            .iter()
            .all(|(key, l)| *key == l.bottom && on_board(l.bottom) && on_board(l.top) && l.bottom < l.top);
        let snakes_ok = board.snakes().iter().all(|(key, s)| {
            *key == s.mouth && on_board(s.mouth) && on_board(s.tail) && s.tail < s.mouth && s.mouth != win
        });
        let entries_disjoint = board.ladders().keys().all(|k| !board.snakes().contains_key(k));

        ladders_ok && snakes_ok && entries_disjoint
    }

    fn description() -> &'static str {
        "Ladders climb, snakes drop, and both stay on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ladder;

    #[test]
    fn test_default_layout_holds() {
        let mut board = Board::new(2, 10, 10).unwrap();
        board.default_setup().unwrap();
        assert!(FeaturesWellFormedInvariant::holds(&board));
    }

    #[test]
    fn test_detects_descending_ladder() {
        let mut board = Board::new(2, 10, 10).unwrap();
        board.ladders.insert(40, Ladder::new(40, 12));
        assert!(!FeaturesWellFormedInvariant::holds(&board));
    }
}
