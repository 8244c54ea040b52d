//! Outcomes of a single move on the board.
//!
//! A move that overshoots the last square is a normal outcome, not an error:
//! it is reported as [`MoveResult::Rejected`] and leaves the board untouched.

use serde::{Deserialize, Serialize};

use crate::feature::FeatureKind;
use crate::player::PlayerId;

/// An accepted move, from the square the player stood on to where they ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position before the roll.
    pub from: u32,
    /// `from + roll`, the square landed on.
    pub target: u32,
    /// Final position after at most one ladder or snake.
    pub resolved: u32,
    /// Feature triggered on `target`, if any.
    pub feature: Option<FeatureKind>,
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The roll would carry the player past the winning square.
    #[display("overshoot")]
    Overshoot,
}

/// Result of [`Board::move_player`](crate::Board::move_player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The player moved; history grew by one entry.
    Accepted(Step),
    /// The player stays put; history is unchanged.
    Rejected {
        /// Position the player keeps.
        from: u32,
        /// The square the roll would have reached.
        target: u32,
        /// Why the move was refused.
        reason: RejectReason,
    },
}

impl MoveResult {
    /// Returns the step if the move was accepted.
    pub fn accepted(&self) -> Option<&Step> {
        match self {
            Self::Accepted(step) => Some(step),
            Self::Rejected { .. } => None,
        }
    }

    /// True when the move was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Error raised when a move cannot even be attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The id does not name a seat on this board.
    #[display("{} is not seated at this board of {} players", player, num_players)]
    UnknownPlayer {
        /// Requested player.
        player: PlayerId,
        /// Number of seats.
        num_players: u32,
    },
}

impl std::error::Error for MoveError {}
