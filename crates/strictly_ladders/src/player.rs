//! Player identity and per-player history.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A player seat, numbered from 1.
///
/// Players carry no state of their own; positions and rolls live in the
/// [`Board`](crate::Board) and are looked up by this id.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("Player {}", _0)]
#[serde(try_from = "u32", into = "u32")]
pub struct PlayerId(u32);

/// A stored seat number of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Seat numbers start at 1, got 0")]
pub struct ZeroSeat;

impl TryFrom<u32> for PlayerId {
    type Error = ZeroSeat;

    fn try_from(seat: u32) -> Result<Self, Self::Error> {
        Self::new(seat).ok_or(ZeroSeat)
    }
}

impl From<PlayerId> for u32 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl PlayerId {
    /// Creates a player id. Returns `None` for 0, since seats start at 1.
    pub fn new(seat: u32) -> Option<Self> {
        (seat > 0).then_some(Self(seat))
    }

    /// The first seat.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Returns the seat number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based slot into per-player tables.
    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Next seat in turn order, wrapping after `num_players`.
    pub(crate) fn next(self, num_players: u32) -> Self {
        if self.0 >= num_players {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }
}

/// Append-only record of where a player has been and what they rolled.
///
/// `moves` starts with the unmoved position 0; every accepted move appends
/// one position and one roll, so `moves.len() == rolls.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerTrack {
    /// Positions visited, oldest first.
    moves: Vec<u32>,
    /// Dice values of accepted moves, oldest first.
    rolls: Vec<u32>,
}

impl PlayerTrack {
    pub(crate) fn new() -> Self {
        Self {
            moves: vec![0],
            rolls: Vec::new(),
        }
    }

    /// Current position (latest entry of `moves`).
    pub fn position(&self) -> u32 {
        self.moves.last().copied().unwrap_or(0)
    }

    pub(crate) fn push(&mut self, roll: u32, position: u32) {
        self.rolls.push(roll);
        self.moves.push(position);
    }

    #[cfg(test)]
    pub(crate) fn moves_mut(&mut self) -> &mut Vec<u32> {
        &mut self.moves
    }
}
