//! Finished-game record and the archive that stores it.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::board::Board;
use crate::dice::Dice;
use crate::feature::{Ladder, Snake};
use crate::player::PlayerId;

/// One player's ordered values (positions or rolls).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerSeries {
    /// Owner of the series.
    player: PlayerId,
    /// Values in the order they happened.
    values: Vec<u32>,
}

/// Complete history of one game, per player and in order.
///
/// Serialized as a document with two record arrays, `moves` and `rolls`,
/// plus enough of the setup (board size, dice, layout) to replay them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board rows.
    rows: u32,
    /// Board columns.
    columns: u32,
    /// Lowest dice face.
    dice_min: u32,
    /// Highest dice face.
    dice_max: u32,
    /// Winner, if the game was finished.
    winner: Option<PlayerId>,
    /// When the record was taken.
    played_at: DateTime<Utc>,
    /// Ladders on the board.
    #[serde(default)]
    ladders: Vec<Ladder>,
    /// Snakes on the board.
    #[serde(default)]
    snakes: Vec<Snake>,
    /// Positions per player, each starting at 0.
    moves: Vec<PlayerSeries>,
    /// Accepted rolls per player.
    rolls: Vec<PlayerSeries>,
}

impl GameRecord {
    /// Snapshots every player track on `board`.
    #[instrument(skip(board, dice))]
    pub fn from_board(board: &Board, dice: &Dice, winner: Option<PlayerId>) -> Self {
        let mut moves = Vec::new();
        let mut rolls = Vec::new();
        for player in board.players() {
            if let Some(track) = board.track(player) {
                moves.push(PlayerSeries::new(player, track.moves().clone()));
                rolls.push(PlayerSeries::new(player, track.rolls().clone()));
            }
        }
        Self {
            rows: *board.rows(),
            columns: *board.columns(),
            dice_min: *dice.min(),
            dice_max: *dice.max(),
            winner,
            played_at: Utc::now(),
            ladders: board.ladders().values().copied().collect(),
            snakes: board.snakes().values().copied().collect(),
            moves,
            rolls,
        }
    }

    /// Positions visited by `player`, starting with 0.
    pub fn moves_of(&self, player: PlayerId) -> Option<&[u32]> {
        self.moves
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.values.as_slice())
    }

    /// Dice values rolled by `player` on accepted moves.
    pub fn rolls_of(&self, player: PlayerId) -> Option<&[u32]> {
        self.rolls
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.values.as_slice())
    }

    /// Players present in the record, in seat order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.moves.iter().map(|s| s.player)
    }

    /// Checks that the record could have come from a real game.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Malformed`] when the seats are not
    /// `1..=n` in order, moves and rolls disagree on players or lengths, or a
    /// position lies off the board.
    #[instrument(skip(self))]
    pub fn check_consistency(&self) -> Result<(), PersistenceError> {
        let win = self.rows.saturating_mul(self.columns);
        if self.moves.len() != self.rolls.len() {
            return Err(PersistenceError::malformed(
                "moves and rolls list different players",
            ));
        }
        for (seat, (m, r)) in (1..).zip(self.moves.iter().zip(&self.rolls)) {
            if m.player.get() != seat {
                return Err(PersistenceError::malformed(format!(
                    "expected the moves of Player {} in slot {}, found {}",
                    seat, seat, m.player
                )));
            }
            if m.player != r.player {
                return Err(PersistenceError::malformed(format!(
                    "{} moves paired with {} rolls",
                    m.player, r.player
                )));
            }
            if m.values.first() != Some(&0) || m.values.len() != r.values.len() + 1 {
                return Err(PersistenceError::malformed(format!(
                    "{} has {} positions for {} rolls",
                    m.player,
                    m.values.len(),
                    r.values.len()
                )));
            }
            if m.values.iter().any(|p| *p > win) {
                return Err(PersistenceError::malformed(format!(
                    "{} has a position past square {}",
                    m.player, win
                )));
            }
        }
        Ok(())
    }
}

/// Failure to store or read back a game record.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PersistenceError {
    /// Nothing has been saved yet.
    #[display("No game data file found at {}. Please play a game to save a new one.", path)]
    NotFound {
        /// Where the archive looked.
        path: String,
    },
    /// Reading or writing failed.
    #[display("Some error occurred while accessing the game data file: {}", message)]
    Io {
        /// Underlying error text.
        message: String,
    },
    /// The stored document is not a valid record.
    #[display("The game data file is malformed: {}", message)]
    Malformed {
        /// What is wrong with it.
        message: String,
    },
}

impl PersistenceError {
    /// Builds a [`PersistenceError::Malformed`].
    pub fn malformed(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(%message, "Malformed game record");
        Self::Malformed { message }
    }
}

/// Stores finished games and reads back the most recent one.
pub trait GameArchive {
    /// Persists `record`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the record could not be stored.
    fn save(&mut self, record: &GameRecord) -> Result<(), PersistenceError>;

    /// Reads back the last saved record.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if nothing is saved or it cannot be read.
    fn load(&self) -> Result<GameRecord, PersistenceError>;
}

/// Keeps the last record in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    last: Option<GameRecord>,
}

impl GameArchive for MemoryArchive {
    fn save(&mut self, record: &GameRecord) -> Result<(), PersistenceError> {
        self.last = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> Result<GameRecord, PersistenceError> {
        self.last.clone().ok_or_else(|| PersistenceError::NotFound {
            path: "memory".to_string(),
        })
    }
}
