//! Rebuilding a finished game from its record.
//!
//! Players never interact, so each player's path depends only on their own
//! accepted rolls. Replaying those rolls on a board rebuilt from the record's
//! layout must reproduce every stored position.

use derive_getters::Getters;
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::config::ConfigurationError;
use crate::dice::Dice;
use crate::moves::{MoveError, MoveResult};
use crate::placement::PlacementError;
use crate::player::PlayerId;
use crate::record::{GameRecord, PersistenceError};

/// Why a record does not replay.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// Board size, seats or dice in the record are invalid.
    #[display("Invalid game setup in record: {}", _0)]
    #[from]
    Setup(ConfigurationError),
    /// The stored layout breaks a placement rule.
    #[display("Invalid layout in record: {}", _0)]
    #[from]
    Layout(PlacementError),
    /// The record is structurally broken.
    #[display("{}", _0)]
    #[from]
    Record(PersistenceError),
    /// A player id in the record has no seat.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
    /// A stored roll is not a face of the stored dice.
    #[display("{} rolled {} on move {}, outside the dice range", player, roll, step)]
    RollOutOfRange {
        /// Player whose roll is bad.
        player: PlayerId,
        /// One-based index of the accepted move.
        step: usize,
        /// The stored roll.
        roll: u32,
    },
    /// A stored roll would have been rejected, so it cannot be in the record.
    #[display("{} rolled {} on move {}, which overshoots the board", player, roll, step)]
    RollRejected {
        /// Player whose roll is bad.
        player: PlayerId,
        /// One-based index of the accepted move.
        step: usize,
        /// The stored roll.
        roll: u32,
    },
    /// Replaying produced a different position than stored.
    #[display("{} move {}: record says {}, replay gives {}", player, step, expected, actual)]
    Diverged {
        /// Player whose path differs.
        player: PlayerId,
        /// One-based index of the accepted move.
        step: usize,
        /// Stored position.
        expected: u32,
        /// Replayed position.
        actual: u32,
    },
    /// The stored winner does not match who stands on the winning square.
    #[display("Record names {:?} as winner, replay finds {:?}", recorded, replayed)]
    WinnerMismatch {
        /// Winner in the record.
        recorded: Option<PlayerId>,
        /// Winner after replay.
        replayed: Option<PlayerId>,
    },
}

/// A successfully replayed game.
#[derive(Debug, Clone, Getters)]
pub struct ReplaySummary {
    /// Board after every stored move.
    board: Board,
    /// Dice rebuilt from the record.
    dice: Dice,
    /// Player on the winning square, if any.
    winner: Option<PlayerId>,
    /// Moves replayed across all players.
    accepted_moves: usize,
}

/// Replays `record` and checks every stored position.
///
/// # Errors
///
/// Returns [`ReplayError`] describing the first inconsistency.
#[instrument(skip(record), fields(rows = *record.rows(), columns = *record.columns()))]
pub fn replay(record: &GameRecord) -> Result<ReplaySummary, ReplayError> {
    record.check_consistency()?;

    let players = record.players().count() as u32;
    let mut board = Board::new(players, *record.rows(), *record.columns())?;
    let dice = Dice::new(*record.dice_min(), *record.dice_max())?;
    for ladder in record.ladders() {
        board.add_ladder(ladder.bottom, ladder.top)?;
    }
    for snake in record.snakes() {
        board.add_snake(snake.mouth, snake.tail)?;
    }

    let mut accepted_moves = 0;
    for player in record.players() {
        let rolls = record.rolls_of(player).unwrap_or_default();
        let moves = record.moves_of(player).unwrap_or_default();
        for (i, (&roll, &expected)) in rolls.iter().zip(moves.iter().skip(1)).enumerate() {
            let step = i + 1;
            if !dice.contains(roll) {
                return Err(ReplayError::RollOutOfRange { player, step, roll });
            }
            match board.move_player(player, roll)? {
                MoveResult::Accepted(s) if s.resolved == expected => accepted_moves += 1,
                MoveResult::Accepted(s) => {
                    return Err(ReplayError::Diverged {
                        player,
                        step,
                        expected,
                        actual: s.resolved,
                    });
                }
                MoveResult::Rejected { .. } => {
                    return Err(ReplayError::RollRejected { player, step, roll });
                }
            }
        }
        debug!(%player, position = ?board.position(player), "Player replayed");
    }

    let replayed = board.players().find(|p| board.check_victory(*p));
    if replayed != *record.winner() {
        return Err(ReplayError::WinnerMismatch {
            recorded: *record.winner(),
            replayed,
        });
    }

    info!(accepted_moves, winner = ?replayed, "Record replayed");
    Ok(ReplaySummary {
        board,
        dice,
        winner: replayed,
        accepted_moves,
    })
}
