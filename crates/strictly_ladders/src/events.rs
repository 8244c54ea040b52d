//! Structured events emitted while setting up and playing a game.
//!
//! The engine never prints. Callers receive [`GameEvent`]s through an
//! [`EventSink`] and decide how to render them; the `Display` impl gives the
//! console wording.

use serde::{Deserialize, Serialize};

use crate::feature::{FeatureKind, FeatureSpec};
use crate::placement::PlacementError;
use crate::player::PlayerId;

/// Something that happened in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's turn begins.
    TurnStarted {
        /// Player in turn.
        player: PlayerId,
    },
    /// The dice was rolled.
    Rolled {
        /// Player who rolled.
        player: PlayerId,
        /// Face shown.
        value: u32,
    },
    /// The roll would have left the board.
    MoveRejected {
        /// Player who rolled.
        player: PlayerId,
        /// Position kept.
        from: u32,
        /// Square the roll would have reached.
        target: u32,
    },
    /// The player moved.
    MoveAccepted {
        /// Player who moved.
        player: PlayerId,
        /// Position before the move.
        from: u32,
        /// Square landed on.
        target: u32,
        /// Position after any ladder or snake.
        resolved: u32,
        /// Feature triggered on `target`.
        feature: Option<FeatureKind>,
    },
    /// The player rolled the dice maximum and goes again.
    BonusTurn {
        /// Player who rolls again.
        player: PlayerId,
    },
    /// The player reached the winning square.
    Victory {
        /// The winner.
        player: PlayerId,
    },
    /// A ladder or snake went on the board.
    PlacementAccepted {
        /// What was placed.
        spec: FeatureSpec,
    },
    /// A ladder or snake was refused.
    PlacementRejected {
        /// What was requested.
        spec: FeatureSpec,
        /// Why it was refused.
        error: PlacementError,
    },
    /// The finished game was handed to the archive.
    GameSaved,
    /// The archive could not store the finished game.
    SaveFailed {
        /// Error text from the archive.
        reason: String,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TurnStarted { player } => write!(f, "{}'s turn", player),
            Self::Rolled { player, value } => {
                write!(f, "{} rolled a dice and got {}", player, value)
            }
            Self::MoveRejected { player, .. } => write!(
                f,
                "This dice roll is moving {} out of the board, try again",
                player
            ),
            Self::MoveAccepted {
                player,
                from,
                target,
                resolved,
                feature,
            } => {
                write!(
                    f,
                    "Moving {} from {} to new position: {} on the board",
                    player, from, target
                )?;
                match feature {
                    Some(FeatureKind::Ladder) => write!(
                        f,
                        "\nWOW! Found a ladder at the new position {}, jumping to {} on the board",
                        target, resolved
                    ),
                    Some(FeatureKind::Snake) => write!(
                        f,
                        "\nOUCH! Found a snake at the new position {}, falling to {} on the board",
                        target, resolved
                    ),
                    None => Ok(()),
                }
            }
            Self::BonusTurn { player } => write!(f, "GREAT! One more turn for {}", player),
            Self::Victory { player } => write!(f, "HURRAYYYYY! {} won the game", player),
            Self::PlacementAccepted { spec } => write!(f, "Placed {}", spec),
            Self::PlacementRejected { error, .. } => write!(f, "{}", error),
            Self::GameSaved => write!(f, "Game saved"),
            Self::SaveFailed { reason } => write!(f, "Could not save the game: {}", reason),
        }
    }
}

/// Receives events as they happen.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}
