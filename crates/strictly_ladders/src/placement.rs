//! Placement rules for ladders and snakes.
//!
//! Rules are pure functions over the currently placed features so they can
//! be tested without a full board. Collision checks are directional: a
//! ladder top or snake tail is only checked against existing entry points
//! (ladder bottoms, snake mouths), never against other exits.
//! Two ladders may therefore share a top square, and a snake tail may land on
//! a ladder top.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::feature::{Endpoint, FeatureKind, FeatureSpec, Ladder, Snake};

/// Why a ladder or snake could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementError {
    /// An endpoint falls outside `[1, win_position]`.
    OutOfRange {
        /// Feature being placed.
        kind: FeatureKind,
        /// Last square of the board.
        win_position: u32,
    },
    /// Entry and exit are the same square.
    SelfLoop {
        /// Feature being placed.
        kind: FeatureKind,
        /// The shared square.
        position: u32,
    },
    /// A ladder that goes down or a snake that goes up.
    Inverted {
        /// Feature being placed.
        kind: FeatureKind,
        /// Requested entry square.
        entry: u32,
        /// Requested exit square.
        exit: u32,
    },
    /// A snake mouth on the winning square would make the game unwinnable.
    WinSquareMouth {
        /// The winning square.
        position: u32,
    },
    /// An endpoint collides with an already placed feature.
    Occupied {
        /// Endpoint of the new feature.
        incoming: Endpoint,
        /// Endpoint already on the square.
        existing: Endpoint,
        /// The contested square.
        position: u32,
    },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { kind, win_position } => write!(
                f,
                "A {} can be placed within the board between 1 and {}",
                kind, win_position
            ),
            Self::SelfLoop { kind, position } => write!(
                f,
                "A {} cannot start and end on the same square - {}",
                kind, position
            ),
            Self::Inverted {
                kind: FeatureKind::Ladder,
                entry,
                exit,
            } => write!(
                f,
                "A ladder top must be above its bottom - bottom {}, top {}",
                entry, exit
            ),
            Self::Inverted {
                kind: FeatureKind::Snake,
                entry,
                exit,
            } => write!(
                f,
                "A snake tail must be below its mouth - mouth {}, tail {}",
                entry, exit
            ),
            Self::WinSquareMouth { position } => write!(
                f,
                "A snake mouth cannot be placed on the winning square - {}",
                position
            ),
            Self::Occupied {
                incoming,
                existing,
                position,
            } => write!(
                f,
                "A {} already exists at the specified {} location - {}",
                existing,
                incoming.location(),
                position
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Outcome of one attempted placement during manual setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// What was requested.
    pub spec: FeatureSpec,
    /// Whether it went on the board.
    pub result: Result<(), PlacementError>,
}

/// Features already on the board, as seen by the rules.
#[derive(Debug, Clone, Copy)]
pub struct Placed<'a> {
    /// Ladders keyed by bottom.
    pub ladders: &'a BTreeMap<u32, Ladder>,
    /// Snakes keyed by mouth.
    pub snakes: &'a BTreeMap<u32, Snake>,
}

impl Placed<'_> {
    fn is_ladder_top(&self, position: u32) -> bool {
        self.ladders.values().any(|l| l.top == position)
    }

    fn is_snake_tail(&self, position: u32) -> bool {
        self.snakes.values().any(|s| s.tail == position)
    }

    /// Entry-point collisions, checked against every endpoint kind.
    fn entry_conflict(&self, position: u32) -> Option<Endpoint> {
        if self.ladders.contains_key(&position) {
            Some(Endpoint::LadderBottom)
        } else if self.snakes.contains_key(&position) {
            Some(Endpoint::SnakeMouth)
        } else if self.is_ladder_top(position) {
            Some(Endpoint::LadderTop)
        } else if self.is_snake_tail(position) {
            Some(Endpoint::SnakeTail)
        } else {
            None
        }
    }

    /// Exit-point collisions, checked against entry points only.
    fn exit_conflict(&self, position: u32) -> Option<Endpoint> {
        if self.ladders.contains_key(&position) {
            Some(Endpoint::LadderBottom)
        } else if self.snakes.contains_key(&position) {
            Some(Endpoint::SnakeMouth)
        } else {
            None
        }
    }
}

/// Checks a requested feature against the board size and placed features.
///
/// Rules run in a fixed order so the reported reason is stable: range,
/// self-loop, direction, winning square, then collisions (entry before exit).
///
/// # Errors
///
/// Returns the first [`PlacementError`] that applies.
#[instrument(skip(placed), fields(kind = %spec.kind, entry = spec.entry, exit = spec.exit))]
pub fn validate(
    spec: FeatureSpec,
    win_position: u32,
    placed: Placed<'_>,
) -> Result<(), PlacementError> {
    let FeatureSpec { kind, entry, exit } = spec;
    let in_range = |p: u32| (1..=win_position).contains(&p);

    let result = if !in_range(entry) || !in_range(exit) {
        Err(PlacementError::OutOfRange { kind, win_position })
    } else if entry == exit {
        Err(PlacementError::SelfLoop {
            kind,
            position: entry,
        })
    } else if is_inverted(kind, entry, exit) {
        Err(PlacementError::Inverted { kind, entry, exit })
    } else if kind == FeatureKind::Snake && entry == win_position {
        Err(PlacementError::WinSquareMouth { position: entry })
    } else if let Some(existing) = placed.entry_conflict(entry) {
        Err(PlacementError::Occupied {
            incoming: kind.entry(),
            existing,
            position: entry,
        })
    } else if let Some(existing) = placed.exit_conflict(exit) {
        Err(PlacementError::Occupied {
            incoming: kind.exit(),
            existing,
            position: exit,
        })
    } else {
        Ok(())
    };

    if let Err(ref e) = result {
        warn!(reason = %e, "Placement rejected");
    }
    result
}

fn is_inverted(kind: FeatureKind, entry: u32, exit: u32) -> bool {
    match kind {
        FeatureKind::Ladder => entry > exit,
        FeatureKind::Snake => exit > entry,
    }
}
