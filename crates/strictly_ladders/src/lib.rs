//! Strictly Ladders - snakes and ladders game logic.
//!
//! Pure, I/O-free engine for a console snakes and ladders game.
//!
//! # Architecture
//!
//! - **Board**: geometry, ladder/snake placement rules, player histories
//! - **Dice**: configurable range, bonus roll on the maximum face
//! - **Session**: turn loop, bonus turns, victory, hand-off to an archive
//! - **Record**: complete per-player history of a finished game
//!
//! Callers plug in input, output and storage through the [`TurnInput`],
//! [`EventSink`] and [`GameArchive`] traits.
//!
//! # Example
//!
//! ```
//! use strictly_ladders::{Board, FeatureKind, MoveResult, PlayerId};
//!
//! let mut board = Board::new(2, 10, 10).unwrap();
//! board.default_setup().unwrap();
//!
//! match board.move_player(PlayerId::FIRST, 5).unwrap() {
//!     MoveResult::Accepted(step) => {
//!         assert_eq!(step.resolved, 34);
//!         assert_eq!(step.feature, Some(FeatureKind::Ladder));
//!     }
//!     MoveResult::Rejected { .. } => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod dice;
mod events;
mod feature;
pub mod invariants;
mod moves;
mod placement;
mod player;
mod record;
mod replay;
mod session;

// Crate-level exports - Board and features
pub use board::Board;
pub use feature::{
    DEFAULT_COLUMNS, DEFAULT_LADDERS, DEFAULT_ROWS, DEFAULT_SNAKES, Endpoint, FeatureKind,
    FeatureSpec, Ladder, Snake,
};
pub use placement::{PlacementError, PlacementOutcome};

// Crate-level exports - Moves and players
pub use moves::{MoveError, MoveResult, RejectReason, Step};
pub use player::{PlayerId, PlayerTrack, ZeroSeat};

// Crate-level exports - Dice
pub use dice::{Dice, RandomRolls, RollSource, ScriptedRolls};

// Crate-level exports - Configuration
pub use config::{
    ConfigurationError, DEFAULT_DICE_MAX, DEFAULT_DICE_MIN, GameConfig, MAX_PLAYERS, MIN_PLAYERS,
    validate_dice, validate_players, win_position,
};

// Crate-level exports - Session
pub use events::{EventSink, GameEvent};
pub use session::{GameSession, Phase, SessionEnd, SessionError, TurnInput, TurnReport, TurnSignal};

// Crate-level exports - Records
pub use record::{GameArchive, GameRecord, MemoryArchive, PersistenceError, PlayerSeries};
pub use replay::{ReplayError, ReplaySummary, replay};
