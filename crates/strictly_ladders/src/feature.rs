//! Ladders, snakes and the fixed default layout.

use serde::{Deserialize, Serialize};

/// Ladders of the default 10x10 board as `(bottom, top)`.
pub const DEFAULT_LADDERS: [(u32, u32); 12] = [
    (5, 34),
    (14, 98),
    (12, 21),
    (22, 75),
    (28, 41),
    (35, 45),
    (39, 89),
    (42, 67),
    (53, 69),
    (60, 88),
    (66, 93),
    (78, 91),
];

/// Snakes of the default 10x10 board as `(mouth, tail)`.
pub const DEFAULT_SNAKES: [(u32, u32); 12] = [
    (99, 2),
    (90, 76),
    (81, 33),
    (73, 56),
    (65, 11),
    (61, 40),
    (51, 27),
    (47, 17),
    (32, 10),
    (26, 17),
    (20, 4),
    (19, 8),
];

/// Default board dimensions matching [`DEFAULT_LADDERS`] and [`DEFAULT_SNAKES`].
pub const DEFAULT_ROWS: u32 = 10;
/// Default board dimensions matching [`DEFAULT_LADDERS`] and [`DEFAULT_SNAKES`].
pub const DEFAULT_COLUMNS: u32 = 10;

/// Which kind of feature a square belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Climbs from bottom to top.
    #[display("ladder")]
    Ladder,
    /// Drops from mouth to tail.
    #[display("snake")]
    Snake,
}

impl FeatureKind {
    /// Endpoint a player lands on to trigger the feature.
    pub fn entry(self) -> Endpoint {
        match self {
            Self::Ladder => Endpoint::LadderBottom,
            Self::Snake => Endpoint::SnakeMouth,
        }
    }

    /// Endpoint a triggered player is moved to.
    pub fn exit(self) -> Endpoint {
        match self {
            Self::Ladder => Endpoint::LadderTop,
            Self::Snake => Endpoint::SnakeTail,
        }
    }
}

/// One end of a placed feature.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Endpoint {
    /// Entry of a ladder.
    #[display("ladder bottom")]
    LadderBottom,
    /// Exit of a ladder.
    #[display("ladder top")]
    LadderTop,
    /// Entry of a snake.
    #[display("snake mouth")]
    SnakeMouth,
    /// Exit of a snake.
    #[display("snake tail")]
    SnakeTail,
}

impl Endpoint {
    /// Short location name used in placement messages ("bottom", "tail", ...).
    pub fn location(self) -> &'static str {
        match self {
            Self::LadderBottom => "bottom",
            Self::LadderTop => "top",
            Self::SnakeMouth => "mouth",
            Self::SnakeTail => "tail",
        }
    }
}

/// A placed ladder. `bottom < top` once accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Ladder {
    /// Entry square.
    pub bottom: u32,
    /// Exit square.
    pub top: u32,
}

/// A placed snake. `tail < mouth` once accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Snake {
    /// Entry square.
    pub mouth: u32,
    /// Exit square.
    pub tail: u32,
}

/// A feature as requested by a caller, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Ladder or snake.
    pub kind: FeatureKind,
    /// Square that triggers the feature (ladder bottom, snake mouth).
    pub entry: u32,
    /// Square the feature leads to (ladder top, snake tail).
    pub exit: u32,
}

impl FeatureSpec {
    /// Ladder from `bottom` to `top`.
    pub fn ladder(bottom: u32, top: u32) -> Self {
        Self {
            kind: FeatureKind::Ladder,
            entry: bottom,
            exit: top,
        }
    }

    /// Snake from `mouth` to `tail`.
    pub fn snake(mouth: u32, tail: u32) -> Self {
        Self {
            kind: FeatureKind::Snake,
            entry: mouth,
            exit: tail,
        }
    }
}

impl std::fmt::Display for FeatureSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.entry, self.exit)
    }
}
