//! The board: geometry, ladders and snakes, and where every player stands.

use std::collections::BTreeMap;

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::config::{ConfigurationError, GameConfig, validate_players, win_position};
use crate::feature::{
    DEFAULT_LADDERS, DEFAULT_SNAKES, FeatureKind, FeatureSpec, Ladder, Snake,
};
use crate::invariants::assert_invariants;
use crate::moves::{MoveError, MoveResult, RejectReason, Step};
use crate::placement::{self, Placed, PlacementError, PlacementOutcome};
use crate::player::{PlayerId, PlayerTrack};

/// A snakes and ladders board with `rows * columns` squares numbered from 1.
///
/// Features are keyed by their entry square. Once setup is done they do not
/// change; only the player tracks grow as the game goes on.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Board {
    /// Number of rows.
    rows: u32,
    /// Number of columns.
    columns: u32,
    /// Last square, `rows * columns`.
    win_position: u32,
    /// Ladders keyed by bottom square.
    pub(crate) ladders: BTreeMap<u32, Ladder>,
    /// Snakes keyed by mouth square.
    snakes: BTreeMap<u32, Snake>,
    /// One history per seat, indexed by seat - 1.
    pub(crate) tracks: Vec<PlayerTrack>,
}

impl Board {
    /// Creates an empty board with every player on square 0.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for fewer than two players or a board
    /// with a zero or overflowing dimension.
    #[instrument]
    pub fn new(players: u32, rows: u32, columns: u32) -> Result<Self, ConfigurationError> {
        validate_players(players)?;
        let win_position = win_position(rows, columns)?;
        info!(players, rows, columns, win_position, "Board created");
        Ok(Self {
            rows,
            columns,
            win_position,
            ladders: BTreeMap::new(),
            snakes: BTreeMap::new(),
            tracks: (0..players).map(|_| PlayerTrack::new()).collect(),
        })
    }

    /// Creates an empty board sized by `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Board::new`].
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigurationError> {
        Self::new(*config.players(), *config.rows(), *config.columns())
    }

    /// Places a ladder from `bottom` up to `top`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] and leaves the board unchanged when the
    /// ladder breaks a placement rule.
    pub fn add_ladder(&mut self, bottom: u32, top: u32) -> Result<(), PlacementError> {
        self.place(FeatureSpec::ladder(bottom, top))
    }

    /// Places a snake from `mouth` down to `tail`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] and leaves the board unchanged when the
    /// snake breaks a placement rule.
    pub fn add_snake(&mut self, mouth: u32, tail: u32) -> Result<(), PlacementError> {
        self.place(FeatureSpec::snake(mouth, tail))
    }

    /// Validates and places any feature.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] and leaves the board unchanged on failure.
    #[instrument(skip(self), fields(feature = %spec))]
    pub fn place(&mut self, spec: FeatureSpec) -> Result<(), PlacementError> {
        placement::validate(
            spec,
            self.win_position,
            Placed {
                ladders: &self.ladders,
                snakes: &self.snakes,
            },
        )?;

        match spec.kind {
            FeatureKind::Ladder => {
                self.ladders
                    .insert(spec.entry, Ladder::new(spec.entry, spec.exit));
            }
            FeatureKind::Snake => {
                self.snakes
                    .insert(spec.entry, Snake::new(spec.entry, spec.exit));
            }
        }
        debug!("Feature placed");
        assert_invariants(self);
        Ok(())
    }

    /// Installs the fixed 12-ladder, 12-snake layout of the 10x10 board.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlacementError`] if the board is too small for the
    /// layout or already holds conflicting features. Features placed before
    /// the failure stay on the board.
    #[instrument(skip(self))]
    pub fn default_setup(&mut self) -> Result<(), PlacementError> {
        for (bottom, top) in DEFAULT_LADDERS {
            self.add_ladder(bottom, top)?;
        }
        for (mouth, tail) in DEFAULT_SNAKES {
            self.add_snake(mouth, tail)?;
        }
        info!(
            ladders = self.ladders.len(),
            snakes = self.snakes.len(),
            "Default board setup completed"
        );
        Ok(())
    }

    /// Attempts each ladder then each snake, reporting one outcome per item.
    ///
    /// Failed items are not placed and are not retried here; a caller that
    /// wants a fixed count re-asks for the same slot. A one-square board has
    /// nowhere to put a feature, so nothing is attempted.
    #[instrument(skip(self, ladders, snakes), fields(ladders = ladders.len(), snakes = snakes.len()))]
    pub fn manual_setup(
        &mut self,
        ladders: &[(u32, u32)],
        snakes: &[(u32, u32)],
    ) -> Vec<PlacementOutcome> {
        if self.win_position == 1 {
            info!("Single-square board, skipping manual setup");
            return Vec::new();
        }

        let specs = ladders
            .iter()
            .map(|&(bottom, top)| FeatureSpec::ladder(bottom, top))
            .chain(snakes.iter().map(|&(mouth, tail)| FeatureSpec::snake(mouth, tail)));

        let outcomes: Vec<PlacementOutcome> = specs
            .map(|spec| PlacementOutcome {
                spec,
                result: self.place(spec),
            })
            .collect();

        info!(
            placed = outcomes.iter().filter(|o| o.result.is_ok()).count(),
            attempted = outcomes.len(),
            "Manual board setup completed"
        );
        outcomes
    }

    /// Moves `player` forward by `roll`, following at most one ladder or snake.
    ///
    /// A roll past the winning square is rejected and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownPlayer`] if `player` has no seat.
    #[instrument(skip(self), fields(player = %player, roll))]
    pub fn move_player(&mut self, player: PlayerId, roll: u32) -> Result<MoveResult, MoveError> {
        let win_position = self.win_position;
        let from = self.position(player).ok_or(MoveError::UnknownPlayer {
            player,
            num_players: self.num_players(),
        })?;
        let target = from.saturating_add(roll);

        if target > win_position {
            debug!(from, target, "Move overshoots the board");
            return Ok(MoveResult::Rejected {
                from,
                target,
                reason: RejectReason::Overshoot,
            });
        }

        let (resolved, feature) = self.resolve(target);
        self.tracks[player.index()].push(roll, resolved);
        debug!(from, target, resolved, ?feature, "Move accepted");
        assert_invariants(self);

        Ok(MoveResult::Accepted(Step {
            from,
            target,
            resolved,
            feature,
        }))
    }

    /// Single lookup on the landing square; the result is never re-checked.
    fn resolve(&self, target: u32) -> (u32, Option<FeatureKind>) {
        if let Some(ladder) = self.ladders.get(&target) {
            (ladder.top, Some(FeatureKind::Ladder))
        } else if let Some(snake) = self.snakes.get(&target) {
            (snake.tail, Some(FeatureKind::Snake))
        } else {
            (target, None)
        }
    }

    /// True when `player` stands exactly on the winning square.
    pub fn check_victory(&self, player: PlayerId) -> bool {
        self.position(player) == Some(self.win_position)
    }

    /// Current position of `player`, or `None` for an unknown seat.
    pub fn position(&self, player: PlayerId) -> Option<u32> {
        self.track(player).map(PlayerTrack::position)
    }

    /// History of `player`, or `None` for an unknown seat.
    pub fn track(&self, player: PlayerId) -> Option<&PlayerTrack> {
        self.tracks.get(player.index())
    }

    /// Number of seats.
    pub fn num_players(&self) -> u32 {
        self.tracks.len() as u32
    }

    /// Every seated player in turn order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (1..=self.num_players()).filter_map(PlayerId::new)
    }

    /// The feature whose entry is `position`, if any.
    pub fn feature_at(&self, position: u32) -> Option<FeatureSpec> {
        self.ladders
            .get(&position)
            .map(|l| FeatureSpec::ladder(l.bottom, l.top))
            .or_else(|| {
                self.snakes
                    .get(&position)
                    .map(|s| FeatureSpec::snake(s.mouth, s.tail))
            })
    }
}
