//! Game configuration and its validation.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::feature::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Smallest number of players a game accepts.
pub const MIN_PLAYERS: u32 = 2;
/// Largest number of players a game accepts.
pub const MAX_PLAYERS: u32 = 100;
/// Default lowest face of the dice.
pub const DEFAULT_DICE_MIN: u32 = 1;
/// Default highest face of the dice.
pub const DEFAULT_DICE_MAX: u32 = 6;

/// Invalid game setup input. Recoverable: callers re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigurationError {
    /// Fewer than [`MIN_PLAYERS`] players.
    #[display("You need at least {} players to play a game, got {}", MIN_PLAYERS, players)]
    TooFewPlayers {
        /// Requested player count.
        players: u32,
    },
    /// More than [`MAX_PLAYERS`] players.
    #[display("At most {} players can share a board, got {}", MAX_PLAYERS, players)]
    TooManyPlayers {
        /// Requested player count.
        players: u32,
    },
    /// A board dimension of zero.
    #[display("Board dimensions must be positive, got {}x{}", rows, columns)]
    NonPositiveDimension {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        columns: u32,
    },
    /// `rows * columns` does not fit a square number.
    #[display("A {}x{} board is too large", rows, columns)]
    BoardTooLarge {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        columns: u32,
    },
    /// Dice maximum not above its minimum.
    #[display("Maximum value should be greater than minimum value, got {}-{}", min, max)]
    InvalidDice {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },
    /// The fixed default layout needs at least 100 squares.
    #[display("The default layout needs at least 100 squares, the board has {}", win_position)]
    LayoutDoesNotFit {
        /// Squares on the requested board.
        win_position: u32,
    },
}

/// Everything needed to set up a game before the board is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players.
    players: u32,
    /// Board rows.
    rows: u32,
    /// Board columns.
    columns: u32,
    /// Lowest dice face.
    dice_min: u32,
    /// Highest dice face, which also grants a bonus roll.
    dice_max: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            dice_min: DEFAULT_DICE_MIN,
            dice_max: DEFAULT_DICE_MAX,
        }
    }
}

impl GameConfig {
    /// Builds and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    #[instrument]
    pub fn new(
        players: u32,
        rows: u32,
        columns: u32,
        dice_min: u32,
        dice_max: u32,
    ) -> Result<Self, ConfigurationError> {
        let config = Self {
            players,
            rows,
            columns,
            dice_min,
            dice_max,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default 10x10 board and 1-6 dice for `players` players.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::TooFewPlayers`] or
    /// [`ConfigurationError::TooManyPlayers`] outside the allowed seat range.
    pub fn with_players(players: u32) -> Result<Self, ConfigurationError> {
        let config = Self {
            players,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    #[instrument(skip(self), fields(players = self.players, rows = self.rows, columns = self.columns))]
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_players(self.players)?;
        win_position(self.rows, self.columns)?;
        validate_dice(self.dice_min, self.dice_max)?;
        debug!("Configuration valid");
        Ok(())
    }

    /// Last square of the configured board.
    pub fn win_position(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }
}

/// Rejects player counts outside `MIN_PLAYERS..=MAX_PLAYERS`.
///
/// # Errors
///
/// Returns [`ConfigurationError::TooFewPlayers`] or
/// [`ConfigurationError::TooManyPlayers`].
pub fn validate_players(players: u32) -> Result<(), ConfigurationError> {
    if players < MIN_PLAYERS {
        return Err(ConfigurationError::TooFewPlayers { players });
    }
    if players > MAX_PLAYERS {
        return Err(ConfigurationError::TooManyPlayers { players });
    }
    Ok(())
}

/// Computes `rows * columns`, rejecting zero and overflowing dimensions.
///
/// # Errors
///
/// Returns [`ConfigurationError::NonPositiveDimension`] or
/// [`ConfigurationError::BoardTooLarge`].
pub fn win_position(rows: u32, columns: u32) -> Result<u32, ConfigurationError> {
    if rows == 0 || columns == 0 {
        return Err(ConfigurationError::NonPositiveDimension { rows, columns });
    }
    rows.checked_mul(columns)
        .ok_or(ConfigurationError::BoardTooLarge { rows, columns })
}

/// Rejects a dice range whose maximum is not above its minimum.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidDice`].
pub fn validate_dice(min: u32, max: u32) -> Result<(), ConfigurationError> {
    if max <= min {
        return Err(ConfigurationError::InvalidDice { min, max });
    }
    Ok(())
}
