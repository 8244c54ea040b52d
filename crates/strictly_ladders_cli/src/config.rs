//! Application configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_ladders::{
    ConfigurationError, DEFAULT_COLUMNS, DEFAULT_DICE_MAX, DEFAULT_DICE_MIN, DEFAULT_ROWS,
    GameConfig, MIN_PLAYERS, RandomRolls,
};
use tracing::{debug, info, instrument};

/// Where finished games are written unless configured otherwise.
pub const DEFAULT_DATA_FILE: &str = "data/last_game.json";

/// Settings for the console application.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Players seated when `play` runs without `--players`.
    #[serde(default = "default_players")]
    players: u32,

    /// Board rows for the quick-start game.
    #[serde(default = "default_rows")]
    rows: u32,

    /// Board columns for the quick-start game.
    #[serde(default = "default_columns")]
    columns: u32,

    /// Lowest dice face for the quick-start game.
    #[serde(default = "default_dice_min")]
    dice_min: u32,

    /// Highest dice face for the quick-start game.
    #[serde(default = "default_dice_max")]
    dice_max: u32,

    /// Fixed RNG seed, for reproducible games.
    #[serde(default)]
    seed: Option<u64>,

    /// JSON file holding the last finished game.
    #[serde(default = "default_data_file")]
    data_file: PathBuf,

    /// Custom ladders as `[bottom, top]` pairs, replacing the default layout.
    #[serde(default)]
    ladders: Vec<(u32, u32)>,

    /// Custom snakes as `[mouth, tail]` pairs, replacing the default layout.
    #[serde(default)]
    snakes: Vec<(u32, u32)>,
}

fn default_players() -> u32 {
    MIN_PLAYERS
}

fn default_rows() -> u32 {
    DEFAULT_ROWS
}

fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}

fn default_dice_min() -> u32 {
    DEFAULT_DICE_MIN
}

fn default_dice_max() -> u32 {
    DEFAULT_DICE_MAX
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            rows: default_rows(),
            columns: default_columns(),
            dice_min: default_dice_min(),
            dice_max: default_dice_max(),
            seed: None,
            data_file: default_data_file(),
            ladders: Vec::new(),
            snakes: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AppConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AppConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AppConfigError`] on invalid TOML or field types.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, AppConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AppConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            players = config.players,
            rows = config.rows,
            columns = config.columns,
            custom_layout = config.has_custom_layout(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppConfigError`] if the file exists but is invalid.
    #[instrument]
    pub fn load_or_default(path: &Path) -> Result<Self, AppConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Replaces the data file, as `--data-file` does.
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Replaces the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// True when the file lists its own ladders or snakes.
    pub fn has_custom_layout(&self) -> bool {
        !self.ladders.is_empty() || !self.snakes.is_empty()
    }

    /// Game setup for the quick-start game, seating `players` if given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if any value is out of range.
    pub fn game_config(&self, players: Option<u32>) -> Result<GameConfig, ConfigurationError> {
        GameConfig::new(
            players.unwrap_or(self.players),
            self.rows,
            self.columns,
            self.dice_min,
            self.dice_max,
        )
    }

    /// Dice source honouring the configured seed.
    pub fn roll_source(&self) -> RandomRolls {
        match self.seed {
            Some(seed) => RandomRolls::seeded(seed),
            None => RandomRolls::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct AppConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AppConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
