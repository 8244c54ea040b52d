//! JSON file archive holding the last finished game.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use strictly_ladders::{GameArchive, GameRecord, PersistenceError};
use tracing::{debug, info, instrument};

/// Stores one [`GameRecord`] as pretty-printed JSON, overwriting on save.
#[derive(Debug, Clone)]
pub struct JsonArchive {
    path: PathBuf,
}

impl JsonArchive {
    /// Archive backed by the file at `path`. Nothing is touched until a save.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating JsonArchive");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            message: format!("{}: {}", self.path.display(), err),
        }
    }
}

impl GameArchive for JsonArchive {
    #[instrument(skip(self, record), fields(path = %self.path.display(), winner = ?record.winner()))]
    fn save(&mut self, record: &GameRecord) -> Result<(), PersistenceError> {
        debug!("Saving game record");
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(record).map_err(|e| PersistenceError::Io {
            message: format!("Failed to serialize game record: {}", e),
        })?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        info!("Game record saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<GameRecord, PersistenceError> {
        debug!("Loading game record");
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PersistenceError::NotFound {
                path: self.path.display().to_string(),
            },
            _ => self.io_error(e),
        })?;
        let record: GameRecord = serde_json::from_str(&content)
            .map_err(|e| PersistenceError::malformed(e.to_string()))?;
        record.check_consistency()?;
        info!(players = record.moves().len(), "Game record loaded");
        Ok(record)
    }
}
