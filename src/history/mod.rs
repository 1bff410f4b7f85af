//! Match-history persistence
//!
//! Saved games live as pretty-printed JSON files in a history directory,
//! one file per game, named after the time of saving and the outcome.
//! The directory is the only state; listing re-reads the files, so records
//! dropped in from elsewhere show up on the next refresh.

pub mod record;

// Re-exports
pub use record::{PlayerInfo, SavedGame};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from loading or storing game records.
///
/// Unlike move rejections these are real failures: a malformed record must
/// never be allowed to half-populate an engine.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid game record: {0}")]
    InvalidRecord(String),

    #[error("no such history entry: {0}")]
    NotFound(PathBuf),
}

/// One row of the history browser
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub filename: String,
    pub path: PathBuf,
    pub timestamp: String,
    pub player1: String,
    pub player2: String,
    /// Display name of the winner, when the game finished with one
    pub winner: Option<String>,
    pub record: SavedGame,
}

/// Manages the history directory
pub struct HistoryManager {
    dir: PathBuf,
}

impl HistoryManager {
    /// Open (and create if needed) a history directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(err) = fs::create_dir_all(&dir) {
            warn!(?dir, %err, "could not create history directory");
        }
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Generated filename: saving time plus the match outcome
    pub fn default_filename(record: &SavedGame) -> String {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        format!("对战_{stamp}_{}.json", record.outcome_label())
    }

    /// Write a record into the history directory.
    ///
    /// Stamps the timestamp if the record does not carry one, and generates
    /// the outcome filename when none is given. Returns the written path.
    pub fn save(
        &self,
        record: &SavedGame,
        filename: Option<&str>,
    ) -> Result<PathBuf, HistoryError> {
        record.validate()?;

        let mut record = record.clone();
        if record.timestamp.is_empty() {
            record.timestamp = Local::now().to_rfc3339();
        }

        let filename = match filename {
            Some(name) => name.to_string(),
            None => Self::default_filename(&record),
        };
        let path = self.dir.join(filename);
        fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        debug!(?path, "game saved");
        Ok(path)
    }

    /// Read and validate a record from any path
    pub fn load(&self, path: &Path) -> Result<SavedGame, HistoryError> {
        let text = fs::read_to_string(path)?;
        let record: SavedGame =
            serde_json::from_str(&text).map_err(|source| HistoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        record.validate()?;
        Ok(record)
    }

    /// All readable records in the directory, newest first.
    ///
    /// Unreadable or invalid files are skipped with a warning rather than
    /// failing the whole listing.
    pub fn list(&self) -> Vec<HistoryEntry> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut list = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let record = match self.load(&path) {
                Ok(record) => record,
                Err(err) => {
                    warn!(?path, %err, "skipping unreadable history file");
                    continue;
                }
            };

            let winner = if record.game_over {
                match record.winner {
                    1 => Some(record.player_info.player1.clone()),
                    2 => Some(record.player_info.player2.clone()),
                    _ => None,
                }
            } else {
                None
            };

            list.push(HistoryEntry {
                filename: entry.file_name().to_string_lossy().into_owned(),
                path,
                timestamp: record.timestamp.clone(),
                player1: record.player_info.player1.clone(),
                player2: record.player_info.player2.clone(),
                winner,
                record,
            });
        }

        list.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        list
    }

    /// Delete a record by filename
    pub fn delete(&self, filename: &str) -> Result<(), HistoryError> {
        let path = self.dir.join(filename);
        if !path.exists() {
            return Err(HistoryError::NotFound(path));
        }
        fs::remove_file(&path)?;
        Ok(())
    }

    /// Copy an external record into the history directory.
    ///
    /// The file is validated first; missing optional fields are filled with
    /// defaults and the copy gets a freshly generated outcome filename.
    pub fn import(&self, source: &Path) -> Result<PathBuf, HistoryError> {
        let mut record = self.load(source)?;
        if record.timestamp.is_empty() {
            record.timestamp = Local::now().to_rfc3339();
        }
        let filename = Self::default_filename(&record);
        let path = self.dir.join(filename);
        fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        debug!(?source, ?path, "game imported");
        Ok(path)
    }
}
