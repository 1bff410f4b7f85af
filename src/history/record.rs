//! The on-disk game record
//!
//! One JSON file per saved game. Field names and encodings are the wire
//! format consumed by the history browser: cells and players use
//! 0=empty/none, 1=black, 2=white; the move history is an ordered list of
//! `[row, col]` pairs.

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

use super::HistoryError;

/// Display names for the two seats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub player1: String,
    pub player2: String,
}

impl Default for PlayerInfo {
    fn default() -> Self {
        Self {
            player1: "Player".to_string(),
            player2: "AI".to_string(),
        }
    }
}

/// A complete saved game.
///
/// `board_data` and `current_player` are required; every other field falls
/// back to a default so that externally produced records with the minimum
/// fields can still be imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board_data: Vec<Vec<u8>>,
    pub current_player: u8,
    #[serde(default)]
    pub game_started: bool,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub move_history: Vec<[u8; 2]>,
    #[serde(default)]
    pub winner: u8,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub style_index: usize,
    #[serde(default)]
    pub player_info: PlayerInfo,
}

impl SavedGame {
    /// Check internal consistency before any engine state is touched.
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.board_data.len() != BOARD_SIZE
            || self.board_data.iter().any(|row| row.len() != BOARD_SIZE)
        {
            return Err(HistoryError::InvalidRecord(format!(
                "board grid must be {size}x{size}",
                size = BOARD_SIZE
            )));
        }
        if self.board_data.iter().flatten().any(|&cell| cell > 2) {
            return Err(HistoryError::InvalidRecord(
                "board cells must be 0, 1 or 2".to_string(),
            ));
        }
        if self.current_player != 1 && self.current_player != 2 {
            return Err(HistoryError::InvalidRecord(format!(
                "current_player must be 1 or 2, got {}",
                self.current_player
            )));
        }
        if self.winner > 2 {
            return Err(HistoryError::InvalidRecord(format!(
                "winner must be 0, 1 or 2, got {}",
                self.winner
            )));
        }
        for &[row, col] in &self.move_history {
            if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
                return Err(HistoryError::InvalidRecord(format!(
                    "move ({row}, {col}) is off the board"
                )));
            }
            if self.board_data[row as usize][col as usize] == 0 {
                return Err(HistoryError::InvalidRecord(format!(
                    "move ({row}, {col}) refers to an empty cell"
                )));
            }
        }
        Ok(())
    }

    /// Outcome label embedded in generated filenames
    pub fn outcome_label(&self) -> &'static str {
        match self.winner {
            1 => "黑胜",
            2 => "白胜",
            _ => "未结束",
        }
    }
}
