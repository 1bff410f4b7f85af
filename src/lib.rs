//! Renju board game with persisted match history
//!
//! A desktop Gomoku (five-in-a-row) application on a 15x15 board with
//! Renju-style forbidden-move rules for Black:
//! - Black wins with exactly 5 in a row; overlines are forbidden moves
//! - Double-three and double-four are forbidden for Black
//! - White has no restrictions and wins with 5 or more
//! - Undo, resignation, and JSON match history with a browser UI
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection and forbidden-move rules
//! - [`engine`]: The game state machine driving everything
//! - [`history`]: Saved-game records and the history directory
//! - [`ui`]: egui application, board rendering, history browser
//!
//! # Quick Start
//!
//! ```
//! use renju::{BoardEngine, Stone};
//!
//! let mut engine = BoardEngine::new();
//! engine.reset(true);
//!
//! engine.place_stone(7, 7).unwrap();
//! assert_eq!(engine.current_player(), Stone::White);
//!
//! engine.undo_move().unwrap();
//! assert_eq!(engine.current_player(), Stone::Black);
//! ```
//!
//! The engine never panics on bad input: misclicks, occupied cells and
//! forbidden moves come back as [`engine::MoveError`] values for the UI to
//! present.

pub mod board;
pub mod engine;
pub mod history;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{BoardEngine, EndCause, MoveError};
pub use history::{HistoryManager, PlayerInfo, SavedGame};
