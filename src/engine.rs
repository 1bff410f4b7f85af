//! BoardEngine: the game state machine
//!
//! Owns the board, the move record, the turn, termination state and the
//! forbidden set for Black. Every mutation goes through the operations
//! here; the UI only ever sees read-only accessors. All operations are
//! synchronous and report rejections through [`MoveError`] rather than
//! panicking — a misclick is an expected event, not a bug.

use thiserror::Error;
use tracing::{debug, instrument};

use crate::board::{Board, Pos, Stone};
use crate::history::{HistoryError, PlayerInfo, SavedGame};
use crate::rules;

/// Why a move request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game has not started or is already over
    #[error("the game is not in progress")]
    GameNotLive,
    /// Coordinates outside the board
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    /// The target cell already holds a stone
    #[error("the cell is already occupied")]
    Occupied,
    /// Black tried to play into a forbidden cell; the UI reports this one
    /// specially instead of ignoring it
    #[error("forbidden move for Black")]
    Forbidden,
    /// Undo with an empty move record
    #[error("there is no move to undo")]
    NothingToUndo,
    /// Undo after the game ended by resignation
    #[error("a resigned game cannot be undone")]
    ResignedGame,
}

/// How a finished game ended.
///
/// Resignations are terminal for undo; a win or an abandonment can be
/// re-opened by undoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    FiveInRow,
    Resignation,
    Abandoned,
}

/// The Gomoku game engine
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEngine {
    board: Board,
    /// Ordered record of placed stones; index defines the move number
    moves: Vec<Pos>,
    current: Stone,
    started: bool,
    over: bool,
    /// `Stone::Empty` while the game is live or ended without a winner
    winner: Stone,
    end: Option<EndCause>,
    /// Cells Black may not play into; empty unless it is Black's turn in a
    /// live game with Renju rules on
    forbidden: Vec<Pos>,
    winning_line: Option<[Pos; 5]>,
    renju: bool,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardEngine {
    /// New engine with Renju rules on, game not yet started
    pub fn new() -> Self {
        Self::with_rules(true)
    }

    /// New engine with an explicit Renju-rules setting
    pub fn with_rules(renju: bool) -> Self {
        Self {
            board: Board::new(),
            moves: Vec::new(),
            current: Stone::Black,
            started: false,
            over: false,
            winner: Stone::Empty,
            end: None,
            forbidden: Vec::new(),
            winning_line: None,
            renju,
        }
    }

    /// Clear everything back to an empty board, Black to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, start_immediately: bool) {
        self.board = Board::new();
        self.moves.clear();
        self.current = Stone::Black;
        self.started = start_immediately;
        self.over = false;
        self.winner = Stone::Empty;
        self.end = None;
        self.winning_line = None;
        self.refresh_forbidden();
    }

    /// Begin play on the current (empty or prepared) board
    pub fn start(&mut self) {
        self.started = true;
        self.refresh_forbidden();
    }

    /// Attempt to place a stone for the current player.
    ///
    /// Preconditions are checked in order: the game must be live, the
    /// coordinates on the board, the cell empty, and — for Black under
    /// Renju rules — not forbidden. On acceptance the stone is written,
    /// the move recorded, and either the game ends (winning move; the turn
    /// does not flip) or the turn passes to the opponent and the forbidden
    /// set is refreshed.
    #[instrument(skip(self))]
    pub fn place_stone(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        if !self.started || self.over {
            return Err(MoveError::GameNotLive);
        }
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied);
        }
        if self.renju && self.current == Stone::Black && self.forbidden.contains(&pos) {
            return Err(MoveError::Forbidden);
        }

        let mover = self.current;
        self.board.place_stone(pos, mover);
        self.moves.push(pos);

        if let Some(line) = rules::winning_line(&self.board, pos, mover, self.renju) {
            self.over = true;
            self.winner = mover;
            self.end = Some(EndCause::FiveInRow);
            self.winning_line = Some(line);
            self.forbidden.clear();
            debug!(?mover, move_count = self.moves.len(), "winning move");
        } else {
            self.current = mover.opponent();
            self.refresh_forbidden();
        }
        Ok(())
    }

    /// Undo the last move.
    ///
    /// Refused when nothing has been played or when the game ended by
    /// resignation. Undoing a winning (or abandoned) termination re-opens
    /// the game; the turn goes back to the player whose stone was removed.
    #[instrument(skip(self))]
    pub fn undo_move(&mut self) -> Result<(), MoveError> {
        if self.over && self.end == Some(EndCause::Resignation) {
            return Err(MoveError::ResignedGame);
        }
        let pos = self.moves.pop().ok_or(MoveError::NothingToUndo)?;

        let mover = self.board.get(pos);
        debug_assert_ne!(mover, Stone::Empty);
        self.board.remove_stone(pos);
        // Hand the turn back to the mover. For ordinary moves this is the
        // same as flipping; for an undone winning move the turn never
        // flipped forward, so flipping here would be wrong.
        self.current = mover;

        if self.over {
            self.over = false;
            self.winner = Stone::Empty;
            self.end = None;
            self.winning_line = None;
        }
        self.refresh_forbidden();
        Ok(())
    }

    /// Current player resigns; the opponent wins.
    ///
    /// The board and the turn are left untouched, and the resignation can
    /// never be undone.
    #[instrument(skip(self))]
    pub fn surrender(&mut self) -> Result<(), MoveError> {
        if !self.started || self.over {
            return Err(MoveError::GameNotLive);
        }
        self.over = true;
        self.winner = self.current.opponent();
        self.end = Some(EndCause::Resignation);
        self.forbidden.clear();
        debug!(winner = ?self.winner, "game resigned");
        Ok(())
    }

    /// End the game without a winner (the "end game" flow).
    ///
    /// Unlike a resignation this may be undone, which re-opens the game.
    #[instrument(skip(self))]
    pub fn abandon(&mut self) -> Result<(), MoveError> {
        if !self.started || self.over {
            return Err(MoveError::GameNotLive);
        }
        self.over = true;
        self.winner = Stone::Empty;
        self.end = Some(EndCause::Abandoned);
        self.forbidden.clear();
        Ok(())
    }

    // ---- read-only accessors for rendering ----

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Stone {
        self.current
    }

    pub fn game_started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.over
    }

    /// The winner, if the game ended with one
    pub fn winner(&self) -> Option<Stone> {
        match self.winner {
            Stone::Empty => None,
            stone => Some(stone),
        }
    }

    pub fn end_cause(&self) -> Option<EndCause> {
        self.end
    }

    pub fn moves(&self) -> &[Pos] {
        &self.moves
    }

    /// 1-based move number of the stone at `pos`, if it was played normally
    pub fn move_number_at(&self, pos: Pos) -> Option<usize> {
        self.moves.iter().position(|&p| p == pos).map(|i| i + 1)
    }

    pub fn forbidden(&self) -> &[Pos] {
        &self.forbidden
    }

    pub fn is_forbidden(&self, pos: Pos) -> bool {
        self.forbidden.contains(&pos)
    }

    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.winning_line
    }

    pub fn renju_enabled(&self) -> bool {
        self.renju
    }

    // ---- persistence boundary ----

    /// Capture the full game state as a save-file record.
    ///
    /// The timestamp is left empty; the history manager stamps it on save.
    pub fn snapshot(&self, style_index: usize, player_info: PlayerInfo) -> SavedGame {
        SavedGame {
            board_data: self.board.rows(),
            current_player: self.current.to_code(),
            game_started: self.started,
            game_over: self.over,
            move_history: self.moves.iter().map(|p| [p.row, p.col]).collect(),
            winner: self.winner.to_code(),
            timestamp: String::new(),
            style_index,
            player_info,
        }
    }

    /// Restore the engine from a validated record.
    ///
    /// Fields are assigned directly rather than replaying the move list.
    /// The record does not carry the end cause, so it is inferred: a winner
    /// with a five-in-a-row on the board ended by the winning move, a
    /// winner without one resigned the opponent out, and a finished game
    /// with no winner was abandoned. The forbidden set is recomputed
    /// immediately so a loaded position never shows stale markers.
    #[instrument(skip(self, record))]
    pub fn restore(&mut self, record: &SavedGame) -> Result<(), HistoryError> {
        record.validate()?;
        let board = Board::from_rows(&record.board_data).ok_or_else(|| {
            HistoryError::InvalidRecord("board grid could not be decoded".to_string())
        })?;

        self.board = board;
        self.current = match record.current_player {
            1 => Stone::Black,
            _ => Stone::White,
        };
        self.moves = record
            .move_history
            .iter()
            .map(|&[row, col]| Pos::new(row, col))
            .collect();
        self.started = record.game_started;
        self.over = record.game_over;
        self.winner = if record.game_over {
            Stone::from_code(record.winner).unwrap_or(Stone::Empty)
        } else {
            Stone::Empty
        };

        self.winning_line = None;
        self.end = if self.over {
            match self.winner {
                Stone::Empty => Some(EndCause::Abandoned),
                winner => match rules::find_five_anywhere(&self.board, winner, self.renju) {
                    Some(line) => {
                        self.winning_line = Some(line);
                        Some(EndCause::FiveInRow)
                    }
                    None => Some(EndCause::Resignation),
                },
            }
        } else {
            None
        };

        self.refresh_forbidden();
        debug!(moves = self.moves.len(), over = self.over, "game restored");
        Ok(())
    }

    /// Recompute or clear the forbidden set for the current state
    fn refresh_forbidden(&mut self) {
        if self.renju && self.started && !self.over && self.current == Stone::Black {
            self.forbidden = rules::forbidden_positions(&self.board);
        } else {
            self.forbidden.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_engine() -> BoardEngine {
        let mut engine = BoardEngine::new();
        engine.reset(true);
        engine
    }

    /// Play out `(row, col)` pairs, asserting each placement is accepted
    fn play(engine: &mut BoardEngine, moves: &[(i32, i32)]) {
        for &(row, col) in moves {
            engine
                .place_stone(row, col)
                .unwrap_or_else(|e| panic!("move ({row}, {col}) rejected: {e}"));
        }
    }

    #[test]
    fn test_new_game_is_not_started() {
        let engine = BoardEngine::new();
        assert!(!engine.game_started());
        assert!(!engine.game_over());
        assert_eq!(engine.current_player(), Stone::Black);
        assert!(engine.moves().is_empty());
    }

    #[test]
    fn test_place_before_start_rejected() {
        let mut engine = BoardEngine::new();
        assert_eq!(engine.place_stone(7, 7), Err(MoveError::GameNotLive));
        engine.start();
        assert!(engine.place_stone(7, 7).is_ok());
    }

    #[test]
    fn test_three_move_scenario() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8), (8, 7)]);

        assert_eq!(engine.current_player(), Stone::White);
        assert_eq!(engine.moves().len(), 3);
        assert!(!engine.game_over());
        assert_eq!(engine.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(engine.board().get(Pos::new(7, 8)), Stone::White);
        assert_eq!(engine.board().get(Pos::new(8, 7)), Stone::Black);
    }

    #[test]
    fn test_turn_alternation() {
        let mut engine = live_engine();
        let moves = [(0, 0), (1, 0), (0, 2), (1, 2), (0, 4), (1, 4), (0, 6)];
        for (i, &(row, col)) in moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Stone::Black } else { Stone::White };
            assert_eq!(engine.current_player(), expected, "before move {i}");
            engine.place_stone(row, col).unwrap();
        }
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = live_engine();
        assert_eq!(
            engine.place_stone(-1, 0),
            Err(MoveError::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(
            engine.place_stone(7, 15),
            Err(MoveError::OutOfBounds { row: 7, col: 15 })
        );
        assert!(engine.moves().is_empty());
        assert_eq!(engine.current_player(), Stone::Black);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7)]);
        let before = engine.clone();
        assert_eq!(engine.place_stone(7, 7), Err(MoveError::Occupied));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_black_five_in_row_wins() {
        let mut engine = live_engine();
        play(
            &mut engine,
            &[
                (0, 0),
                (5, 5),
                (0, 1),
                (5, 6),
                (0, 2),
                (5, 7),
                (0, 3),
                (12, 0),
                (0, 4),
            ],
        );

        assert!(engine.game_over());
        assert_eq!(engine.winner(), Some(Stone::Black));
        assert_eq!(engine.end_cause(), Some(EndCause::FiveInRow));
        // The winning move does not flip the turn
        assert_eq!(engine.current_player(), Stone::Black);
        let line = engine.winning_line().unwrap();
        let expected: Vec<Pos> = (0..5).map(|c| Pos::new(0, c)).collect();
        assert_eq!(line.to_vec(), expected);
    }

    #[test]
    fn test_four_in_row_is_not_over() {
        let mut engine = live_engine();
        play(&mut engine, &[(0, 0), (5, 5), (0, 1), (5, 6), (0, 2), (5, 7), (0, 3)]);
        assert!(!engine.game_over());
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_no_placement_after_game_over() {
        let mut engine = live_engine();
        play(
            &mut engine,
            &[
                (0, 0),
                (5, 5),
                (0, 1),
                (5, 6),
                (0, 2),
                (5, 7),
                (0, 3),
                (12, 0),
                (0, 4),
            ],
        );
        assert!(engine.game_over());
        assert_eq!(engine.place_stone(10, 10), Err(MoveError::GameNotLive));
    }

    #[test]
    fn test_undo_roundtrip() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8)]);

        let before = engine.clone();
        play(&mut engine, &[(8, 7)]);
        engine.undo_move().unwrap();

        assert_eq!(engine, before);
    }

    #[test]
    fn test_undo_empty_record_rejected() {
        let mut engine = live_engine();
        assert_eq!(engine.undo_move(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn test_undo_winning_move_reopens_game() {
        let mut engine = live_engine();
        play(
            &mut engine,
            &[
                (0, 0),
                (5, 5),
                (0, 1),
                (5, 6),
                (0, 2),
                (5, 7),
                (0, 3),
                (12, 0),
                (0, 4),
            ],
        );
        assert!(engine.game_over());

        engine.undo_move().unwrap();
        assert!(!engine.game_over());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.end_cause(), None);
        assert!(engine.winning_line().is_none());
        // The winner's stone came off, so it is their turn again
        assert_eq!(engine.current_player(), Stone::Black);
        assert_eq!(engine.board().get(Pos::new(0, 4)), Stone::Empty);

        // The game can continue
        assert!(engine.place_stone(0, 4).is_ok());
        assert!(engine.game_over());
    }

    #[test]
    fn test_surrender() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8), (8, 8)]);
        assert_eq!(engine.current_player(), Stone::White);

        engine.surrender().unwrap();
        assert!(engine.game_over());
        assert_eq!(engine.winner(), Some(Stone::Black));
        assert_eq!(engine.end_cause(), Some(EndCause::Resignation));
        // Current player and board untouched
        assert_eq!(engine.current_player(), Stone::White);
        assert_eq!(engine.moves().len(), 3);
    }

    #[test]
    fn test_undo_after_surrender_rejected() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8)]);
        engine.surrender().unwrap();

        let before = engine.clone();
        assert_eq!(engine.undo_move(), Err(MoveError::ResignedGame));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_surrender_requires_live_game() {
        let mut engine = BoardEngine::new();
        assert_eq!(engine.surrender(), Err(MoveError::GameNotLive));
        engine.reset(true);
        engine.surrender().unwrap();
        assert_eq!(engine.surrender(), Err(MoveError::GameNotLive));
    }

    #[test]
    fn test_abandon_and_resume_by_undo() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8)]);
        engine.abandon().unwrap();
        assert!(engine.game_over());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.end_cause(), Some(EndCause::Abandoned));

        // Abandonment is not a resignation; undo re-opens the game
        engine.undo_move().unwrap();
        assert!(!engine.game_over());
        assert_eq!(engine.current_player(), Stone::White);
        assert_eq!(engine.moves().len(), 1);
    }

    #[test]
    fn test_forbidden_double_three_rejected() {
        let mut engine = live_engine();
        // Black builds two open threes meeting at (7,7); White plays far away
        play(
            &mut engine,
            &[
                (7, 5),
                (0, 0),
                (7, 6),
                (0, 2),
                (5, 7),
                (0, 4),
                (6, 7),
                (0, 6),
            ],
        );

        assert_eq!(engine.current_player(), Stone::Black);
        assert!(engine.is_forbidden(Pos::new(7, 7)));
        let before = engine.clone();
        assert_eq!(engine.place_stone(7, 7), Err(MoveError::Forbidden));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_white_exempt_from_forbidden_shapes() {
        let mut engine = live_engine();
        // White builds the same cross shape; Black plays scattered stones
        play(
            &mut engine,
            &[
                (0, 0),
                (7, 5),
                (0, 2),
                (7, 6),
                (0, 4),
                (5, 7),
                (0, 6),
                (6, 7),
                (0, 8),
            ],
        );

        assert_eq!(engine.current_player(), Stone::White);
        // White's turn: the forbidden set is always empty
        assert!(engine.forbidden().is_empty());
        assert!(engine.place_stone(7, 7).is_ok());
    }

    #[test]
    fn test_forbidden_overline_rejected() {
        let mut engine = live_engine();
        // Black: cols 2..=5 and 7 on row 0; White: scattered on row 12
        play(
            &mut engine,
            &[
                (0, 2),
                (12, 0),
                (0, 3),
                (12, 2),
                (0, 4),
                (12, 4),
                (0, 5),
                (12, 6),
                (0, 7),
                (12, 8),
            ],
        );

        assert_eq!(engine.current_player(), Stone::Black);
        assert!(engine.is_forbidden(Pos::new(0, 6)));
        assert_eq!(engine.place_stone(0, 6), Err(MoveError::Forbidden));
        // Completing exactly five on the other side is still legal and wins
        assert!(engine.place_stone(0, 1).is_ok());
        assert!(engine.game_over());
        assert_eq!(engine.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_white_overline_wins() {
        let mut engine = live_engine();
        play(
            &mut engine,
            &[
                (5, 0),
                (0, 2),
                (5, 2),
                (0, 3),
                (5, 4),
                (0, 4),
                (5, 6),
                (0, 5),
                (5, 8),
                (0, 7),
                (5, 10),
                (0, 6),
            ],
        );

        assert!(engine.game_over());
        assert_eq!(engine.winner(), Some(Stone::White));
        assert_eq!(engine.end_cause(), Some(EndCause::FiveInRow));
    }

    #[test]
    fn test_forbidden_set_empty_on_white_turn_and_after_win() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7)]);
        assert_eq!(engine.current_player(), Stone::White);
        assert!(engine.forbidden().is_empty());

        play(
            &mut engine,
            &[(5, 5), (0, 0), (5, 6), (0, 1), (5, 7), (0, 2), (5, 8), (0, 3), (5, 9)],
        );
        // White completed five on row 5; the forbidden set stays empty
        assert!(engine.game_over());
        assert_eq!(engine.winner(), Some(Stone::White));
        assert!(engine.forbidden().is_empty());
    }

    #[test]
    fn test_forbidden_without_renju_rules() {
        let mut engine = BoardEngine::with_rules(false);
        engine.reset(true);
        play(
            &mut engine,
            &[
                (7, 5),
                (0, 0),
                (7, 6),
                (0, 2),
                (5, 7),
                (0, 4),
                (6, 7),
                (0, 6),
            ],
        );
        // Same double-three shape, but nothing is forbidden
        assert!(engine.forbidden().is_empty());
        assert!(engine.place_stone(7, 7).is_ok());
    }

    #[test]
    fn test_black_overline_wins_without_renju_rules() {
        let mut engine = BoardEngine::with_rules(false);
        engine.reset(true);
        play(
            &mut engine,
            &[
                (0, 2),
                (12, 0),
                (0, 3),
                (12, 2),
                (0, 4),
                (12, 4),
                (0, 5),
                (12, 6),
                (0, 7),
                (12, 8),
                (0, 6),
            ],
        );
        assert!(engine.game_over());
        assert_eq!(engine.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8)]);
        engine.surrender().unwrap();

        engine.reset(false);
        assert!(!engine.game_started());
        assert!(!engine.game_over());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.end_cause(), None);
        assert!(engine.moves().is_empty());
        assert!(engine.board().is_board_empty());
        assert_eq!(engine.current_player(), Stone::Black);

        engine.reset(true);
        assert!(engine.game_started());
    }

    #[test]
    fn test_move_numbers() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8), (8, 7)]);
        assert_eq!(engine.move_number_at(Pos::new(7, 7)), Some(1));
        assert_eq!(engine.move_number_at(Pos::new(7, 8)), Some(2));
        assert_eq!(engine.move_number_at(Pos::new(8, 7)), Some(3));
        assert_eq!(engine.move_number_at(Pos::new(0, 0)), None);
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8), (8, 7)]);

        let record = engine.snapshot(2, PlayerInfo::default());
        assert_eq!(record.current_player, 2);
        assert_eq!(record.move_history, vec![[7, 7], [7, 8], [8, 7]]);
        assert_eq!(record.style_index, 2);

        let mut restored = BoardEngine::new();
        restored.restore(&record).unwrap();
        assert_eq!(restored, engine);
    }

    #[test]
    fn test_restore_infers_resignation() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8)]);
        engine.surrender().unwrap();

        let record = engine.snapshot(0, PlayerInfo::default());
        let mut restored = BoardEngine::new();
        restored.restore(&record).unwrap();

        assert_eq!(restored.end_cause(), Some(EndCause::Resignation));
        assert_eq!(restored.undo_move(), Err(MoveError::ResignedGame));
    }

    #[test]
    fn test_restore_infers_win_by_five() {
        let mut engine = live_engine();
        play(
            &mut engine,
            &[
                (0, 0),
                (5, 5),
                (0, 1),
                (5, 6),
                (0, 2),
                (5, 7),
                (0, 3),
                (12, 0),
                (0, 4),
            ],
        );

        let record = engine.snapshot(0, PlayerInfo::default());
        let mut restored = BoardEngine::new();
        restored.restore(&record).unwrap();

        assert_eq!(restored.end_cause(), Some(EndCause::FiveInRow));
        assert!(restored.winning_line().is_some());
        // A restored win can still be undone and replayed
        restored.undo_move().unwrap();
        assert!(!restored.game_over());
    }

    #[test]
    fn test_restore_recomputes_forbidden_set() {
        let mut engine = live_engine();
        play(
            &mut engine,
            &[
                (7, 5),
                (0, 0),
                (7, 6),
                (0, 2),
                (5, 7),
                (0, 4),
                (6, 7),
                (0, 6),
            ],
        );
        assert!(engine.is_forbidden(Pos::new(7, 7)));

        let record = engine.snapshot(0, PlayerInfo::default());
        let mut restored = BoardEngine::new();
        restored.restore(&record).unwrap();

        // Loaded positions must not present stale markers: the set is
        // recomputed, not read from the file
        assert!(restored.is_forbidden(Pos::new(7, 7)));
        assert_eq!(restored.place_stone(7, 7), Err(MoveError::Forbidden));
    }

    #[test]
    fn test_restore_rejects_invalid_record() {
        let mut record = live_engine().snapshot(0, PlayerInfo::default());
        record.current_player = 9;

        let mut engine = live_engine();
        play(&mut engine, &[(7, 7)]);
        let before = engine.clone();
        assert!(engine.restore(&record).is_err());
        // A partially-valid record never mutates the engine
        assert_eq!(engine, before);
    }

    #[test]
    fn test_occupancy_only_changes_through_api() {
        let mut engine = live_engine();
        play(&mut engine, &[(7, 7), (7, 8), (8, 7)]);

        let occupied = [Pos::new(7, 7), Pos::new(7, 8), Pos::new(8, 7)];
        for pos in occupied {
            assert_ne!(engine.board().get(pos), Stone::Empty);
        }

        engine.undo_move().unwrap();
        assert_eq!(engine.board().get(Pos::new(8, 7)), Stone::Empty);
        assert_ne!(engine.board().get(Pos::new(7, 7)), Stone::Empty);

        engine.reset(true);
        assert!(engine.board().is_board_empty());
    }
}
