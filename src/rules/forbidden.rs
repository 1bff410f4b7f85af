//! Forbidden-move detection for Black (Renju rules)
//!
//! Black may not play a move that creates:
//! - an overline (more than 5 contiguous black stones through the move),
//! - a double-three (open threes in two or more directions), or
//! - a double-four (open fours in two or more directions).
//!
//! Detection works on an 11-cell window per axis direction, centered on the
//! candidate cell with 5 cells to each side. The candidate itself counts as
//! a black stone; the board is never mutated. Open threes and fours are
//! recognized by matching a literal table of canonical patterns against the
//! window.
//!
//! White is exempt from all of these restrictions.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

use super::win::DIRECTIONS;

/// Window length: the candidate cell plus 5 cells per side
const WINDOW: usize = 11;
/// Index of the candidate cell within the window
const CENTER: usize = 5;

// Window byte codes. Cell codes mirror the save-file encoding
// (0=empty, 1=black, 2=white); `x` marks cells beyond the board edge.
const EMPTY: u8 = b'0';
const BLACK: u8 = b'1';
const EDGE: u8 = b'x';

/// Open-three patterns: three black stones (possibly with one gap) that can
/// grow into an open four, with enough empty space around them.
const OPEN_THREE_PATTERNS: [&[u8]; 3] = [
    b"00011100", // _ BBB _
    b"00101100", // _ B.BB _
    b"00110100", // _ BB.B _
];

/// Open-four patterns: four black stones one move away from five, with an
/// open end (or an internal gap) left to complete it.
const OPEN_FOUR_PATTERNS: [&[u8]; 5] = [
    b"0011110", // _ BBBB
    b"0111100", // BBBB _
    b"0101110", // B.BBB
    b"0110110", // BB.BB
    b"0111010", // BBB.B
];

/// Build the 11-cell window through `pos` along `(dr, dc)`.
///
/// The center cell is reported as black regardless of the board contents;
/// callers only pass empty candidate cells.
fn line_window(board: &Board, pos: Pos, dr: i32, dc: i32) -> [u8; WINDOW] {
    let mut window = [EDGE; WINDOW];
    for (i, step) in (-(CENTER as i32)..=CENTER as i32).enumerate() {
        if step == 0 {
            window[i] = BLACK;
            continue;
        }
        let r = pos.row as i32 + dr * step;
        let c = pos.col as i32 + dc * step;
        if Pos::is_valid(r, c) {
            window[i] = match board.get(Pos::new(r as u8, c as u8)) {
                Stone::Empty => EMPTY,
                stone => stone.to_code() + b'0',
            };
        }
    }
    window
}

/// Check whether any pattern occurs as a contiguous slice of the window
fn matches_any(window: &[u8; WINDOW], patterns: &[&[u8]]) -> bool {
    patterns
        .iter()
        .any(|pat| window.windows(pat.len()).any(|w| w == *pat))
}

/// Length of the contiguous black run through the window center
fn run_through_center(window: &[u8; WINDOW]) -> usize {
    let mut len = 1;
    let mut i = CENTER;
    while i > 0 && window[i - 1] == BLACK {
        len += 1;
        i -= 1;
    }
    let mut i = CENTER;
    while i + 1 < WINDOW && window[i + 1] == BLACK {
        len += 1;
        i += 1;
    }
    len
}

/// Check whether placing a black stone at `pos` is forbidden.
///
/// `pos` must be an empty cell. The check scans all four axis directions,
/// counting directions that produce an open three or an open four; two or
/// more of either kind, or any overline, makes the move forbidden.
pub fn is_forbidden_move(board: &Board, pos: Pos) -> bool {
    debug_assert!(board.is_empty(pos));

    let mut open_threes = 0u8;
    let mut open_fours = 0u8;

    for &(dr, dc) in &DIRECTIONS {
        let window = line_window(board, pos, dr, dc);

        if run_through_center(&window) > 5 {
            return true;
        }
        if matches_any(&window, &OPEN_THREE_PATTERNS) {
            open_threes += 1;
            if open_threes >= 2 {
                return true;
            }
        }
        if matches_any(&window, &OPEN_FOUR_PATTERNS) {
            open_fours += 1;
            if open_fours >= 2 {
                return true;
            }
        }
    }

    false
}

/// Scan every empty cell and collect the positions Black may not play.
///
/// A full rescan is O(N^2) windows, which is fine at interactive scale on a
/// 15x15 board; BoardEngine runs it whenever the turn passes to Black.
pub fn forbidden_positions(board: &Board) -> Vec<Pos> {
    let mut forbidden = Vec::new();
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            if board.is_empty(pos) && is_forbidden_move(board, pos) {
                forbidden.push(pos);
            }
        }
    }
    forbidden
}
