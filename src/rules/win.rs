//! Win and draw evaluation
//!
//! A game is won by four same-color tokens consecutive along a row, a
//! column, or either diagonal. A full board with no such run is a draw.

use crate::board::{Board, Pos, Token, COLS, ROWS};

/// Direction vectors for run scanning (4 axis families)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Run length required to win
pub const RUN_LEN: usize = 4;

/// Outcome of evaluating a position after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Token),
    Draw,
}

/// Find a winning run for the given color, if one exists.
///
/// Enumerates every length-4 window that fits within the grid along the
/// four directions and returns the first window fully owned by `token`.
pub fn winning_run(board: &Board, token: Token) -> Option<[Pos; 4]> {
    if token == Token::Empty {
        return None;
    }

    for row in 0..ROWS as i32 {
        for col in 0..COLS as i32 {
            'dir: for &(dr, dc) in &DIRECTIONS {
                // The whole window must fit before any cell is read
                if !Pos::is_valid(row + dr * (RUN_LEN as i32 - 1), col + dc * (RUN_LEN as i32 - 1)) {
                    continue;
                }

                let mut run = [Pos::new(0, 0); RUN_LEN];
                for (i, slot) in run.iter_mut().enumerate() {
                    let p = Pos::new((row + dr * i as i32) as u8, (col + dc * i as i32) as u8);
                    if board.get(p) != token {
                        continue 'dir;
                    }
                    *slot = p;
                }
                return Some(run);
            }
        }
    }
    None
}

/// True when the given color has four in a row anywhere on the board.
pub fn check_winner(board: &Board, token: Token) -> bool {
    winning_run(board, token).is_some()
}

/// Evaluate the position after `mover` placed a token.
///
/// Only the mover's runs are scanned; a move can only complete a run for
/// the player who made it.
pub fn evaluate(board: &Board, mover: Token) -> Outcome {
    if check_winner(board, mover) {
        Outcome::Win(mover)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
