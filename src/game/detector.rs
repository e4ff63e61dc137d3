//! Four-in-a-row scanning.
//!
//! The passes run in a fixed order: vertical, horizontal, ascending diagonal,
//! descending diagonal, each column-major. When a board holds more than one
//! line, the first one met in that order decides the winner.

use super::{Board, PlayerId, COLS, ROWS};

/// Find the owner of the first four-in-a-row on the board.
pub fn find_four(board: &Board) -> Option<PlayerId> {
    vertical(board)
        .or_else(|| horizontal(board))
        .or_else(|| diagonal_up(board))
        .or_else(|| diagonal_down(board))
}

/// Owner of four cells if they are all taken by the same player
fn line_owner(board: &Board, cells: [(usize, usize); 4]) -> Option<PlayerId> {
    let (col, row) = cells[0];
    let owner = board.get(col, row).owner()?;
    cells[1..]
        .iter()
        .all(|&(c, r)| board.get(c, r).owner() == Some(owner))
        .then_some(owner)
}

fn vertical(board: &Board) -> Option<PlayerId> {
    for col in 0..COLS {
        for row in 0..ROWS - 3 {
            let line = [(col, row), (col, row + 1), (col, row + 2), (col, row + 3)];
            if let Some(owner) = line_owner(board, line) {
                return Some(owner);
            }
        }
    }
    None
}

fn horizontal(board: &Board) -> Option<PlayerId> {
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            let line = [(col, row), (col + 1, row), (col + 2, row), (col + 3, row)];
            if let Some(owner) = line_owner(board, line) {
                return Some(owner);
            }
        }
    }
    None
}

/// Bottom-left to top-right (/)
fn diagonal_up(board: &Board) -> Option<PlayerId> {
    for col in 0..COLS - 3 {
        for row in 0..ROWS - 3 {
            let line = [
                (col, row),
                (col + 1, row + 1),
                (col + 2, row + 2),
                (col + 3, row + 3),
            ];
            if let Some(owner) = line_owner(board, line) {
                return Some(owner);
            }
        }
    }
    None
}

/// Top-left to bottom-right (\)
fn diagonal_down(board: &Board) -> Option<PlayerId> {
    for col in 0..COLS - 3 {
        for row in 3..ROWS {
            let line = [
                (col, row),
                (col + 1, row - 1),
                (col + 2, row - 2),
                (col + 3, row - 3),
            ];
            if let Some(owner) = line_owner(board, line) {
                return Some(owner);
            }
        }
    }
    None
}
