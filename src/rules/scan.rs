//! Directional run scanning
//!
//! Every rule in this crate reduces to two questions about a line through
//! a cell: how many stones of one color are lined up from it, and whether
//! the cell just past that run is free. The origin cell is always treated
//! as holding the scanned color, which lets the rules evaluate a stone
//! before it is committed to the board.

use crate::board::{Axis, Board, Color, Direction, Pos};

/// Count consecutive `color` stones starting at `pos` along `dir`.
///
/// The origin always counts as 1, whatever is stored there. The walk stops
/// at the board edge, an empty cell, or an opponent stone.
#[inline]
pub fn count_in_direction(board: &Board, pos: Pos, color: Color, dir: Direction) -> usize {
    let stone = color.stone();
    let mut count = 1;
    while let Some(next) = board.step(pos, dir, count) {
        if board.get(next) != stone {
            break;
        }
        count += 1;
    }
    count
}

/// Check whether the cell just past the run from `pos` along `dir` is empty.
///
/// Returns `false` when the run reaches the board edge or is capped by a
/// stone of either color.
#[inline]
pub fn is_open_end(board: &Board, pos: Pos, color: Color, dir: Direction) -> bool {
    let run = count_in_direction(board, pos, color, dir);
    board
        .step(pos, dir, run)
        .is_some_and(|end| board.is_empty(end))
}

/// Length of the run through `pos` along both directions of `axis`.
///
/// The origin is seen by both directional scans, so it is subtracted once.
#[inline]
pub fn axis_run(board: &Board, pos: Pos, color: Color, axis: Axis) -> usize {
    let (a, b) = axis.directions();
    count_in_direction(board, pos, color, a) + count_in_direction(board, pos, color, b) - 1
}

/// Both ends of the run through `pos` along `axis` are empty cells.
#[inline]
pub fn is_open_axis(board: &Board, pos: Pos, color: Color, axis: Axis) -> bool {
    let (a, b) = axis.directions();
    is_open_end(board, pos, color, a) && is_open_end(board, pos, color, b)
}
