//! Win condition checking
//!
//! A move wins when it completes a run of `win_length` stones on any axis
//! through the placed cell. Whether a longer run (overline) also wins is
//! decided by [`OverlinePolicy`].

use crate::board::{Axis, Board, Color, Pos};

use super::scan::{axis_run, count_in_direction};

/// How runs longer than the win length are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlinePolicy {
    /// A run of `win_length` or more wins
    #[default]
    Wins,
    /// Only a run of exactly `win_length` wins
    Excluded,
}

impl OverlinePolicy {
    #[inline]
    fn accepts(self, run: usize, win_length: usize) -> bool {
        match self {
            OverlinePolicy::Wins => run >= win_length,
            OverlinePolicy::Excluded => run == win_length,
        }
    }
}

/// Find the first axis through `pos` holding a winning run for `color`
fn winning_axis(
    board: &Board,
    pos: Pos,
    color: Color,
    win_length: usize,
    overline: OverlinePolicy,
) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|&axis| overline.accepts(axis_run(board, pos, color, axis), win_length))
}

/// Check if `color` at `pos` completes a winning run.
///
/// The stone at `pos` does not need to be on the board yet; the origin is
/// always counted as `color`.
#[inline]
pub fn is_winning_move(
    board: &Board,
    pos: Pos,
    color: Color,
    win_length: usize,
    overline: OverlinePolicy,
) -> bool {
    winning_axis(board, pos, color, win_length, overline).is_some()
}

/// Cells of the winning run through `pos`, ordered end to end.
///
/// Returns `None` if the move does not win.
pub fn winning_line(
    board: &Board,
    pos: Pos,
    color: Color,
    win_length: usize,
    overline: OverlinePolicy,
) -> Option<Vec<Pos>> {
    let axis = winning_axis(board, pos, color, win_length, overline)?;
    let (back, forward) = axis.directions();

    // Walk to the far end in `back`, then collect forward from there
    let tail = count_in_direction(board, pos, color, back) - 1;
    let start = board.step(pos, back, tail)?;
    let len = axis_run(board, pos, color, axis);
    (0..len).map(|i| board.step(start, forward, i)).collect()
}
