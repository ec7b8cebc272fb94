//! Three-three and four-four forbidden move rules
//!
//! Both rules stop a single placement from creating more than one
//! simultaneous threat. They are evaluated on the empty cell a stone is
//! about to occupy; the board is never mutated.
//!
//! - Open three: an axis run of exactly `win_length - 1` with both ends open.
//! - Four: an axis run of exactly `win_length`, open or not.
//!
//! Runs longer than the trigger length are ignored by both rules.

use crate::board::{Axis, Board, Color, Pos};

use super::scan::{axis_run, is_open_axis};

/// Count axes on which placing `color` at `pos` makes an open three
pub fn count_open_threes(board: &Board, pos: Pos, color: Color, win_length: usize) -> usize {
    // A win length of 1 leaves no shorter run to threaten with
    let Some(target) = win_length.checked_sub(1).filter(|&t| t > 0) else {
        return 0;
    };
    Axis::ALL
        .iter()
        .filter(|&&axis| {
            axis_run(board, pos, color, axis) == target && is_open_axis(board, pos, color, axis)
        })
        .count()
}

/// Count axes on which placing `color` at `pos` makes a run of exactly `win_length`
pub fn count_fours(board: &Board, pos: Pos, color: Color, win_length: usize) -> usize {
    // With a win length of 1 the lone stone matches on every axis
    if win_length <= 1 {
        return 0;
    }
    Axis::ALL
        .iter()
        .filter(|&&axis| axis_run(board, pos, color, axis) == win_length)
        .count()
}

/// Check the three-three rule
///
/// # Returns
/// `true` if the move creates at most one open three, `false` if forbidden
pub fn is_three_three_legal(board: &Board, pos: Pos, color: Color, win_length: usize) -> bool {
    count_open_threes(board, pos, color, win_length) <= 1
}

/// Check the four-four rule
///
/// # Returns
/// `true` if the move creates at most one exact-length run, `false` if forbidden
pub fn is_four_four_legal(board: &Board, pos: Pos, color: Color, win_length: usize) -> bool {
    count_fours(board, pos, color, win_length) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, color: Color, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            board.place_stone(Pos::new(row, col), color);
        }
    }

    #[test]
    fn test_empty_board_is_legal() {
        let board = Board::new(19, 19);
        let pos = Pos::new(9, 9);
        assert!(is_three_three_legal(&board, pos, Color::Black, 5));
        assert!(is_four_four_legal(&board, pos, Color::Black, 5));
        assert_eq!(count_open_threes(&board, pos, Color::Black, 5), 0);
        assert_eq!(count_fours(&board, pos, Color::Black, 5), 0);
    }

    #[test]
    fn test_single_open_three_allowed() {
        let mut board = Board::new(19, 19);
        // row 9: _ B B B X _   (win_length 5, so the trigger is a run of 4)
        place_all(&mut board, Color::Black, &[(9, 6), (9, 7), (9, 8)]);
        let pos = Pos::new(9, 9);
        assert_eq!(count_open_threes(&board, pos, Color::Black, 5), 1);
        assert!(is_three_three_legal(&board, pos, Color::Black, 5));
    }

    #[test]
    fn test_double_open_three_cross() {
        let mut board = Board::new(19, 19);
        //     col: 7 8 9 10 11
        // row 7:   . . B .  .
        // row 8:   . . B .  .
        // row 9:   B B X .  .
        // row 10:  . . B .  .
        place_all(&mut board, Color::Black, &[(9, 7), (9, 8), (7, 9), (8, 9), (10, 9)]);
        let pos = Pos::new(9, 9);
        // Horizontal run 3 (not the trigger), vertical run 4 open
        assert_eq!(count_open_threes(&board, pos, Color::Black, 5), 1);

        board.place_stone(Pos::new(9, 6), Color::Black);
        // Horizontal now B B B X -> run 4 open on both ends
        assert_eq!(count_open_threes(&board, pos, Color::Black, 5), 2);
        assert!(!is_three_three_legal(&board, pos, Color::Black, 5));
    }

    #[test]
    fn test_double_open_three_diagonals() {
        let mut board = Board::new(19, 19);
        // Both diagonals: two stones on one side, one on the other
        place_all(
            &mut board,
            Color::White,
            &[(7, 7), (8, 8), (10, 10), (7, 11), (8, 10), (10, 8)],
        );
        let pos = Pos::new(9, 9);
        assert_eq!(count_open_threes(&board, pos, Color::White, 5), 2);
        assert!(!is_three_three_legal(&board, pos, Color::White, 5));
        // Rules are per color: Black sees nothing here
        assert!(is_three_three_legal(&board, pos, Color::Black, 5));
    }

    #[test]
    fn test_blocked_three_does_not_count() {
        let mut board = Board::new(19, 19);
        // row 9:  W B B B X _   (west end capped)
        // col 9:  B B B X       (north end open, south open)
        place_all(&mut board, Color::Black, &[(9, 6), (9, 7), (9, 8), (6, 9), (7, 9), (8, 9)]);
        board.place_stone(Pos::new(9, 5), Color::White);
        let pos = Pos::new(9, 9);
        assert_eq!(count_open_threes(&board, pos, Color::Black, 5), 1);
        assert!(is_three_three_legal(&board, pos, Color::Black, 5));
    }

    #[test]
    fn test_edge_blocked_three_does_not_count() {
        let mut board = Board::new(19, 19);
        // row 0: B B B X _  (west end is the board edge)
        // col 3 going south: X B B B _
        place_all(&mut board, Color::Black, &[(0, 0), (0, 1), (0, 2), (1, 3), (2, 3), (3, 3)]);
        let pos = Pos::new(0, 3);
        // Vertical run also touches the north edge
        assert_eq!(count_open_threes(&board, pos, Color::Black, 5), 0);
        assert!(is_three_three_legal(&board, pos, Color::Black, 5));
    }

    #[test]
    fn test_overlong_run_is_not_a_three() {
        let mut board = Board::new(19, 19);
        // Horizontal run of 5 and vertical run of 5 with win_length 5:
        // neither equals 4, so no open threes
        place_all(
            &mut board,
            Color::Black,
            &[(9, 5), (9, 6), (9, 7), (9, 8), (5, 9), (6, 9), (7, 9), (8, 9)],
        );
        let pos = Pos::new(9, 9);
        assert_eq!(count_open_threes(&board, pos, Color::Black, 5), 0);
    }

    #[test]
    fn test_open_three_with_smaller_win_length() {
        let mut board = Board::new(10, 10);
        // win_length 4: open "three" is a run of 3
        // row 5: _ B X B _
        // col 5: _ B X B _
        place_all(&mut board, Color::Black, &[(5, 4), (5, 6), (4, 5), (6, 5)]);
        let pos = Pos::new(5, 5);
        assert_eq!(count_open_threes(&board, pos, Color::Black, 4), 2);
        assert!(!is_three_three_legal(&board, pos, Color::Black, 4));
    }

    #[test]
    fn test_win_length_one_has_no_threes() {
        let board = Board::new(3, 3);
        assert_eq!(count_open_threes(&board, Pos::new(1, 1), Color::Black, 1), 0);
    }

    #[test]
    fn test_win_length_one_has_no_fours() {
        let board = Board::new(3, 3);
        assert_eq!(count_fours(&board, Pos::new(1, 1), Color::Black, 1), 0);
        assert!(is_four_four_legal(&board, Pos::new(1, 1), Color::Black, 1));
    }

    #[test]
    fn test_single_four_allowed() {
        let mut board = Board::new(19, 19);
        // row 9: W B B B X _  (one exact-length run is fine, even capped)
        place_all(&mut board, Color::Black, &[(9, 6), (9, 7), (9, 8)]);
        board.place_stone(Pos::new(9, 5), Color::White);
        let pos = Pos::new(9, 9);
        assert_eq!(count_fours(&board, pos, Color::Black, 4), 1);
        assert!(is_four_four_legal(&board, pos, Color::Black, 4));
    }

    #[test]
    fn test_double_four_forbidden() {
        let mut board = Board::new(19, 19);
        // win_length 4:
        // row 9: B B B X   col 9: B B B X (from the north)
        place_all(&mut board, Color::Black, &[(9, 6), (9, 7), (9, 8), (6, 9), (7, 9), (8, 9)]);
        let pos = Pos::new(9, 9);
        assert_eq!(count_fours(&board, pos, Color::Black, 4), 2);
        assert!(!is_four_four_legal(&board, pos, Color::Black, 4));
    }

    #[test]
    fn test_double_four_ignores_open_ends() {
        let mut board = Board::new(19, 19);
        // Same as above but with both runs capped by White
        place_all(&mut board, Color::Black, &[(9, 6), (9, 7), (9, 8), (6, 9), (7, 9), (8, 9)]);
        place_all(&mut board, Color::White, &[(9, 5), (5, 9), (9, 10), (10, 9)]);
        let pos = Pos::new(9, 9);
        assert!(!is_four_four_legal(&board, pos, Color::Black, 4));
    }

    #[test]
    fn test_overlong_run_is_not_a_four() {
        let mut board = Board::new(19, 19);
        // win_length 4, horizontal run 5 and vertical run 4
        place_all(
            &mut board,
            Color::Black,
            &[(9, 5), (9, 6), (9, 7), (9, 8), (6, 9), (7, 9), (8, 9)],
        );
        let pos = Pos::new(9, 9);
        assert_eq!(count_fours(&board, pos, Color::Black, 4), 1);
        assert!(is_four_four_legal(&board, pos, Color::Black, 4));
    }
}
