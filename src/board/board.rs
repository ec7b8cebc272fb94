//! Rectangular grid of cells

use super::{Color, Direction, Pos, Stone, DEFAULT_SIZE};

/// Game board of fixed dimensions
///
/// Cells are stored row-major. The board itself has no notion of turns;
/// it only records which stones are where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board. Both dimensions must be non-zero;
    /// `Game` validates this before a board is ever built.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            cells: vec![Stone::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Check if position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Convert signed coordinates to a position, if on the board
    #[inline]
    pub fn checked_pos(&self, row: i32, col: i32) -> Option<Pos> {
        if row < 0 || col < 0 {
            return None;
        }
        let pos = Pos::new(row as usize, col as usize);
        self.contains(pos).then_some(pos)
    }

    /// Position `steps` cells away from `pos` along `dir`, if on the board
    #[inline]
    pub fn step(&self, pos: Pos, dir: Direction, steps: usize) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let n = steps as i64;
        let r = pos.row as i64 + dr as i64 * n;
        let c = pos.col as i64 + dc as i64 * n;
        if r < 0 || c < 0 || r >= self.rows as i64 || c >= self.cols as i64 {
            return None;
        }
        Some(Pos::new(r as usize, c as usize))
    }

    /// Get stone at position. Off-board positions read as `Empty`;
    /// use `contains` first where that distinction matters.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone on an empty cell.
    ///
    /// Stones are never removed or recolored, so placing on an occupied
    /// cell is a caller bug.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, color: Color) {
        debug_assert!(self.contains(pos));
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        let idx = self.index(pos);
        self.cells[idx] = color.stone();
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}
