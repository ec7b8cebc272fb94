//! Error types for game setup and move submission

use crate::board::Pos;

/// Errors raised while building a game from parameters or launch arguments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive (got {rows}x{columns})")]
    ZeroDimension { rows: usize, columns: usize },

    #[error("board of {rows}x{columns} cells is too large")]
    BoardTooLarge { rows: usize, columns: usize },

    #[error("win length must be positive")]
    ZeroWinLength,

    #[error("invalid number of inputs: expected at most 3, got {0}")]
    InvalidArgCount(usize),
}

/// Reasons the arbiter refuses a move. The game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),

    #[error("it is not {0}'s turn")]
    WrongTurn(crate::board::Color),

    #[error("move at {0} creates more than one open three")]
    ThreeThreeViolation(Pos),

    #[error("move at {0} creates more than one four")]
    FourFourViolation(Pos),
}
