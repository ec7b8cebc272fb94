//! Move arbiter owning the board and turn state of one game
//!
//! Every submitted move goes through the same pipeline:
//!
//! 1. **Session**: reject if the game is already over
//! 2. **Geometry**: reject off-board or occupied cells
//! 3. **Turn**: reject a color that is not on move
//! 4. **Fairness**: reject three-three, then four-four, on the hypothetical stone
//! 5. **Commit**: place the stone, then check for a win or pass the turn
//!
//! A rejected move leaves the game exactly as it was.
//!
//! # Example
//!
//! ```
//! use gomoku::{Color, Game};
//!
//! let mut game = Game::new(8, 8, 5).unwrap();
//! let accepted = game.submit_move(3, 3, Color::Black).unwrap();
//! assert_eq!(accepted.winner, None);
//! assert_eq!(game.current_turn(), Color::White);
//! ```

use tracing::{debug, info};

use crate::board::{Board, Color, Pos, Stone};
use crate::config::GameConfig;
use crate::error::{ConfigError, Rejection};
use crate::rules::{is_four_four_legal, is_three_three_legal, is_winning_move, winning_line};

/// Where the game stands between submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the side to move
    AwaitingMove,
    /// Terminal: no further moves are accepted
    GameOver { winner: Color },
}

/// A committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted {
    pub pos: Pos,
    pub color: Color,
    /// Set when this move ended the game
    pub winner: Option<Color>,
}

/// One game session: board plus whose turn it is and whether it has ended.
///
/// Sessions share nothing, so hosting several games means owning several
/// `Game` values.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: GameConfig,
    current: Color,
    phase: Phase,
    last_move: Option<Pos>,
    move_count: usize,
}

impl Game {
    /// Start a game on an empty `rows` x `columns` board with Black to move.
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::new(rows, columns, win_length))
    }

    /// Start a game from a full configuration
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            rows = config.rows,
            columns = config.columns,
            win_length = config.win_length,
            overline = ?config.overline,
            "new game"
        );
        Ok(Self {
            board: Board::new(config.rows, config.columns),
            config,
            current: Color::Black,
            phase: Phase::AwaitingMove,
            last_move: None,
            move_count: 0,
        })
    }

    /// Run every legality check for `color` at (`row`, `col`) without
    /// committing anything.
    pub fn check_move(&self, row: i32, col: i32, color: Color) -> Result<Pos, Rejection> {
        if self.is_game_over() {
            return Err(Rejection::GameAlreadyOver);
        }

        let pos = self
            .board
            .checked_pos(row, col)
            .ok_or(Rejection::OutOfBounds { row, col })?;

        if !self.board.is_empty(pos) {
            return Err(Rejection::CellOccupied(pos));
        }

        if color != self.current {
            return Err(Rejection::WrongTurn(color));
        }

        let win_length = self.config.win_length;
        if !is_three_three_legal(&self.board, pos, color, win_length) {
            return Err(Rejection::ThreeThreeViolation(pos));
        }
        if !is_four_four_legal(&self.board, pos, color, win_length) {
            return Err(Rejection::FourFourViolation(pos));
        }

        Ok(pos)
    }

    /// Validate and, if legal, play `color` at (`row`, `col`).
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn submit_move(&mut self, row: i32, col: i32, color: Color) -> Result<Accepted, Rejection> {
        let pos = self.check_move(row, col, color).map_err(|reason| {
            debug!(row, col, %color, %reason, "move rejected");
            reason
        })?;

        self.board.place_stone(pos, color);
        self.last_move = Some(pos);
        self.move_count += 1;

        let GameConfig {
            win_length,
            overline,
            ..
        } = self.config;
        let won = is_winning_move(&self.board, pos, color, win_length, overline);
        let winner = if won {
            self.phase = Phase::GameOver { winner: color };
            info!(%color, %pos, moves = self.move_count, "{color} is the winner");
            Some(color)
        } else {
            self.current = color.opponent();
            debug!(%color, %pos, "move accepted");
            None
        };

        Ok(Accepted { pos, color, winner })
    }

    /// Stone at (`row`, `col`), or `None` off the board
    pub fn cell_state(&self, row: i32, col: i32) -> Option<Stone> {
        self.board.checked_pos(row, col).map(|pos| self.board.get(pos))
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// Side to move. After a win this stays on the winner.
    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current
    }

    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            Phase::AwaitingMove => None,
        }
    }

    /// Board is full and nobody has won
    pub fn is_draw(&self) -> bool {
        !self.is_game_over() && self.board.is_full()
    }

    /// Cells of the winning run, once the game is over
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.winner()?;
        let pos = self.last_move?;
        winning_line(&self.board, pos, winner, self.config.win_length, self.config.overline)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.config.win_length
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }
}
