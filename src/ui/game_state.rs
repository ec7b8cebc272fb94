//! Game state management for the Gomoku GUI

use crate::{Accepted, Game, Pos, Rejection};

/// What the GUI keeps around a [`Game`]
pub struct GameState {
    pub game: Game,
    pub message: Option<String>,
    pub winning_line: Option<Vec<Pos>>,
}

impl GameState {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            message: None,
            winning_line: None,
        }
    }

    /// Start over with the same board size and rules
    pub fn reset(&mut self) {
        match Game::with_config(*self.game.config()) {
            Ok(game) => *self = Self::new(game),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Whether the side to move could play at `pos`
    pub fn preview(&self, pos: Pos) -> Result<Pos, Rejection> {
        self.game
            .check_move(pos.row as i32, pos.col as i32, self.game.current_turn())
    }

    /// Attempt to place a stone for the side to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<Accepted, Rejection> {
        let color = self.game.current_turn();
        match self.game.submit_move(pos.row as i32, pos.col as i32, color) {
            Ok(accepted) => {
                self.message = None;
                if accepted.winner.is_some() {
                    self.winning_line = self.game.winning_line();
                } else if self.game.is_draw() {
                    self.message = Some("Board is full: draw".to_string());
                }
                Ok(accepted)
            }
            Err(reason) => {
                self.message = Some(format!("You cannot make this move: {reason}"));
                Err(reason)
            }
        }
    }
}
