//! GUI module for the Gomoku game
//!
//! A two-player desktop shell over [`crate::Game`], built with egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::GameState;
