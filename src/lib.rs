//! Gomoku rules engine with three-three and four-four restrictions
//!
//! A rules engine for free-style Gomoku on any rectangular board:
//! - Configurable board size (19x19 by default)
//! - Configurable run length to win (5 by default)
//! - Overlines win by default, or can be excluded
//! - Three-three forbidden: at most one open run of `win_length - 1` per move
//! - Four-four forbidden: at most one run of exactly `win_length` per move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Cells, positions, compass directions and axes
//! - [`rules`]: Run scanning, forbidden moves and win detection
//! - [`game`]: Move arbiter owning the board and turn state
//! - [`config`]: Game parameters and launch arguments
//! - [`error`]: Configuration errors and move rejections
//! - [`ui`]: Desktop front-end driving a [`Game`]
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Color, Game, Rejection};
//!
//! let mut game = Game::new(19, 19, 5).unwrap();
//! game.submit_move(9, 9, Color::Black).unwrap();
//!
//! // Same cell again is refused and nothing changes
//! let err = game.submit_move(9, 9, Color::White).unwrap_err();
//! assert!(matches!(err, Rejection::CellOccupied(_)));
//! assert_eq!(game.current_turn(), Color::White);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Axis, Board, Color, Direction, Pos, Stone};
pub use config::{GameConfig, LaunchArgs};
pub use error::{ConfigError, Rejection};
pub use game::{Accepted, Game, Phase};
pub use rules::OverlinePolicy;
