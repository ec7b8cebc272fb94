//! Game rules for free-style Gomoku with forbidden double threats
//!
//! This module implements the rule set for Gomoku including:
//! - Directional run scanning shared by every rule
//! - Forbidden moves (three-three, four-four)
//! - Win conditions (configurable run length, overline policy)

pub mod forbidden;
pub mod scan;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{count_fours, count_open_threes, is_four_four_legal, is_three_three_legal};
pub use scan::{axis_run, count_in_direction, is_open_axis, is_open_end};
pub use win::{is_winning_move, winning_line, OverlinePolicy};
