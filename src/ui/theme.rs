//! Theme constants for the Gomoku GUI

use egui::Color32;

use crate::Color;

// Board colors - green felt
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 125, 50);
pub const GRID_LINE: Color32 = Color32::from_rgb(20, 60, 24);
pub const STAR_POINT: Color32 = Color32::from_rgb(15, 45, 18);
pub const COORD_LABEL: Color32 = Color32::from_rgb(200, 230, 200);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 215, 64);

// Functions for colors that can't be const
pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub fn hover_stone(color: Color) -> Color32 {
    match color {
        Color::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
        Color::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BLACK: Color32 = Color32::from_rgb(70, 70, 75);
pub const STATUS_WHITE: Color32 = Color32::from_rgb(220, 220, 225);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const MAX_CELL_SIZE: f32 = 48.0;
