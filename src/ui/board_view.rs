//! Board rendering for the Gomoku GUI

use crate::{Board, Color, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::game_state::GameState;
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: usize,
    cols: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            cols: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<Pos> {
        let game = &state.game;
        let board = game.board();
        self.rows = board.rows();
        self.cols = board.cols();

        // Fit the grid to the available space; a 1-wide board still gets a cell
        let available = ui.available_size() - Vec2::splat(20.0);
        let spans_x = (self.cols.max(2) - 1) as f32;
        let spans_y = (self.rows.max(2) - 1) as f32;
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / spans_x)
            .min((available.y - 2.0 * BOARD_MARGIN) / spans_y)
            .clamp(8.0, MAX_CELL_SIZE);

        let size = Vec2::new(
            2.0 * BOARD_MARGIN + (self.cols - 1) as f32 * self.cell_size,
            2.0 * BOARD_MARGIN + (self.rows - 1) as f32 * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = game.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = &state.winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;
        if !game.is_game_over() {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = state.preview(board_pos).is_ok();
                if board.is_empty(board_pos) {
                    self.draw_hover_preview(&painter, board_pos, game.current_turn(), is_valid);
                }
                // Illegal clicks still go through so the arbiter can explain why
                if response.clicked() {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let width = (self.cols - 1) as f32 * self.cell_size;
        let height = (self.rows - 1) as f32 * self.cell_size;

        for col in 0..self.cols {
            let x = BOARD_MARGIN + col as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(x, BOARD_MARGIN);
            painter.line_segment([start, start + Vec2::new(0.0, height)], stroke);
        }
        for row in 0..self.rows {
            let y = BOARD_MARGIN + row as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, y);
            painter.line_segment([start, start + Vec2::new(width, 0.0)], stroke);
        }
    }

    /// Draw star points (hoshi) on boards big enough to have them
    fn draw_star_points(&self, painter: &Painter) {
        if self.rows < 13 || self.cols < 13 {
            return;
        }
        let lines = |n: usize| [3, n / 2, n - 4];
        for row in lines(self.rows) {
            for col in lines(self.cols) {
                let center = self.board_to_screen(Pos::new(row, col));
                painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
            }
        }
    }

    /// Draw zero-based row and column numbers, matching the engine's coordinates
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for col in 0..self.cols {
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.4);
            painter.text(pos, egui::Align2::CENTER_CENTER, col, font.clone(), COORD_LABEL);
        }
        for row in 0..self.rows {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.4, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row, font.clone(), COORD_LABEL);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            if let Some(color) = board.get(pos).color() {
                self.draw_stone(painter, pos, color);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, color: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match color {
            Color::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Color::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Color, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let color = if is_valid { hover_stone(turn) } else { hover_invalid() };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (row, col) = (y.floor() as usize, x.floor() as usize);
        (row < self.rows && col < self.cols).then(|| Pos::new(row, col))
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
