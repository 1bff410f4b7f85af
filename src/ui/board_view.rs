//! Board rendering and hit testing

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Pos, Stone, BOARD_SIZE};
use crate::engine::BoardEngine;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked position, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        engine: &BoardEngine,
        style: &BoardStyle,
        show_numbers: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Fit a square board into the available space
        let board_size = available_size.x.min(available_size.y) - 16.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), style.background);

        self.draw_grid(&painter, style);
        self.draw_star_points(&painter, style);
        self.draw_stones(&painter, engine, show_numbers);

        if let Some(&pos) = engine.moves().last() {
            self.draw_last_move_marker(&painter, pos);
        }

        // Forbidden cells are only marked while Black is to move in a live game
        if engine.game_started() && !engine.game_over() && engine.current_player() == Stone::Black
        {
            for &pos in engine.forbidden() {
                self.draw_forbidden_mark(&painter, pos);
            }
        }

        if let Some(line) = engine.winning_line() {
            self.draw_winning_line(&painter, &line);
        }

        if !engine.game_started() {
            self.draw_start_prompt(&painter);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;
        let live = engine.game_started() && !engine.game_over();
        if live {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = engine.board().is_empty(board_pos)
                        && !engine.is_forbidden(board_pos);
                    self.draw_hover_preview(
                        &painter,
                        board_pos,
                        engine.current_player(),
                        is_valid,
                    );
                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter, style: &BoardStyle) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, style.line);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (tengen and corners)
    fn draw_star_points(&self, painter: &Painter, style: &BoardStyle) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, style.line);
        }
    }

    /// Draw all placed stones, optionally with their move numbers
    fn draw_stones(&self, painter: &Painter, engine: &BoardEngine, show_numbers: bool) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let stone = engine.board().get(pos);
                if stone == Stone::Empty {
                    continue;
                }
                self.draw_stone(painter, pos, stone);

                if show_numbers {
                    if let Some(number) = engine.move_number_at(pos) {
                        let text_color = match stone {
                            Stone::Black => WHITE_STONE,
                            _ => BLACK_STONE,
                        };
                        painter.text(
                            self.board_to_screen(pos),
                            egui::Align2::CENTER_CENTER,
                            number.to_string(),
                            egui::FontId::proportional(self.cell_size * 0.38),
                            text_color,
                        );
                    }
                }
            }
        }
    }

    /// Draw a single stone with a shadow and highlight
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
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
            Stone::Empty => {}
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a red X over a cell Black may not play
    fn draw_forbidden_mark(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let arm = self.cell_size * 0.3;
        let stroke = Stroke::new(GRID_LINE_WIDTH * 2.0, FORBIDDEN_MARK);
        painter.line_segment(
            [center + Vec2::new(-arm, -arm), center + Vec2::new(arm, arm)],
            stroke,
        );
        painter.line_segment(
            [center + Vec2::new(arm, -arm), center + Vec2::new(-arm, arm)],
            stroke,
        );
    }

    /// Banner shown until the game is started
    fn draw_start_prompt(&self, painter: &Painter) {
        let rect = Rect::from_center_size(
            self.board_rect.center(),
            Vec2::new(self.board_rect.width() * 0.5, self.board_rect.height() * 0.1),
        );
        painter.rect_filled(
            rect,
            CornerRadius::same(6),
            Color32::from_rgba_unmultiplied(0, 0, 0, 120),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Press Start to begin",
            egui::FontId::proportional(18.0),
            Color32::from_rgb(255, 120, 120),
        );
    }

    /// Highlight the winning five
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for i in 0..4 {
            let start = self.board_to_screen(line[i]);
            let end = self.board_to_screen(line[i + 1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
