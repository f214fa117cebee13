//! Board rendering for the Lines of Action GUI
//!
//! Squares are drawn with `y = 7` at the top so row 8 sits above row 1.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Move, Pos, Side, BOARD_SIZE};

use super::theme::*;

/// What the view highlights on top of the pieces
#[derive(Default)]
pub struct Overlay<'a> {
    pub selected: Option<Pos>,
    pub destinations: &'a [Move],
    pub last_move: Option<Move>,
    pub winner: Option<Side>,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached square size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Fit the board to the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_squares(&painter);
        self.draw_coordinates(&painter);

        if let Some(mv) = overlay.last_move {
            self.draw_last_move(&painter, mv);
        }
        if let Some(pos) = overlay.selected {
            self.draw_square_outline(&painter, pos, SELECTED_MARKER);
        }

        self.draw_pieces(&painter, board, overlay.winner);

        for mv in overlay.destinations {
            self.draw_destination(&painter, *mv);
        }

        if !overlay.interactive {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if let Some(pos) = hovered {
            painter.rect_filled(self.square_rect(pos), CornerRadius::ZERO, hover_square());
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    fn draw_squares(&self, painter: &Painter) {
        for y in 0..BOARD_SIZE as u8 {
            for x in 0..BOARD_SIZE as u8 {
                let color = if (x + y) % 2 == 0 {
                    SQUARE_DARK
                } else {
                    SQUARE_LIGHT
                };
                painter.rect_filled(self.square_rect(Pos::new(x, y)), CornerRadius::ZERO, color);
            }
        }
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(13.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE as u8 {
            let center = self.board_to_screen(Pos::new(i, i));
            let letter = ((b'a' + i) as char).to_string();
            let number = (i + 1).to_string();

            for y in [self.board_rect.min.y + half, self.board_rect.max.y - half] {
                painter.text(Pos2::new(center.x, y), Align2::CENTER_CENTER, &letter, font.clone(), COORD_TEXT);
            }
            for x in [self.board_rect.min.x + half, self.board_rect.max.x - half] {
                painter.text(Pos2::new(x, center.y), Align2::CENTER_CENTER, &number, font.clone(), COORD_TEXT);
            }
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board, winner: Option<Side>) {
        for side in [Side::Black, Side::White] {
            for pos in board.pieces(side) {
                self.draw_piece(painter, pos, side);
                if winner == Some(side) {
                    let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
                    painter.circle_stroke(self.board_to_screen(pos), radius, Stroke::new(3.0, WIN_HIGHLIGHT));
                }
            }
        }
    }

    /// Draw a single piece with a shadow and highlight
    fn draw_piece(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match side {
            Side::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_PIECE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_PIECE_HIGHLIGHT);
            }
            Side::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_PIECE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_PIECE_SHADOW));
            }
        }
    }

    fn draw_last_move(&self, painter: &Painter, mv: Move) {
        let stroke = Stroke::new(LAST_MOVE_LINE_WIDTH, LAST_MOVE_MARKER);
        painter.line_segment([self.board_to_screen(mv.from), self.board_to_screen(mv.to)], stroke);
        self.draw_square_outline(painter, mv.from, LAST_MOVE_MARKER);
    }

    fn draw_square_outline(&self, painter: &Painter, pos: Pos, color: Color32) {
        painter.rect_stroke(
            self.square_rect(pos).shrink(1.5),
            CornerRadius::ZERO,
            Stroke::new(3.0, color),
            egui::StrokeKind::Inside,
        );
    }

    /// Dot on a quiet destination, ring around a capture
    fn draw_destination(&self, painter: &Painter, mv: Move) {
        let center = self.board_to_screen(mv.to);
        if mv.captures {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 2.0;
            painter.circle_stroke(center, radius, Stroke::new(3.0, CAPTURE_MARKER));
        } else {
            painter.circle_filled(center, self.cell_size * DESTINATION_RADIUS_RATIO, DESTINATION_MARKER);
        }
    }

    fn square_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let y = BOARD_SIZE as i32 - 1 - row;

        if Pos::is_valid(col, y) {
            Some(Pos::new(col as u8, y as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen centre of its square
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let row = (BOARD_SIZE - 1 - pos.y as usize) as f32;
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.x as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (row + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
