//! Theme constants for the Lines of Action GUI

use egui::Color32;

// Board colors - two-tone checkered squares
pub const BOARD_BG: Color32 = Color32::from_rgb(139, 90, 43);
pub const SQUARE_LIGHT: Color32 = Color32::from_rgb(222, 184, 135);
pub const SQUARE_DARK: Color32 = Color32::from_rgb(181, 136, 99);
pub const COORD_TEXT: Color32 = Color32::from_rgb(245, 230, 210);

// Piece colors
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_PIECE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const SELECTED_MARKER: Color32 = Color32::from_rgb(255, 200, 60);
pub const DESTINATION_MARKER: Color32 = Color32::from_rgb(80, 200, 120);
pub const CAPTURE_MARKER: Color32 = Color32::from_rgb(255, 70, 70);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_square() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const LAST_MOVE_LINE_WIDTH: f32 = 3.0;
pub const DESTINATION_RADIUS_RATIO: f32 = 0.12;
