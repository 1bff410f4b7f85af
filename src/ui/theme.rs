//! Theme constants and board style presets

use egui::Color32;

/// A selectable board style
pub struct BoardStyle {
    pub name: &'static str,
    pub background: Color32,
    pub line: Color32,
}

/// Board styles selectable at runtime; the index is recorded in saved games
pub const BOARD_STYLES: [BoardStyle; 5] = [
    BoardStyle {
        name: "Classic Wood",
        background: Color32::from_rgb(0xE8, 0xB4, 0x73),
        line: Color32::BLACK,
    },
    BoardStyle {
        name: "Pale Teal",
        background: Color32::from_rgb(0xB5, 0xD8, 0xCC),
        line: Color32::BLACK,
    },
    BoardStyle {
        name: "Antique Tan",
        background: Color32::from_rgb(0xD4, 0xB4, 0x83),
        line: Color32::BLACK,
    },
    BoardStyle {
        name: "Cool Gray",
        background: Color32::from_rgb(0xCC, 0xCC, 0xCC),
        line: Color32::BLACK,
    },
    BoardStyle {
        name: "Dark",
        background: Color32::from_rgb(0x2D, 0x2D, 0x2D),
        line: Color32::WHITE,
    },
];

/// Clamp a saved style index to a valid one
pub fn style_at(index: usize) -> &'static BoardStyle {
    &BOARD_STYLES[index.min(BOARD_STYLES.len() - 1)]
}

// Stone colors with better contrast
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const FORBIDDEN_MARK: Color32 = Color32::from_rgb(255, 0, 0);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel text colors - dark modern theme
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status message accents
pub const STATUS_INFO: Color32 = Color32::from_rgb(45, 55, 80);
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(45, 80, 55);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 36.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

// Star point positions for the 15x15 board (0-indexed)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
