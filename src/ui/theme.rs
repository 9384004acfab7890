//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors, after the classic blue plastic frame
pub const BOARD_FRAME: Color32 = Color32::from_rgb(25, 80, 210);
pub const HOLE: Color32 = Color32::from_rgb(22, 24, 28);

// Token colors
pub const RED_TOKEN: Color32 = Color32::from_rgb(225, 50, 45);
pub const YELLOW_TOKEN: Color32 = Color32::from_rgb(240, 200, 40);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Welcome and end screens
pub const MENU_BG: Color32 = Color32::from_rgb(240, 200, 40);
pub const MENU_BORDER: Color32 = Color32::from_rgb(20, 20, 20);
pub const TITLE_TEXT: Color32 = Color32::from_rgb(225, 50, 45);
pub const MENU_TEXT: Color32 = Color32::from_rgb(20, 20, 20);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const BACKDROP: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);

// Buttons
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);

// Functions for colors that can't be const
pub fn ghost_red() -> Color32 {
    Color32::from_rgba_unmultiplied(225, 50, 45, 90)
}

pub fn ghost_yellow() -> Color32 {
    Color32::from_rgba_unmultiplied(240, 200, 40, 90)
}

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const TOKEN_RADIUS_RATIO: f32 = 0.42;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const WIN_STROKE_WIDTH: f32 = 4.0;
