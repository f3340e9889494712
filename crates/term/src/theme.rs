//! Palette shared by the game and menu views.

use crate::fb::{CellStyle, Rgb};

pub const BACKGROUND: Rgb = Rgb::from_hex(0x1a1a1a);
pub const BOARD: Rgb = Rgb::from_hex(0x111111);
pub const GRID_DOT: Rgb = Rgb::from_hex(0x2c2c2c);
pub const BORDER: Rgb = Rgb::from_hex(0x555555);
pub const TEXT: Rgb = Rgb::from_hex(0xffffff);
pub const MUTED: Rgb = Rgb::from_hex(0x9e9e9e);
pub const LOCKED_BG: Rgb = Rgb::from_hex(0x333333);
pub const LOCKED_FG: Rgb = Rgb::from_hex(0x666666);

pub const SNAKE_HEAD: Rgb = Rgb::from_hex(0x4caf50);
pub const SNAKE_BODY: Rgb = Rgb::from_hex(0x66bb6a);
pub const FOOD: Rgb = Rgb::from_hex(0xf44336);
pub const FOOD_GLOW: Rgb = Rgb::from_hex(0xff5252);

pub const GREEN: Rgb = Rgb::from_hex(0x4caf50);
pub const PURPLE: Rgb = Rgb::from_hex(0x9c27b0);
pub const BLUE: Rgb = Rgb::from_hex(0x2196f3);
pub const RED: Rgb = Rgb::from_hex(0xf44336);
pub const ORANGE: Rgb = Rgb::from_hex(0xff9800);
pub const AMBER: Rgb = Rgb::from_hex(0xffc107);

pub fn text(fg: Rgb) -> CellStyle {
    CellStyle::new(fg, BACKGROUND)
}

pub fn on_board(fg: Rgb) -> CellStyle {
    CellStyle::new(fg, BOARD)
}
