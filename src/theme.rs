//! Shared palette and type scale.

use condo_render_lopdf::TextStyle;
use condo_types::Color;

pub const TEXT: Color = Color::rgb(30, 41, 59);
pub const MUTED: Color = Color::rgb(100, 116, 139);
pub const RULE: Color = Color::rgb(203, 213, 225);
pub const PANEL: Color = Color::rgb(241, 245, 249);
pub const ACCENT: Color = Color::rgb(30, 64, 175);
pub const LINK: Color = Color::rgb(29, 78, 216);

pub const TITLE_BAR_HEIGHT: f32 = 24.0;
pub const SECTION_GAP: f32 = 14.0;
pub const BLOCK_GAP: f32 = 8.0;

pub fn body() -> TextStyle {
    TextStyle::regular(9.0).with_color(TEXT)
}

pub fn small() -> TextStyle {
    TextStyle::regular(7.5).with_color(MUTED)
}

pub fn label() -> TextStyle {
    TextStyle::bold(8.5).with_color(MUTED)
}

pub fn strong() -> TextStyle {
    TextStyle::bold(9.0).with_color(TEXT)
}

/// Baseline offset for a line of `size` text whose box starts at y.
pub fn baseline(size: f32) -> f32 {
    size * 0.95
}
