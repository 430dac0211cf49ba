use super::Canvas;
use crate::color::Color;

/// Single white pixel walking along the strip, one pixel per tick
pub(super) fn chaser(canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let len = canvas.len().max(1);
    if i == t as usize % len {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
