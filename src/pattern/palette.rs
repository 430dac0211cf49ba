//! Palette scan from the center outwards

use super::Canvas;
use crate::color::{Color, Rgb, rgb_from_u32};
use crate::math::{coord, ticks};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

#[allow(clippy::unreadable_literal)]
const PALETTE: [Rgb; 8] = hex_palette![
    0xFF0000, // Red
    0xFF6A00, // Orange
    0xFFD000, // Yellow
    0x00FF2A, // Green
    0x00D5FF, // Cyan
    0x0026FF, // Blue
    0x8A00FF, // Violet
    0xFF00A8  // Pink
];

/// Pixels covered by each palette entry
const STRIDE: f32 = 6.0;
/// Pixels per tick
const SCAN_SPEED: f32 = 0.25;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn rainbow(canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let distance = libm::fabsf(coord(i) - coord(canvas.center()));
    let step = libm::floorf((distance + ticks(t) * SCAN_SPEED) / STRIDE) as usize;
    Color::from_rgb(PALETTE[step % PALETTE.len()])
}
