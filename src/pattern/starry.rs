//! Starry night: decorrelated slow twinkles

use core::f32::consts::TAU;

use super::Canvas;
use crate::color::Color;
use crate::math::{coord, ticks};

/// Radians per tick, one pulse every ~31 seconds at 100 ticks per second
const TWINKLE_RATE: f32 = 0.002;
/// Odd power keeps the sign of the sine and squeezes the crest into a
/// pulse a few ticks wide
const SHARPNESS: f32 = 10_001.0;

const SKY: Color = Color::new(0.0, 0.0, 6.0);
const STAR: Color = Color::new(255.0, 235.0, 190.0);

pub(super) fn starry_night(canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let len = coord(canvas.len().max(1));
    let offset = coord(canvas.permuted(i)) * TAU / len;
    let pulse = libm::powf(libm::sinf(ticks(t) * TWINKLE_RATE + offset), SHARPNESS);
    SKY + STAR * pulse
}
