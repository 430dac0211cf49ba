//! Smooth red/green sine blends

use core::f32::consts::PI;

use super::Canvas;
use crate::color::Color;
use crate::math::{coord, periodic_sin, sharpened_sin, ticks};

/// Radians per pixel
const WAVE_NUMBER: f32 = 0.08;
/// Ticks for one back-and-forth sway of the whole wave train
const SWAY_PERIOD: f32 = 900.0;
/// Sway depth in radians of phase
const SWAY_DEPTH: f32 = 9.0;

const SCALE: f32 = 255.0;

fn blend(t: u32, i: usize, power: f32) -> Color {
    let phase = coord(i) * WAVE_NUMBER + SWAY_DEPTH * periodic_sin(ticks(t), SWAY_PERIOD);
    Color::new(
        SCALE * sharpened_sin(phase, power),
        SCALE * sharpened_sin(phase + PI, power),
        0.0,
    )
}

pub(super) fn waves(_canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    blend(t, i, 2.0)
}

pub(super) fn sharp_waves(_canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    blend(t, i, 3.0)
}
