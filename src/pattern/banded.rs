//! Red and green band patterns
//!
//! All six "xmas" modes share one band test and differ only in how they
//! shift the position fed into it.

use super::Canvas;
use crate::color::Color;
use crate::math::{periodic_sin, signed_index, ticks};

const RED: Color = Color::new(255.0, 0.0, 0.0);
const GREEN: Color = Color::new(0.0, 255.0, 0.0);

/// Pixels per band repetition
const BAND_PERIOD: i64 = 10;
/// Lit pixels at the start of each band
const BAND_WIDTH: i64 = 2;
/// Green band starts half a period after the red one
const GREEN_OFFSET: i64 = BAND_PERIOD / 2;

/// Ticks per one-pixel move of the traveling modes
const SHIFT_TICKS: u32 = 8;
/// Ticks between color swaps of the switching mode
const SWITCH_TICKS: u32 = 150;

/// Full swing duration of the momentum mode, in ticks
const MOMENTUM_PERIOD: f32 = 600.0;
/// Swing amplitude of the momentum mode, in pixels
const MOMENTUM_AMPLITUDE: f32 = 25.0;

#[inline]
fn in_band(pos: i64, offset: i64) -> bool {
    (pos - offset).rem_euclid(BAND_PERIOD) < BAND_WIDTH
}

/// Band color with independent positions for the red and green bands
#[inline]
fn band_color(red_pos: i64, green_pos: i64) -> Color {
    if in_band(red_pos, 0) {
        RED
    } else if in_band(green_pos, GREEN_OFFSET) {
        GREEN
    } else {
        Color::BLACK
    }
}

#[inline]
fn linear_shift(t: u32) -> i64 {
    i64::from(t / SHIFT_TICKS)
}

#[allow(clippy::cast_possible_truncation)]
fn momentum_shift(t: u32) -> i64 {
    libm::roundf(MOMENTUM_AMPLITUDE * periodic_sin(ticks(t), MOMENTUM_PERIOD)) as i64
}

pub(super) fn xmas_static(_canvas: &Canvas<'_>, _t: u32, i: usize) -> Color {
    let pos = signed_index(i);
    band_color(pos, pos)
}

pub(super) fn xmas_switching(_canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    // Half a band period turns red slots into green ones and back
    let swapped = i64::from((t / SWITCH_TICKS) % 2);
    let pos = signed_index(i) + GREEN_OFFSET * swapped;
    band_color(pos, pos)
}

pub(super) fn xmas_left(_canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let pos = signed_index(i) + linear_shift(t);
    band_color(pos, pos)
}

pub(super) fn xmas_right(_canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let pos = signed_index(i) - linear_shift(t);
    band_color(pos, pos)
}

pub(super) fn xmas_cross(_canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let shift = linear_shift(t);
    let pos = signed_index(i);
    band_color(pos + shift, pos - shift)
}

pub(super) fn xmas_momentum(_canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let pos = signed_index(i) + momentum_shift(t);
    band_color(pos, pos)
}
