//! Radial waves around the strip center
//!
//! The fountain pushes rings outwards, the implode variant pulls them in.
//! A slower secondary sine flips a constant tint between warm and cool.

use super::Canvas;
use crate::color::Color;
use crate::math::{coord, sharpened_sin, signed_magnitude, ticks};

/// Radians per pixel of distance from the center
const RING_NUMBER: f32 = 0.15;
/// Radians per tick
const RING_SPEED: f32 = 0.12;

const TINT_NUMBER: f32 = 0.021;
const TINT_SPEED: f32 = 0.017;
/// Tint strength added to red and taken from blue (or the opposite)
const TINT: f32 = 90.0;

fn radial(canvas: &Canvas<'_>, t: u32, i: usize, direction: f32) -> Color {
    let distance = libm::fabsf(coord(i) - coord(canvas.center()));
    let phase = distance * RING_NUMBER - direction * ticks(t) * RING_SPEED;
    let ring = sharpened_sin(phase, 2.0);
    let tint = signed_magnitude(
        TINT,
        libm::sinf(distance * TINT_NUMBER + ticks(t) * TINT_SPEED),
    );

    Color::new(
        ring * 80.0 + tint,
        ring * 200.0,
        ring * 255.0 - tint,
    )
}

pub(super) fn fountain(canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    radial(canvas, t, i, 1.0)
}

pub(super) fn implode(canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    radial(canvas, t, i, -1.0)
}
