//! Tennis: two flaming balls bouncing across the playfield
//!
//! Each ball follows a triangle wave spanning the playfield, one moving
//! forwards and one backwards. A ball's heat falls off linearly with
//! distance, and each channel only lights above its own heat threshold,
//! so a ball is white-hot in the middle and red at the edges.

use super::Canvas;
use crate::color::Color;
use crate::math::{signed_index, triangle};

/// Dark pixels kept at both ends of the strip
const MARGIN: usize = 30;
/// Pixels per tick
const BALL_SPEED: i64 = 3;
const PHASE_A: i64 = 0;
const PHASE_B: i64 = 97;

const MAX_HEAT: f32 = 255.0;
/// Heat lost per pixel of distance from a ball
const HEAT_FALLOFF: f32 = 8.0;

const THRESHOLD_R: f32 = 0.0;
const THRESHOLD_G: f32 = 100.0;
const THRESHOLD_B: f32 = 200.0;

fn ball(t: u32, direction: i64, phase: i64, field: i64) -> i64 {
    triangle(direction * i64::from(t) * BALL_SPEED + phase, field)
}

#[allow(clippy::cast_precision_loss)]
fn heat(x: i64, ball: i64) -> f32 {
    (MAX_HEAT - (x - ball).abs() as f32 * HEAT_FALLOFF).max(0.0)
}

/// Channel intensity of `heat` above `threshold`, rescaled to `0..=255`
fn channel(heat: f32, threshold: f32) -> f32 {
    (heat - threshold).max(0.0) * 255.0 / (MAX_HEAT - threshold)
}

pub(super) fn tennis(canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let len = canvas.len();
    if len <= 2 * MARGIN || i < MARGIN || i >= len - MARGIN {
        return Color::BLACK;
    }

    let field = signed_index(len - 2 * MARGIN);
    let x = signed_index(i - MARGIN);
    let forward = heat(x, ball(t, 1, PHASE_A, field));
    let backward = heat(x, ball(t, -1, PHASE_B, field));

    Color::new(
        channel(forward, THRESHOLD_R),
        channel(forward, THRESHOLD_G) + channel(backward, THRESHOLD_G),
        channel(backward, THRESHOLD_B),
    )
}
