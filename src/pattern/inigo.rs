//! Cosine palette synthesis
//!
//! `color(j) = A + B * sin(2π (C j + D))` per channel, with all four
//! coefficient vectors slowly orbiting over time.

use core::f32::consts::TAU;

use super::Canvas;
use crate::color::Color;
use crate::math::{coord, ticks};

/// Pixels per unit of palette coordinate
const SPATIAL_SCALE: f32 = 100.0;
/// Radians per tick of the coefficient orbit
const ORBIT_SPEED: f32 = 0.004;

/// Per-channel palette coefficients for one tick
struct Coefficients {
    a: [f32; 3],
    b: [f32; 3],
    c: [f32; 3],
    d: [f32; 3],
}

impl Coefficients {
    fn at(t: u32) -> Self {
        let s = ticks(t) * ORBIT_SPEED;
        // Channels orbit a third of a turn apart
        let offset = |channel: usize| coord(channel) * TAU / 3.0;
        Self {
            a: core::array::from_fn(|ch| 0.5 + 0.1 * libm::cosf(s + offset(ch))),
            b: core::array::from_fn(|ch| 0.45 + 0.05 * libm::sinf(0.7 * s + offset(ch))),
            c: core::array::from_fn(|ch| 1.0 + 0.5 * libm::sinf(0.3 * s + offset(ch))),
            d: core::array::from_fn(|ch| {
                0.5 * libm::cosf(0.2 * s + offset(ch)) + coord(ch) / 3.0
            }),
        }
    }

    fn channel(&self, channel: usize, j: f32) -> f32 {
        let wave = libm::sinf(TAU * (self.c[channel] * j + self.d[channel]));
        255.0 * (self.a[channel] + self.b[channel] * wave)
    }
}

pub(super) fn inigo(_canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let k = Coefficients::at(t);
    let j = coord(i) / SPATIAL_SCALE;
    Color::new(k.channel(0, j), k.channel(1, j), k.channel(2, j))
}
