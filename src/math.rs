//! Small float helpers shared by the patterns.
//!
//! Everything here is total over `f32`: no helper panics, whatever the input.

use core::f32::consts::TAU;

/// `max(0, sin(x))`
#[inline]
pub fn positive_sin(x: f32) -> f32 {
    libm::sinf(x).max(0.0)
}

/// `max(0, sin(x))^power`
///
/// Higher powers give narrower, sharper crests.
#[inline]
pub fn sharpened_sin(x: f32, power: f32) -> f32 {
    libm::powf(positive_sin(x), power)
}

/// Copy the sign of `sign_of` onto `magnitude`
#[inline]
pub fn signed_magnitude(magnitude: f32, sign_of: f32) -> f32 {
    libm::copysignf(magnitude, sign_of)
}

/// Sine of a phase given in ticks for a given period in ticks
#[inline]
pub fn periodic_sin(t: f32, period: f32) -> f32 {
    libm::sinf(TAU * t / period)
}

/// Triangle wave over integers, bouncing between `0` and `half_period`
///
/// Returns 0 for a non-positive `half_period`.
#[inline]
pub fn triangle(x: i64, half_period: i64) -> i64 {
    if half_period <= 0 {
        return 0;
    }
    let period = 2 * half_period;
    let phase = x.rem_euclid(period);
    if phase < half_period {
        phase
    } else {
        period - phase
    }
}

/// Pixel index as a signed coordinate
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub const fn signed_index(i: usize) -> i64 {
    i as i64
}

/// Pixel index as a float coordinate
#[inline]
#[allow(clippy::cast_precision_loss)]
pub const fn coord(value: usize) -> f32 {
    value as f32
}

/// Animation clock as a float
#[inline]
#[allow(clippy::cast_precision_loss)]
pub const fn ticks(t: u32) -> f32 {
    t as f32
}
