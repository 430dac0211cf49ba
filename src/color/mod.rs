mod utils;

use core::ops::{Add, Mul};

use smart_leds::RGB8;
pub use utils::{mirror_index, quantize, rgb_from_u32};

/// Color type written to the strip
pub type Rgb = RGB8;

/// Unclamped floating-point color produced by the pattern library
///
/// Channels are nominally in `0.0..=255.0`, but patterns are free to
/// overshoot in both directions. Use [`Color::to_rgb`] before writing to
/// a sink.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Lift an 8-bit color into float space
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::new(f32::from(rgb.r), f32::from(rgb.g), f32::from(rgb.b))
    }

    /// Linear interpolation towards `other`
    ///
    /// # Arguments
    /// * `other` - Target color
    /// * `amount_of_other` - Blend factor (0.0 = all self, 1.0 = all other)
    #[inline]
    pub fn lerp(self, other: Self, amount_of_other: f32) -> Self {
        self * (1.0 - amount_of_other) + other * amount_of_other
    }

    /// Returns true if no channel is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Round and clamp every channel into a strip color
    pub fn to_rgb(self) -> Rgb {
        Rgb::new(quantize(self.r), quantize(self.g), quantize(self.b))
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}
