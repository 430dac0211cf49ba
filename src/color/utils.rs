use super::Rgb;

/// Round a float channel and clamp it into `0..=255`
///
/// NaN maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(value: f32) -> u8 {
    let rounded = libm::roundf(value);
    if rounded.is_nan() {
        return 0;
    }
    rounded.clamp(0.0, 255.0) as u8
}

/// Fold an index from the second half of a strip onto the first half
///
/// Uses the same center as mirroring a frame: for odd lengths the middle
/// pixel belongs to the first half.
pub fn mirror_index(index: usize, len: usize) -> usize {
    let mut center = len / 2;
    if !len.is_multiple_of(2) {
        center += 1;
    }
    if index < center {
        index
    } else {
        len.saturating_sub(1 + index)
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
