//! Live frame wire format
//!
//! One text message per frame: a JSON array of `[r, g, b]` integer triples in
//! pixel order, e.g. `[[255, 0, 0], [0, 255, 0]]`. A frame may be shorter
//! than the strip, in which case only its leading pixels are updated.

use heapless::Vec;
use thiserror::Error;

use crate::color::Rgb;

/// Decoded live frame for a strip of `N` pixels
pub type LiveFrame<const N: usize> = Vec<Rgb, N>;

/// Reasons a live frame is discarded
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("live frame is not an array of [r, g, b] integer triples: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode one live frame message
///
/// Triples past the `N`th are dropped. Channels outside `0..=255` are
/// clamped.
pub fn decode_frame<const N: usize>(text: &str) -> Result<LiveFrame<N>, FrameError> {
    let triples: std::vec::Vec<[i64; 3]> = serde_json::from_str(text)?;
    Ok(triples
        .into_iter()
        .take(N)
        .map(|[r, g, b]| Rgb::new(channel(r), channel(g), channel(b)))
        .collect())
}

#[inline]
fn channel(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}
