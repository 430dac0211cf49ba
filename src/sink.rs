//! Pixel sinks
//!
//! The hardware side of the compositor. Implement [`PixelSink`] to support
//! a different output; [`SmartLedsSink`] adapts any `smart-leds` driver.

use core::convert::Infallible;

use smart_leds::SmartLedsWrite;

use crate::color::Rgb;

/// Abstract LED strip
///
/// `set` only touches a buffer; nothing reaches the LEDs until `show`.
pub trait PixelSink {
    /// Flush failure, fatal for whichever producer hit it
    type Error;

    /// Stage the color of one pixel. Out-of-range indices are ignored.
    fn set(&mut self, index: usize, color: Rgb);

    /// Transmit the staged buffer to the strip
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Stage a run of pixels starting at index 0
    fn set_all(&mut self, colors: &[Rgb]) {
        for (index, &color) in colors.iter().enumerate() {
            self.set(index, color);
        }
    }
}

/// Buffered sink on top of a `smart-leds` driver
///
/// Keeps the last written color of every pixel, so partial updates leave
/// untouched pixels as they were.
pub struct SmartLedsSink<W, const N: usize> {
    writer: W,
    pixels: [Rgb; N],
}

impl<W, const N: usize> SmartLedsSink<W, N> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [Rgb::default(); N],
        }
    }

    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> PixelSink for SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = W::Error;

    #[inline]
    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.writer.write(self.pixels.iter().copied())
    }
}

/// In-memory sink recording what was shown
///
/// Used by tests and previews.
#[derive(Debug, Clone)]
pub struct MemorySink<const N: usize> {
    staged: [Rgb; N],
    shown: [Rgb; N],
    shows: usize,
}

impl<const N: usize> MemorySink<N> {
    pub const fn new() -> Self {
        Self {
            staged: [Rgb::new(0, 0, 0); N],
            shown: [Rgb::new(0, 0, 0); N],
            shows: 0,
        }
    }

    /// Colors as of the last `show`
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.shown
    }

    /// Number of `show` calls so far
    pub const fn shows(&self) -> usize {
        self.shows
    }
}

impl<const N: usize> Default for MemorySink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelSink for MemorySink<N> {
    type Error = Infallible;

    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.shown = self.staged;
        self.shows += 1;
        Ok(())
    }
}
