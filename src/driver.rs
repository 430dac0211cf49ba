//! Animation driver
//!
//! Owns the `(mode, t)` state machine and turns it into frames. Every mode
//! plays for `mode_period` ticks; during the first `fade_window` ticks of a
//! mode the previous mode keeps running past its own period and is blended
//! out linearly.

use crate::color::{Color, Rgb};
use crate::config::{CompositorConfig, ConfigError};
use crate::math::ticks;
use crate::pattern::{Mode, PatternLibrary};

/// Time-stepped animation over a strip of `N` pixels
pub struct AnimationDriver<const N: usize> {
    // Configuration
    library: PatternLibrary<N>,
    catalog: &'static [Mode],
    mode_period: u32,
    fade_window: u32,

    // Internal state
    mode_index: usize,
    t: u32,
    frame_buffer: [Rgb; N],
}

impl<const N: usize> AnimationDriver<N> {
    /// Create a driver positioned at the first catalog mode, `t = 0`
    pub fn new(library: PatternLibrary<N>, config: &CompositorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            library,
            catalog: config.catalog,
            mode_period: config.mode_period,
            fade_window: config.fade_window,
            mode_index: 0,
            t: 0,
            frame_buffer: [Rgb::default(); N],
        })
    }

    /// Index of the active mode in the catalog
    pub const fn mode_index(&self) -> usize {
        self.mode_index
    }

    /// Animation clock of the active mode
    pub const fn clock(&self) -> u32 {
        self.t
    }

    pub fn mode(&self) -> Mode {
        self.catalog[self.mode_index]
    }

    /// Mode that was active before the current one, wrapping around
    pub fn previous_mode(&self) -> Mode {
        let len = self.catalog.len();
        self.catalog[(self.mode_index + len - 1) % len]
    }

    pub const fn is_crossfading(&self) -> bool {
        self.t < self.fade_window
    }

    pub fn library(&self) -> &PatternLibrary<N> {
        &self.library
    }

    /// Unclamped color of pixel `i` for the current tick, crossfade included
    pub fn color(&self, i: usize) -> Color {
        let current = self.library.color_at(self.mode(), self.t, i);
        if !self.is_crossfading() {
            return current;
        }

        // Previous mode continues its clock past its own period
        let previous = self
            .library
            .color_at(self.previous_mode(), self.t.saturating_add(self.mode_period), i);
        let progress = ticks(self.t) / ticks(self.fade_window);
        previous.lerp(current, progress)
    }

    /// Render the current tick into the frame buffer
    ///
    /// Does not advance the clock, see [`AnimationDriver::advance`].
    pub fn render(&mut self) -> &[Rgb] {
        let frame: [Rgb; N] = core::array::from_fn(|i| self.color(i).to_rgb());
        self.frame_buffer = frame;
        &self.frame_buffer
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Move to the next tick, switching modes at the end of a period
    pub fn advance(&mut self) {
        self.t += 1;
        if self.t < self.mode_period {
            return;
        }

        self.t = 0;
        self.mode_index = (self.mode_index + 1) % self.catalog.len();
        log::info!(
            "switching to mode '{}' ({}/{})",
            self.mode(),
            self.mode_index + 1,
            self.catalog.len()
        );
    }
}
