//! Frame scheduling for the animation ticker.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use std::sync::Arc;

use embassy_time::{Duration, Instant};

use crate::driver::AnimationDriver;
use crate::sink::PixelSink;
use crate::strip::SharedStrip;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Whether the animation reached the strip on this tick.
    pub painted: bool,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that drives the animation without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Renders and presents a frame only while no live input holds the strip
/// - Advances the animation clock only on ticks that painted
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = AnimationScheduler::new(driver, strip, tick_interval);
///
/// loop {
///     let result = scheduler.tick(Instant::now())?;
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct AnimationScheduler<S, const N: usize> {
    strip: Arc<SharedStrip<S>>,
    driver: AnimationDriver<N>,
    next_frame: Instant,
    frame_duration: Duration,
    painting: bool,
}

impl<S: PixelSink, const N: usize> AnimationScheduler<S, N> {
    pub fn new(driver: AnimationDriver<N>, strip: Arc<SharedStrip<S>>, frame_duration: Duration) -> Self {
        Self {
            strip,
            driver,
            next_frame: Instant::from_millis(0),
            frame_duration,
            painting: false,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders and presents the current tick if the strip is idle
    /// 3. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, S::Error> {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        let max_drift = Duration::from_millis(max_drift_ms);
        if now.as_millis() > self.next_frame.as_millis() + max_drift.as_millis() {
            self.next_frame = now;
        }

        let painted = self.paint(now)?;
        if painted != self.painting {
            if painted {
                log::info!(
                    "no live input for {} ms, resuming mode '{}' at t={}",
                    self.strip.idle_threshold().as_millis(),
                    self.driver.mode(),
                    self.driver.clock()
                );
            } else {
                log::debug!("live input took over the strip");
            }
            self.painting = painted;
        }
        if painted {
            self.driver.advance();
        }

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            painted,
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Render and present the current tick, skipping the render entirely
    /// while live input is active
    fn paint(&mut self, now: Instant) -> Result<bool, S::Error> {
        if !self.strip.is_idle(now) {
            return Ok(false);
        }
        let frame = self.driver.render();
        self.strip.present_animation(frame, now)
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &AnimationDriver<N> {
        &self.driver
    }

    /// Get a reference to the shared strip.
    pub fn strip(&self) -> &Arc<SharedStrip<S>> {
        &self.strip
    }
}
