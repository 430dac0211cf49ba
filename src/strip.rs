//! Shared ownership of the strip between producers.
//!
//! The animation ticker and the live listener both write to one pixel sink.
//! The sink and the live-input watermark sit behind a single
//! `critical-section` mutex, and every update runs "stage all pixels, then
//! flush" inside one critical section, so frames from the two producers are
//! never interleaved.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

use crate::arbiter::IdleArbiter;
use crate::color::Rgb;
use crate::sink::PixelSink;

struct StripState<S> {
    sink: S,
    arbiter: IdleArbiter,
}

/// Pixel sink plus idle arbiter, safe to share between tasks
pub struct SharedStrip<S> {
    inner: Mutex<RefCell<StripState<S>>>,
}

impl<S: PixelSink> SharedStrip<S> {
    pub const fn new(sink: S, idle_threshold: Duration) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(StripState {
                sink,
                arbiter: IdleArbiter::new(idle_threshold),
            })),
        }
    }

    /// Returns true if the animation may paint at `now`
    pub fn is_idle(&self, now: Instant) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).arbiter.is_idle(now))
    }

    pub fn idle_threshold(&self) -> Duration {
        critical_section::with(|cs| self.inner.borrow_ref(cs).arbiter.threshold())
    }

    /// Timestamp of the most recent accepted live frame
    pub fn last_live(&self) -> Option<Instant> {
        critical_section::with(|cs| self.inner.borrow_ref(cs).arbiter.last_live())
    }

    /// Write a live frame and flush
    ///
    /// Moves the watermark to `received_at`. Pixels past the end of `frame`
    /// keep their previous color.
    pub fn apply_live(&self, frame: &[Rgb], received_at: Instant) -> Result<(), S::Error> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow_ref_mut(cs);
            state.arbiter.record_live(received_at);
            state.sink.set_all(frame);
            state.sink.show()
        })
    }

    /// Write an animation frame and flush, unless live input holds the strip
    ///
    /// Idleness is checked again under the lock, so a live frame that arrived
    /// while the animation was rendering wins. Returns whether the frame was
    /// shown.
    pub fn present_animation(&self, frame: &[Rgb], now: Instant) -> Result<bool, S::Error> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow_ref_mut(cs);
            if !state.arbiter.is_idle(now) {
                return Ok(false);
            }
            state.sink.set_all(frame);
            state.sink.show()?;
            Ok(true)
        })
    }

    /// Inspect the sink
    pub fn with_sink<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        critical_section::with(|cs| f(&self.inner.borrow_ref(cs).sink))
    }

    pub fn into_sink(self) -> S {
        self.inner.into_inner().into_inner().sink
    }
}
