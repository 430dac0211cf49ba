use embassy_time::{Duration, Instant};

/// Decides whether the animation may paint
///
/// Live input is strictly preemptive: after a live frame the animation stays
/// off the strip until more than `threshold` has elapsed.
#[derive(Debug, Clone, Copy)]
pub struct IdleArbiter {
    threshold: Duration,
    last_live: Option<Instant>,
}

impl IdleArbiter {
    pub const fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            last_live: None,
        }
    }

    /// Move the live-input watermark to `at`
    pub fn record_live(&mut self, at: Instant) {
        self.last_live = Some(at);
    }

    /// Timestamp of the most recent live frame
    pub const fn last_live(&self) -> Option<Instant> {
        self.last_live
    }

    pub const fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Returns true if the animation may write to the strip at `now`
    ///
    /// A watermark later than `now` counts as fresh live input.
    pub fn is_idle(&self, now: Instant) -> bool {
        let Some(last_live) = self.last_live else {
            return true;
        };
        now.checked_duration_since(last_live)
            .is_some_and(|elapsed| elapsed > self.threshold)
    }
}
