//! Startup configuration of the compositor

use embassy_time::Duration;
use thiserror::Error;

use crate::pattern::Mode;

/// Default animation tick interval (100 ticks per second)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Default time without live input before the animation takes over again
pub const DEFAULT_IDLE_THRESHOLD: Duration = Duration::from_millis(1000);

/// Default crossfade length at every mode boundary, in ticks
pub const DEFAULT_FADE_WINDOW: u32 = 20;

/// Default number of ticks each mode plays for (30 seconds at the default
/// tick interval)
pub const DEFAULT_MODE_PERIOD: u32 = 3000;

/// Errors reported by [`CompositorConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("mode catalog is empty")]
    EmptyCatalog,
    #[error("mode period must be at least one tick")]
    ZeroModePeriod,
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("fade window of {fade_window} ticks exceeds the mode period of {mode_period} ticks")]
    FadeWindowTooLong { fade_window: u32, mode_period: u32 },
}

/// Configuration for the compositor
#[derive(Debug, Clone, Copy)]
pub struct CompositorConfig {
    /// Interval between animation ticks
    pub tick_interval: Duration,
    /// Live input suppresses the animation until this much time passed
    pub idle_threshold: Duration,
    /// Number of ticks blended with the previous mode after a switch
    pub fade_window: u32,
    /// Number of ticks each mode plays for
    pub mode_period: u32,
    /// Modes in cycling order
    pub catalog: &'static [Mode],
}

impl CompositorConfig {
    pub const DEFAULT: Self = Self {
        tick_interval: DEFAULT_TICK_INTERVAL,
        idle_threshold: DEFAULT_IDLE_THRESHOLD,
        fade_window: DEFAULT_FADE_WINDOW,
        mode_period: DEFAULT_MODE_PERIOD,
        catalog: &Mode::CATALOG,
    };

    /// Check the invariants the animation driver relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.mode_period == 0 {
            return Err(ConfigError::ZeroModePeriod);
        }
        if self.tick_interval.as_ticks() == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.fade_window > self.mode_period {
            return Err(ConfigError::FadeWindowTooLong {
                fade_window: self.fade_window,
                mode_period: self.mode_period,
            });
        }
        Ok(())
    }
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
