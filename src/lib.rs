//! Ambient animation and live-frame compositor for long LED strips.
//!
//! Two producers share one strip: a time-stepped animation cycling through a
//! catalog of per-pixel patterns, and a stream of live frames that takes over
//! the strip whenever it is active.

pub mod arbiter;
pub mod color;
pub mod config;
pub mod driver;
pub mod frame;
pub mod frame_scheduler;
pub mod listener;
pub mod math;
pub mod pattern;
pub mod runtime;
pub mod sink;
pub mod strip;

pub use arbiter::IdleArbiter;
pub use config::{CompositorConfig, ConfigError};
pub use driver::AnimationDriver;
pub use frame::{FrameError, LiveFrame, decode_frame};
pub use frame_scheduler::{AnimationScheduler, FrameResult};
pub use listener::{FrameSource, LineSource, ListenOutcome, LiveListener};
pub use pattern::{Mode, PatternLibrary, PermutationTable};
pub use runtime::{RuntimeError, compose, run, run_animation};
pub use sink::{MemorySink, PixelSink, SmartLedsSink};
pub use strip::SharedStrip;

pub use color::{Color, Rgb};
pub use embassy_time::{Duration, Instant};
