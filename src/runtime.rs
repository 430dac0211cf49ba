//! Wiring of the two producers onto a tokio runtime.
//!
//! The animation ticker runs as its own task on a fixed period; the live
//! listener runs on the caller's task and blocks on its source. Both share
//! one [`SharedStrip`].

use std::convert::Infallible;
use std::sync::Arc;

use embassy_time::Instant;
use thiserror::Error;
use tokio::task::JoinError;

use crate::config::{CompositorConfig, ConfigError};
use crate::driver::AnimationDriver;
use crate::frame_scheduler::AnimationScheduler;
use crate::listener::{FrameSource, LiveListener};
use crate::pattern::PatternLibrary;
use crate::sink::PixelSink;
use crate::strip::SharedStrip;

/// Fatal runtime failures
#[derive(Debug, Error)]
pub enum RuntimeError<E> {
    #[error("pixel sink failed: {0}")]
    Sink(E),
    #[error("animation task stopped: {0}")]
    Task(#[from] JoinError),
}

/// Build both producers around one shared strip
pub fn compose<S: PixelSink, const N: usize>(
    sink: S,
    library: PatternLibrary<N>,
    config: &CompositorConfig,
) -> Result<(AnimationScheduler<S, N>, LiveListener<S, N>), ConfigError> {
    let driver = AnimationDriver::new(library, config)?;
    let strip = Arc::new(SharedStrip::new(sink, config.idle_threshold));
    let scheduler = AnimationScheduler::new(driver, Arc::clone(&strip), config.tick_interval);
    Ok((scheduler, LiveListener::new(strip)))
}

/// Tick the animation forever
///
/// Only returns if the sink fails.
pub async fn run_animation<S: PixelSink, const N: usize>(
    mut scheduler: AnimationScheduler<S, N>,
) -> Result<Infallible, S::Error> {
    loop {
        let frame = scheduler.tick(Instant::now())?;
        tokio::time::sleep(std::time::Duration::from_micros(
            frame.sleep_duration.as_micros(),
        ))
        .await;
    }
}

/// Run the ticker task and the listener until a fatal error
///
/// A sink failure in either producer stops both and is returned right away.
/// When the source closes the listener stops, and the animation keeps
/// running on its own.
pub async fn run<S, F, const N: usize>(
    scheduler: AnimationScheduler<S, N>,
    listener: LiveListener<S, N>,
    source: F,
) -> Result<(), RuntimeError<S::Error>>
where
    S: PixelSink + Send + 'static,
    S::Error: Send + 'static,
    F: FrameSource,
{
    let mut animation = tokio::spawn(run_animation(scheduler));

    tokio::select! {
        listened = listener.run(source) => {
            if let Err(err) = listened {
                animation.abort();
                return Err(RuntimeError::Sink(err));
            }
        }
        stopped = &mut animation => return animation_stopped(stopped),
    }

    animation_stopped(animation.await)
}

fn animation_stopped<E>(
    stopped: Result<Result<Infallible, E>, JoinError>,
) -> Result<(), RuntimeError<E>> {
    match stopped? {
        Ok(never) => match never {},
        Err(err) => Err(RuntimeError::Sink(err)),
    }
}
