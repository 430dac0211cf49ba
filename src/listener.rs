//! Live frame listener
//!
//! Waits on a [`FrameSource`], decodes every message and hands valid frames
//! to the shared strip. Malformed messages are logged and skipped.

use std::sync::Arc;

use embassy_time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Split};
use tokio::sync::mpsc;

use crate::frame::decode_frame;
use crate::sink::PixelSink;
use crate::strip::SharedStrip;

/// Inbound stream of live frame messages
///
/// `None` means the connection closed.
pub trait FrameSource {
    fn next_message(&mut self) -> impl Future<Output = Option<String>> + Send;
}

impl FrameSource for mpsc::Receiver<String> {
    async fn next_message(&mut self) -> Option<String> {
        self.recv().await
    }
}

/// One message per line, e.g. a websocket bridge piped into stdin
///
/// Lines that are not valid UTF-8 are discarded like any other malformed
/// message. Only end of input or a read failure closes the source.
pub struct LineSource<R> {
    lines: Split<R>,
}

impl<R: AsyncBufRead + Unpin> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
        }
    }
}

impl<R> FrameSource for LineSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_message(&mut self) -> Option<String> {
        loop {
            let line = match self.lines.next_segment().await {
                Ok(line) => line?,
                Err(err) => {
                    log::warn!("live frame source failed: {err}");
                    return None;
                }
            };
            match String::from_utf8(line) {
                Ok(text) => return Some(text),
                Err(err) => log::warn!("discarding live frame: {err}"),
            }
        }
    }
}

/// What happened to one inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenOutcome {
    /// Frame written to the strip
    Applied { pixels: usize },
    /// Message could not be decoded, nothing changed
    Discarded,
}

/// Consumer of a live frame source for a strip of `N` pixels
pub struct LiveListener<S, const N: usize> {
    strip: Arc<SharedStrip<S>>,
}

impl<S: PixelSink, const N: usize> LiveListener<S, N> {
    pub const fn new(strip: Arc<SharedStrip<S>>) -> Self {
        Self { strip }
    }

    /// Decode and apply one message received at `received_at`
    ///
    /// Only sink failures are errors; a malformed message is reported as
    /// [`ListenOutcome::Discarded`] and leaves the watermark untouched.
    pub fn handle_message(&self, text: &str, received_at: Instant) -> Result<ListenOutcome, S::Error> {
        let frame = match decode_frame::<N>(text) {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("discarding live frame: {err}");
                return Ok(ListenOutcome::Discarded);
            }
        };

        self.strip.apply_live(&frame, received_at)?;
        log::trace!("applied live frame with {} pixels", frame.len());
        Ok(ListenOutcome::Applied {
            pixels: frame.len(),
        })
    }

    /// Process messages until the source closes
    pub async fn run<F: FrameSource>(&self, mut source: F) -> Result<(), S::Error> {
        while let Some(message) = source.next_message().await {
            self.handle_message(&message, Instant::now())?;
        }
        log::info!("live frame source closed, animation resumes after the idle threshold");
        Ok(())
    }

    pub fn strip(&self) -> &Arc<SharedStrip<S>> {
        &self.strip
    }
}
