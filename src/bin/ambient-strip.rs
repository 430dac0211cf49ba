//! Terminal front end for the compositor
//!
//! Reads live frames from stdin, one JSON message per line, and previews the
//! strip as a row of true-color blocks on stdout. Pipe a websocket bridge
//! into stdin to drive it from the browser client.

use std::io::{self, Stdout, Write};

use ambient_strip::config::{DEFAULT_FADE_WINDOW, DEFAULT_MODE_PERIOD};
use ambient_strip::{
    CompositorConfig, Duration, LineSource, PatternLibrary, PermutationTable, PixelSink, Rgb, compose,
    run,
};
use clap::Parser;
use tokio::io::BufReader;

/// Number of LEDs on the strip
const LED_COUNT: usize = 600;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Interval between animation ticks, in milliseconds
    #[arg(long, default_value_t = 10)]
    tick_ms: u64,
    /// Time without live frames before the animation resumes, in milliseconds
    #[arg(long, default_value_t = 1000)]
    idle_ms: u64,
    /// Crossfade length at mode boundaries, in ticks
    #[arg(long, default_value_t = DEFAULT_FADE_WINDOW)]
    fade_window: u32,
    /// Ticks each mode plays for
    #[arg(long, default_value_t = DEFAULT_MODE_PERIOD)]
    mode_period: u32,
    /// Seed for the twinkle permutation; random if omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Width of the terminal preview, in characters
    #[arg(long, default_value_t = 120)]
    columns: usize,
}

/// Downsampled true-color preview on stdout
struct TerminalSink<const N: usize> {
    pixels: [Rgb; N],
    columns: usize,
    out: Stdout,
}

impl<const N: usize> TerminalSink<N> {
    fn new(columns: usize) -> Self {
        Self {
            pixels: [Rgb::default(); N],
            columns: columns.clamp(1, N.max(1)),
            out: io::stdout(),
        }
    }
}

impl<const N: usize> PixelSink for TerminalSink<N> {
    type Error = io::Error;

    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        let mut out = self.out.lock();
        out.write_all(b"\r")?;
        for column in 0..self.columns {
            let Some(pixel) = self.pixels.get(column * N / self.columns) else {
                break;
            };
            write!(out, "\x1b[38;2;{};{};{}m\u{2588}", pixel.r, pixel.g, pixel.b)?;
        }
        out.write_all(b"\x1b[0m")?;
        out.flush()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CompositorConfig {
        tick_interval: Duration::from_millis(args.tick_ms),
        idle_threshold: Duration::from_millis(args.idle_ms),
        fade_window: args.fade_window,
        mode_period: args.mode_period,
        ..CompositorConfig::DEFAULT
    };

    let permutation = match args.seed {
        Some(seed) => PermutationTable::<LED_COUNT>::from_seed(seed),
        None => PermutationTable::default(),
    };
    let sink = TerminalSink::<LED_COUNT>::new(args.columns);
    let (scheduler, listener) = compose(sink, PatternLibrary::new(permutation), &config)?;

    log::info!(
        "driving {} pixels, {} modes of {} ticks every {} ms",
        LED_COUNT,
        config.catalog.len(),
        config.mode_period,
        args.tick_ms
    );

    let source = LineSource::new(BufReader::new(tokio::io::stdin()));
    run(scheduler, listener, source).await?;
    Ok(())
}
