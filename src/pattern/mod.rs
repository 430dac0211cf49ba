//! Pattern library with a compile-time known mode catalog
//!
//! Every mode is a pure function of the animation clock `t` and the pixel
//! index `i`. The only shared input is the [`PermutationTable`], built once
//! at startup and handed to [`PatternLibrary::new`].

mod banded;
mod chaser;
mod flame;
mod fountain;
mod inigo;
mod palette;
mod permutation;
mod starry;
mod tennis;
mod waves;

use core::fmt;

pub use permutation::PermutationTable;

use crate::color::Color;

const MODE_NAME_XMAS_STATIC: &str = "xmas static";
const MODE_NAME_XMAS_SWITCHING: &str = "xmas switching";
const MODE_NAME_XMAS_LEFT: &str = "xmas left";
const MODE_NAME_XMAS_RIGHT: &str = "xmas right";
const MODE_NAME_XMAS_CROSS: &str = "xmas cross";
const MODE_NAME_XMAS_MOMENTUM: &str = "xmas momentum";
const MODE_NAME_WAVES: &str = "waves";
const MODE_NAME_SHARP_WAVES: &str = "sharp waves";
const MODE_NAME_FOUNTAIN: &str = "fountain";
const MODE_NAME_IMPLODE: &str = "implode";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_FLAME: &str = "flame";
const MODE_NAME_TENNIS: &str = "tennis";
const MODE_NAME_CHASER: &str = "chaser";
const MODE_NAME_STARRY_NIGHT: &str = "starry night";
const MODE_NAME_INIGO: &str = "inigo";

const MODE_ID_XMAS_STATIC: u8 = 0;
const MODE_ID_XMAS_SWITCHING: u8 = 1;
const MODE_ID_XMAS_LEFT: u8 = 2;
const MODE_ID_XMAS_RIGHT: u8 = 3;
const MODE_ID_XMAS_CROSS: u8 = 4;
const MODE_ID_XMAS_MOMENTUM: u8 = 5;
const MODE_ID_WAVES: u8 = 6;
const MODE_ID_SHARP_WAVES: u8 = 7;
const MODE_ID_FOUNTAIN: u8 = 8;
const MODE_ID_IMPLODE: u8 = 9;
const MODE_ID_RAINBOW: u8 = 10;
const MODE_ID_FLAME: u8 = 11;
const MODE_ID_TENNIS: u8 = 12;
const MODE_ID_CHASER: u8 = 13;
const MODE_ID_STARRY_NIGHT: u8 = 14;
const MODE_ID_INIGO: u8 = 15;

/// Per-pixel color formula
pub type PatternFn = fn(&Canvas<'_>, u32, usize) -> Color;

/// Known animation modes.
///
/// Declaration order is the default cycling order, see [`Mode::CATALOG`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    XmasStatic = MODE_ID_XMAS_STATIC,
    XmasSwitching = MODE_ID_XMAS_SWITCHING,
    XmasLeft = MODE_ID_XMAS_LEFT,
    XmasRight = MODE_ID_XMAS_RIGHT,
    XmasCross = MODE_ID_XMAS_CROSS,
    XmasMomentum = MODE_ID_XMAS_MOMENTUM,
    Waves = MODE_ID_WAVES,
    SharpWaves = MODE_ID_SHARP_WAVES,
    Fountain = MODE_ID_FOUNTAIN,
    Implode = MODE_ID_IMPLODE,
    Rainbow = MODE_ID_RAINBOW,
    Flame = MODE_ID_FLAME,
    Tennis = MODE_ID_TENNIS,
    Chaser = MODE_ID_CHASER,
    StarryNight = MODE_ID_STARRY_NIGHT,
    Inigo = MODE_ID_INIGO,
}

impl Mode {
    /// Every mode, in cycling order
    pub const CATALOG: [Self; 16] = [
        Self::XmasStatic,
        Self::XmasSwitching,
        Self::XmasLeft,
        Self::XmasRight,
        Self::XmasCross,
        Self::XmasMomentum,
        Self::Waves,
        Self::SharpWaves,
        Self::Fountain,
        Self::Implode,
        Self::Rainbow,
        Self::Flame,
        Self::Tennis,
        Self::Chaser,
        Self::StarryNight,
        Self::Inigo,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_XMAS_STATIC => Self::XmasStatic,
            MODE_ID_XMAS_SWITCHING => Self::XmasSwitching,
            MODE_ID_XMAS_LEFT => Self::XmasLeft,
            MODE_ID_XMAS_RIGHT => Self::XmasRight,
            MODE_ID_XMAS_CROSS => Self::XmasCross,
            MODE_ID_XMAS_MOMENTUM => Self::XmasMomentum,
            MODE_ID_WAVES => Self::Waves,
            MODE_ID_SHARP_WAVES => Self::SharpWaves,
            MODE_ID_FOUNTAIN => Self::Fountain,
            MODE_ID_IMPLODE => Self::Implode,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_FLAME => Self::Flame,
            MODE_ID_TENNIS => Self::Tennis,
            MODE_ID_CHASER => Self::Chaser,
            MODE_ID_STARRY_NIGHT => Self::StarryNight,
            MODE_ID_INIGO => Self::Inigo,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::XmasStatic => MODE_NAME_XMAS_STATIC,
            Self::XmasSwitching => MODE_NAME_XMAS_SWITCHING,
            Self::XmasLeft => MODE_NAME_XMAS_LEFT,
            Self::XmasRight => MODE_NAME_XMAS_RIGHT,
            Self::XmasCross => MODE_NAME_XMAS_CROSS,
            Self::XmasMomentum => MODE_NAME_XMAS_MOMENTUM,
            Self::Waves => MODE_NAME_WAVES,
            Self::SharpWaves => MODE_NAME_SHARP_WAVES,
            Self::Fountain => MODE_NAME_FOUNTAIN,
            Self::Implode => MODE_NAME_IMPLODE,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Flame => MODE_NAME_FLAME,
            Self::Tennis => MODE_NAME_TENNIS,
            Self::Chaser => MODE_NAME_CHASER,
            Self::StarryNight => MODE_NAME_STARRY_NIGHT,
            Self::Inigo => MODE_NAME_INIGO,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::CATALOG.into_iter().find(|mode| mode.as_str() == s)
    }

    /// Pattern function implementing this mode
    pub const fn pattern(self) -> PatternFn {
        match self {
            Self::XmasStatic => banded::xmas_static,
            Self::XmasSwitching => banded::xmas_switching,
            Self::XmasLeft => banded::xmas_left,
            Self::XmasRight => banded::xmas_right,
            Self::XmasCross => banded::xmas_cross,
            Self::XmasMomentum => banded::xmas_momentum,
            Self::Waves => waves::waves,
            Self::SharpWaves => waves::sharp_waves,
            Self::Fountain => fountain::fountain,
            Self::Implode => fountain::implode,
            Self::Rainbow => palette::rainbow,
            Self::Flame => flame::flame,
            Self::Tennis => tennis::tennis,
            Self::Chaser => chaser::chaser,
            Self::StarryNight => starry::starry_night,
            Self::Inigo => inigo::inigo,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of the strip geometry handed to every pattern
#[derive(Debug, Clone, Copy)]
pub struct Canvas<'a> {
    permutation: &'a [usize],
}

impl<'a> Canvas<'a> {
    pub const fn new(permutation: &'a [usize]) -> Self {
        Self { permutation }
    }

    /// Number of pixels in the strip
    pub const fn len(&self) -> usize {
        self.permutation.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    /// Center of the strip, rounded up for odd lengths
    pub const fn center(&self) -> usize {
        let count = self.len();
        let mut center = count / 2;
        if !count.is_multiple_of(2) {
            center += 1;
        }
        center
    }

    /// Permuted index of pixel `i`
    #[inline]
    pub fn permuted(&self, i: usize) -> usize {
        self.permutation.get(i).copied().unwrap_or(i)
    }
}

/// Pure per-pixel color functions for every [`Mode`]
#[derive(Debug, Clone)]
pub struct PatternLibrary<const N: usize> {
    permutation: PermutationTable<N>,
}

impl<const N: usize> PatternLibrary<N> {
    pub const fn new(permutation: PermutationTable<N>) -> Self {
        Self { permutation }
    }

    /// Color of pixel `i` at tick `t` of `mode`
    ///
    /// The result is unclamped. Tolerates any `t`, including ticks past the
    /// mode period that the crossfade asks for.
    #[inline]
    pub fn color_at(&self, mode: Mode, t: u32, i: usize) -> Color {
        (mode.pattern())(&self.canvas(), t, i)
    }

    pub fn canvas(&self) -> Canvas<'_> {
        Canvas::new(self.permutation.as_slice())
    }

    pub fn permutation(&self) -> &PermutationTable<N> {
        &self.permutation
    }
}
