//! Procedural fire
//!
//! The strip is split into three regions. The middle third is the core:
//! a handful of sparks wander around, each at a position projected from a
//! sum of sines whose frequencies drift slightly from spark to spark. The
//! outer thirds are a glowing bed built from rectified sines, hottest next
//! to the core. The right bed mirrors the left one.

use super::Canvas;
use crate::color::{Color, mirror_index};
use crate::math::{coord, positive_sin, ticks};

/// Sparks wandering through the core
const SPARKS: usize = 6;
/// (frequency in radians per tick, weight); weights sum to 1
const CORE_TERMS: [(f32, f32); 3] = [(0.031, 0.5), (0.057, 0.3), (0.113, 0.2)];
/// Relative frequency drift between consecutive sparks
const SPARK_DRIFT: f32 = 0.17;
/// Phase step between consecutive sparks
const SPARK_PHASE: f32 = 1.3;

const SPARK: Color = Color::new(255.0, 190.0, 70.0);
const EMBER: Color = Color::new(40.0, 6.0, 0.0);

/// (radians per pixel, radians per tick) of each bed term
const BED_TERMS: [(f32, f32); 3] = [(0.21, 0.013), (0.13, -0.021), (0.37, 0.034)];
const BED_OFFSET: f32 = -0.45;
const BED_SCALE: f32 = 0.55;
/// Heat added right at the core boundary
const BOUNDARY_BOOST: f32 = 1.1;
/// Pixels over which the boundary boost decays by `1/e`
const BOUNDARY_FALLOFF: f32 = 10.0;

pub(super) fn flame(canvas: &Canvas<'_>, t: u32, i: usize) -> Color {
    let len = canvas.len();
    let third = len / 3;
    if (third..len - third).contains(&i) {
        core(t, i, third, len - 2 * third)
    } else {
        bed(t, mirror_index(i, len), third)
    }
}

fn core(t: u32, i: usize, start: usize, width: usize) -> Color {
    let half_width = coord(width) / 2.0;
    let middle = coord(start) + half_width;
    let pixel = coord(i);

    for spark in 0..SPARKS {
        let k = coord(spark);
        let drift = 1.0 + k * SPARK_DRIFT;
        let offset: f32 = CORE_TERMS
            .iter()
            .map(|&(frequency, weight)| {
                weight * libm::sinf(ticks(t) * frequency * drift + k * SPARK_PHASE)
            })
            .sum();

        let projected = middle + offset * half_width;
        if libm::fabsf(projected - pixel) < 0.5 {
            // Later sparks are dimmer
            return SPARK * (1.0 - k / coord(SPARKS) * 0.5);
        }
    }
    EMBER
}

fn bed(t: u32, x: usize, edge: usize) -> Color {
    let pos = coord(x);
    let field: f32 = BED_TERMS
        .iter()
        .map(|&(number, speed)| positive_sin(pos * number + ticks(t) * speed))
        .sum();

    let distance = (coord(edge) - pos).max(0.0);
    let heat = (field + BED_OFFSET) * BED_SCALE
        + BOUNDARY_BOOST * libm::expf(-distance / BOUNDARY_FALLOFF);

    Color::new(255.0 * heat, 120.0 * heat * heat, 30.0 * heat * heat * heat)
}
