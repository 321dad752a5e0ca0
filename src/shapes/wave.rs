use std::f64::consts::TAU;

use crate::{
    foundation::{
        core::{Point, Vec2},
        math::{alpha_u8, floor_usize},
    },
    random::stream::SeededStream,
    render::mark::{Mark, MarkSink},
    shapes::MarkParams,
};

/// Samples per revolution; the closed curve carries one extra (repeated) point.
pub const WAVE_SAMPLES: usize = 96;

/// 3-7 overlapping rosettes, `r(a) = base + amp * sin(freq * a + phase)`, each
/// with its own phase, frequency (2-6) and amplitude (20-50% of size).
pub fn render_wave<S: MarkSink + ?Sized>(sink: &mut S, p: &MarkParams, rng: &mut SeededStream) {
    let waves = 3 + floor_usize(rng.uniform(0.0, 5.0)).min(4);
    let line_width = (p.width * 0.5).floor().max(1.0);

    for j in 0..waves {
        let phase = rng.uniform(0.0, TAU);
        let freq = (2 + floor_usize(rng.uniform(0.0, 5.0)).min(4)) as f64;
        let amp = p.size * rng.uniform(0.2, 0.5);
        let frac = j as f64 / waves as f64;
        let base = p.size * (0.5 + 0.5 * frac);

        let mut points: Vec<Point> = (0..WAVE_SAMPLES)
            .map(|k| {
                let a = TAU * k as f64 / WAVE_SAMPLES as f64;
                let r = base + amp * (freq * a + phase).sin();
                p.center + Vec2::new(r * a.cos(), r * a.sin())
            })
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }

        sink.push(Mark::Polyline {
            points,
            width: line_width,
            color: p.color,
            alpha: alpha_u8(200.0 - 110.0 * frac),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/wave.rs"]
mod tests;
