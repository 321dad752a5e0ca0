use std::f64::consts::TAU;

use crate::{
    foundation::{
        core::Vec2,
        math::{alpha_u8, floor_usize},
    },
    random::stream::SeededStream,
    render::mark::{Mark, MarkSink},
    shapes::MarkParams,
};

/// 3-5 irregular rings, each a closed polygon of 20-44 points with a 3-lobe wobble.
/// Alpha runs from 190 on the first ring down to 110 on the last.
pub fn render_blob<S: MarkSink + ?Sized>(sink: &mut S, p: &MarkParams, rng: &mut SeededStream) {
    let rings = 3 + floor_usize(rng.uniform(0.0, 3.0)).min(2);
    for ring in 0..rings {
        let alpha = alpha_u8(110.0 + 80.0 * (1.0 - ring as f64 / (rings as f64 - 1.0 + 1e-6)));
        let n = 20 + floor_usize(rng.uniform(0.0, 25.0)).min(24);

        let points = (0..n)
            .map(|k| {
                let a = TAU * k as f64 / n as f64;
                let rr = p.size
                    * (0.6 + 0.5 * rng.unit())
                    * (0.9 + 0.15 * (3.0 * a + rng.unit() * TAU).sin());
                p.center + Vec2::new(rr * a.cos(), rr * a.sin())
            })
            .collect();

        sink.push(Mark::Polygon {
            points,
            color: p.color,
            alpha,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/blob.rs"]
mod tests;
