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

/// 40-120 particles. Distance is the mean of two uniform draws (triangular), and
/// particles shrink and fade the farther out they land.
pub fn render_cloud<S: MarkSink + ?Sized>(sink: &mut S, p: &MarkParams, rng: &mut SeededStream) {
    let count = 40 + floor_usize(p.vigor * 80.0);

    for _ in 0..count {
        let d = p.size * (rng.unit() + rng.unit()) / 2.0;
        let phi = rng.uniform(0.0, TAU);
        let f = (d / p.size).clamp(0.0, 1.0);
        let radius = 1.0 + (rng.uniform(0.0, 6.0) * (1.0 - f)).floor();

        sink.push(Mark::Dot {
            center: p.center + Vec2::new(d * phi.cos(), d * phi.sin()),
            radius,
            color: p.color,
            alpha: alpha_u8(60.0 + 150.0 * (1.0 - f)),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/cloud.rs"]
mod tests;
