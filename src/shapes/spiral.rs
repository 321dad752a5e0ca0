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

pub const STEPS_PER_TURN: f64 = 48.0;

/// A 2-6 turn spiral drawn as connected segments. Radius grows linearly with the
/// sweep, wobbles with 8 lobes and per-step random scale; width tapers 8 -> 1 and
/// alpha fades 250 -> 150 going outward.
pub fn render_spiral<S: MarkSink + ?Sized>(sink: &mut S, p: &MarkParams, rng: &mut SeededStream) {
    let turns = 2.0 + p.turns * 4.0;
    let steps = floor_usize(turns * STEPS_PER_TURN).max(2);
    let theta = p.angle_deg.to_radians();

    let mut prev: Option<Point> = None;
    for k in 0..=steps {
        let s = k as f64 / steps as f64;
        let phi = theta + s * turns * TAU;
        let r = p.size * s * (1.0 + 0.12 * (8.0 * phi).sin()) * rng.uniform(0.85, 1.15);
        let pt = p.center + Vec2::new(r * phi.cos(), r * phi.sin());

        if let Some(from) = prev {
            sink.push(Mark::Polyline {
                points: vec![from, pt],
                width: (8.0 - 7.0 * s).round().max(1.0),
                color: p.color,
                alpha: alpha_u8(250.0 - 100.0 * s),
            });
        }
        prev = Some(pt);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/spiral.rs"]
mod tests;
