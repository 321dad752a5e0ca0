use kurbo::{ParamCurve as _, QuadBez};

use crate::{
    foundation::core::{Point, Vec2},
    random::stream::SeededStream,
    render::mark::{Mark, MarkSink},
    shapes::MarkParams,
};

/// Segments along the Bézier; the curve is sampled at `BEZIER_STEPS + 1` points.
pub const BEZIER_STEPS: usize = 80;

/// A jittered quadratic Bézier drawn twice (full width at 220, half width at 110)
/// to fake a soft-edged brush.
pub fn render_stroke<S: MarkSink + ?Sized>(sink: &mut S, p: &MarkParams, rng: &mut SeededStream) {
    let theta = p.angle_deg.to_radians();
    let reach = Vec2::new(theta.cos(), theta.sin()) * p.size;
    let ctrl = Vec2::new((p.ctrl.0 - 0.5) * p.size * 1.6, (p.ctrl.1 - 0.5) * p.size * 1.6);
    let curve = QuadBez::new(p.center - reach, p.center + ctrl, p.center + reach);

    let jitter = 2.0 + p.vigor * 3.0;
    let points: Vec<Point> = (0..=BEZIER_STEPS)
        .map(|i| {
            let q = curve.eval(i as f64 / BEZIER_STEPS as f64);
            let x = q.x + rng.uniform(-1.0, 1.0) * jitter;
            let y = q.y + rng.uniform(-1.0, 1.0) * jitter;
            Point::new(x, y)
        })
        .collect();

    sink.push(Mark::Polyline {
        points: points.clone(),
        width: p.width,
        color: p.color,
        alpha: 220,
    });
    sink.push(Mark::Polyline {
        points,
        width: (p.width * 0.5).floor().max(1.0),
        color: p.color,
        alpha: 110,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/stroke.rs"]
mod tests;
