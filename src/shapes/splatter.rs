use crate::{
    foundation::{
        core::Vec2,
        math::{alpha_u8, floor_usize},
    },
    random::stream::SeededStream,
    render::mark::{Mark, MarkSink},
    shapes::MarkParams,
};

/// Half-angle of the spray cone, in radians (about 51 degrees).
pub const SPRAY_HALF_ANGLE: f64 = 0.9;

/// 60-140 dots sprayed along a cone. Distance grows as `t^1.2`, so density thins
/// outward; dot radius and opacity shrink with distance.
pub fn render_splatter<S: MarkSink + ?Sized>(
    sink: &mut S,
    p: &MarkParams,
    rng: &mut SeededStream,
) {
    let count = 60 + floor_usize(p.vigor * 80.0);
    let spread = 120.0 + p.size.floor();
    let theta = p.angle_deg.to_radians();

    for i in 0..count {
        let t = (i + 1) as f64 / count as f64;
        let dist = 5.0 + spread * t.powf(1.2) * rng.uniform(0.5, 1.0);
        let phi = theta + rng.uniform(-SPRAY_HALF_ANGLE, SPRAY_HALF_ANGLE);
        let radius = 1.0 + (rng.uniform(0.0, 5.0) * (1.2 - t)).floor();

        sink.push(Mark::Dot {
            center: p.center + Vec2::new(dist * phi.cos(), dist * phi.sin()),
            radius,
            color: p.color,
            alpha: alpha_u8(80.0 + 140.0 * (1.0 - t)),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/splatter.rs"]
mod tests;
