use super::*;
use crate::foundation::core::Rgb8;

fn params() -> MarkParams {
    MarkParams {
        center: Point::new(50.0, 50.0),
        size: 100.0,
        angle_deg: 0.0,
        width: 7.0,
        vigor: 0.0,
        ctrl: (0.5, 0.5),
        turns: 0.0,
        color: Rgb8::new(2, 2, 2),
    }
}

fn curves(seed: &str) -> Vec<(Vec<Point>, f64, u8)> {
    let mut marks: Vec<Mark> = Vec::new();
    render_wave(&mut marks, &params(), &mut SeededStream::new(seed));
    marks
        .into_iter()
        .map(|m| match m {
            Mark::Polyline {
                points,
                width,
                alpha,
                ..
            } => (points, width, alpha),
            other => panic!("wave emitted {other:?}"),
        })
        .collect()
}

#[test]
fn wave_count_and_closure() {
    for seed in ["w1", "w2", "w3", "w4"] {
        let c = curves(seed);
        assert!((3..=7).contains(&c.len()));
        for (points, width, _) in &c {
            assert_eq!(points.len(), WAVE_SAMPLES + 1);
            assert_eq!(points.first(), points.last());
            assert_eq!(*width, 3.0);
        }
    }
}

#[test]
fn later_waves_are_fainter() {
    let c = curves("fade");
    assert_eq!(c[0].2, 200);
    assert!(c.windows(2).all(|w| w[0].2 > w[1].2));
}

#[test]
fn radius_stays_within_base_plus_amplitude() {
    let p = params();
    for (points, _, _) in curves("env") {
        for pt in points {
            let r = (pt - p.center).hypot();
            assert!(r <= p.size * (1.0 + 0.5) + 1e-9);
        }
    }
}
