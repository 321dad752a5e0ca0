use super::*;
use crate::foundation::core::Rgb8;

fn params(vigor: f64) -> MarkParams {
    MarkParams {
        center: Point::new(200.0, 150.0),
        size: 60.0,
        angle_deg: 0.0,
        width: 11.0,
        vigor,
        ctrl: (0.5, 0.5),
        turns: 0.0,
        color: Rgb8::new(0, 0, 0),
    }
}

#[test]
fn draws_two_passes_over_81_samples() {
    let mut marks: Vec<Mark> = Vec::new();
    render_stroke(&mut marks, &params(0.2), &mut SeededStream::new("s"));
    assert_eq!(marks.len(), 2);

    let (Mark::Polyline {
        points: p1,
        width: w1,
        alpha: a1,
        ..
    }, Mark::Polyline {
        points: p2,
        width: w2,
        alpha: a2,
        ..
    }) = (&marks[0], &marks[1])
    else {
        panic!("stroke must emit polylines");
    };
    assert_eq!(p1.len(), BEZIER_STEPS + 1);
    assert_eq!(p1, p2);
    assert_eq!((*w1, *a1), (11.0, 220));
    assert_eq!((*w2, *a2), (5.0, 110));
}

#[test]
fn jitter_is_bounded_by_vigor() {
    // Centered control point and zero angle: the curve is the horizontal segment.
    for vigor in [0.0, 1.0] {
        let mut marks: Vec<Mark> = Vec::new();
        render_stroke(&mut marks, &params(vigor), &mut SeededStream::new("j"));
        let Mark::Polyline { points, .. } = &marks[0] else {
            panic!("stroke must emit polylines");
        };
        let bound = 2.0 + 3.0 * vigor + 1e-9;
        for (i, pt) in points.iter().enumerate() {
            let ideal_x = 140.0 + 120.0 * i as f64 / BEZIER_STEPS as f64;
            assert!((pt.x - ideal_x).abs() <= bound);
            assert!((pt.y - 150.0).abs() <= bound);
        }
    }
}

#[test]
fn half_width_never_drops_below_one() {
    let mut p = params(0.0);
    p.width = 1.0;
    let mut marks: Vec<Mark> = Vec::new();
    render_stroke(&mut marks, &p, &mut SeededStream::new("thin"));
    let Mark::Polyline { width, .. } = &marks[1] else {
        panic!("stroke must emit polylines");
    };
    assert_eq!(*width, 1.0);
}
