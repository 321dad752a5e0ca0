use super::*;

#[test]
fn accessors_read_every_variant() {
    let c = Rgb8::new(7, 8, 9);
    let marks = [
        Mark::Polygon {
            points: vec![Point::ZERO; 3],
            color: c,
            alpha: 1,
        },
        Mark::Polyline {
            points: vec![Point::ZERO; 2],
            width: 2.0,
            color: c,
            alpha: 2,
        },
        Mark::Dot {
            center: Point::ZERO,
            radius: 1.0,
            color: c,
            alpha: 3,
        },
    ];
    let alphas: Vec<u8> = marks.iter().map(Mark::alpha).collect();
    assert_eq!(alphas, vec![1, 2, 3]);
    assert!(marks.iter().all(|m| m.color() == c));
}

#[test]
fn recording_sink_keeps_push_order() {
    let mut sink: Vec<Mark> = Vec::new();
    for alpha in [30, 10, 20] {
        MarkSink::push(
            &mut sink,
            Mark::Dot {
                center: Point::new(1.0, 1.0),
                radius: 2.0,
                color: Rgb8::new(0, 0, 0),
                alpha,
            },
        );
    }
    let alphas: Vec<u8> = sink.iter().map(Mark::alpha).collect();
    assert_eq!(alphas, vec![30, 10, 20]);
}
