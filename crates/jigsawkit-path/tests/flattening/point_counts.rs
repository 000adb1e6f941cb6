use jigsawkit_core::Point;
use jigsawkit_path::{Flattener, PathCommand, PathIR};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn drawing_command() -> impl Strategy<Value = PathCommand> {
    prop_oneof![
        point().prop_map(PathCommand::LineTo),
        (point(), point(), point()).prop_map(|(ctrl1, ctrl2, to)| PathCommand::CubicTo {
            ctrl1,
            ctrl2,
            to
        }),
        (point(), point()).prop_map(|(ctrl, to)| PathCommand::QuadTo { ctrl, to }),
        (1.0..200.0f64, 1.0..200.0f64, 0.0..360.0f64, any::<bool>(), any::<bool>(), point())
            .prop_map(|(rx, ry, x_axis_rotation, large_arc, sweep, to)| {
                PathCommand::ArcTo {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    to,
                }
            }),
    ]
}

proptest! {
    #[test]
    fn prop_segment_point_count(
        from in point(),
        command in drawing_command(),
        resolution in 1usize..40,
    ) {
        let mut out = Vec::new();
        Flattener::new(resolution).flatten_segment(from, &command, &mut out);

        let end = command.end_point().unwrap();
        let degenerate_arc = matches!(command, PathCommand::ArcTo { .. })
            && from.approx_eq(end, 1e-12);
        let expected = if command.is_curve() && !degenerate_arc { resolution } else { 1 };

        prop_assert_eq!(out.len(), expected);
        prop_assert!(out[out.len() - 1].distance_to(end) < 1e-6);
    }

    #[test]
    fn prop_whole_path_point_count(
        start in point(),
        commands in prop::collection::vec(drawing_command(), 0..12),
        resolution in 1usize..24,
    ) {
        let mut path = PathIR::new();
        path.move_to(start);
        let mut expected = 1;
        let mut current = start;
        for command in &commands {
            let end = command.end_point().unwrap();
            let degenerate = current.approx_eq(end, 1e-12);
            expected += match command {
                PathCommand::LineTo(_) => 1,
                PathCommand::ArcTo { .. } if degenerate => 1,
                _ => resolution,
            };
            current = end;
            path.push(*command);
        }

        let line = path.flatten(resolution);
        prop_assert_eq!(line.len(), expected);
        prop_assert!(!line.closed);
        prop_assert!(line.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}

#[test]
fn test_mixed_path_counts() {
    let path: PathIR = "M 0 0 L 10 0 C 10 5 15 10 20 10 Q 25 10 25 5 A 5 5 0 0 1 35 5 Z"
        .parse()
        .unwrap();
    let line = path.flatten(16);
    // moveto + line + three curves + the closing point back to the start.
    assert_eq!(line.len(), 1 + 1 + 16 * 3 + 1);
    assert_eq!(line.points[line.len() - 1], Point::new(0.0, 0.0));
}
