use jigsawkit_core::Point;
use jigsawkit_path::{parse_path, CenterArc, PathIR};

#[test]
fn test_half_circle_midpoint_offset_for_both_sweeps() {
    for (sweep, expected_y) in [("0", 50.0), ("1", -50.0)] {
        let path: PathIR = format!("M 0 0 A 50 50 0 0 {} 100 0", sweep)
            .parse()
            .unwrap();
        let line = path.flatten(16);
        let mid = line.points[8];
        let center = Point::new(50.0, 0.0);

        assert!((mid.distance_to(center) - 50.0).abs() < 1e-6);
        assert!((mid.y - expected_y).abs() < 1e-6, "sweep {}", sweep);
    }
}

#[test]
fn test_every_arc_sample_lies_on_circle() {
    let from = Point::new(20.0, 80.0);
    let to = Point::new(80.0, 20.0);
    let arc = CenterArc::from_endpoints(from, 60.0, 60.0, 0.0, true, true, to).unwrap();

    let mut path = PathIR::new();
    path.move_to(from).arc_to(60.0, 60.0, 0.0, true, true, to);
    for p in path.flatten(32).points {
        assert!((p.distance_to(arc.center) - 60.0).abs() < 1e-6);
    }
}

#[test]
fn test_undersized_radius_still_reaches_endpoint() {
    let parsed = parse_path("M 0 0 A 1 1 0 0 1 300 40");
    assert!(parsed.is_clean());
    let line = parsed.path.flatten(16);
    assert_eq!(line.len(), 17);
    let last = line.points[16];
    assert!(last.distance_to(Point::new(300.0, 40.0)) < 1e-6);
    assert!(line.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn test_full_circle_as_two_arcs_closes() {
    let path: PathIR = "M 300 10 A 290 290 0 1 1 300 590 A 290 290 0 1 1 300 10 Z"
        .parse()
        .unwrap();
    let line = path.flatten(16);
    assert!(line.closed);
    // The second arc lands on the start point, so ClosePath adds nothing.
    assert_eq!(line.len(), 1 + 16 + 16);
    let bounds = line.bounds().unwrap();
    assert!((bounds.width() - 580.0).abs() < 1.0);
    assert!((bounds.height() - 580.0).abs() < 1e-6);
}
