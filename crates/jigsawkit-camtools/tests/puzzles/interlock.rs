use jigsawkit_camtools::piece_builder::{classic_edge, dovetail_edge};
use jigsawkit_camtools::{
    GridPosition, PieceShape, PieceStyle, Polarity, Puzzle, PuzzleForm, PuzzleLayoutEngine,
    PuzzleParameters, Sector,
};
use jigsawkit_core::Point;
use jigsawkit_path::{PathCommand, PathIR};

fn classic(cols: u32, rows: u32, seed: u32) -> Puzzle {
    PuzzleLayoutEngine::new(PuzzleParameters {
        piece_style: PieceStyle::Classic,
        columns: cols,
        rows,
        seed: Some(seed),
        ..PuzzleParameters::default()
    })
    .unwrap()
    .layout()
}

fn edge_path(from: Point, to: Point, outward: Point, shape: &PieceShape, side: usize) -> PathIR {
    let PieceShape::RectClassic {
        tab_size, edges, ..
    } = *shape
    else {
        panic!("classic piece expected");
    };
    let polarity = [edges.top, edges.right, edges.bottom, edges.left][side];
    let mut path = PathIR::new();
    path.move_to(from);
    classic_edge(&mut path, from, to, outward, polarity, tab_size);
    path
}

fn corners(shape: &PieceShape) -> [Point; 4] {
    match shape {
        PieceShape::RectClassic { cell, .. } => cell.corners(),
        other => panic!("classic piece expected, got {:?}", other),
    }
}

fn contains_run(haystack: &[PathCommand], needle: &[PathCommand]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_shared_vertical_seams_trace_the_same_curve() {
    let puzzle = classic(4, 3, 31337);
    let right = Point::new(1.0, 0.0);

    for row in 0..3 {
        for col in 0..3 {
            let a = puzzle.piece_at(GridPosition::Cell { row, col }).unwrap();
            let b = puzzle
                .piece_at(GridPosition::Cell { row, col: col + 1 })
                .unwrap();
            let [_, tr, br, _] = corners(&a.shape);
            let [b_tl, _, _, b_bl] = corners(&b.shape);

            let a_side = edge_path(tr, br, right, &a.shape, 1);
            let b_side = edge_path(b_bl, b_tl, -right, &b.shape, 3);

            // Each piece's outline really contains its side of the seam.
            assert!(contains_run(a.path.commands(), &a_side.commands()[1..]));
            assert!(contains_run(b.path.commands(), &b_side.commands()[1..]));

            let mut forward = a_side.flatten(16).points;
            forward.reverse();
            let backward = b_side.flatten(16).points;
            assert_eq!(forward.len(), backward.len());
            for (p, q) in forward.iter().zip(&backward) {
                assert!(p.approx_eq(*q, 1e-9), "seam r{} c{}: {:?} vs {:?}", row, col, p, q);
            }
        }
    }
}

#[test]
fn test_shared_horizontal_seams_trace_the_same_curve() {
    let puzzle = classic(3, 4, 99);
    let down = Point::new(0.0, 1.0);

    for row in 0..3 {
        for col in 0..3 {
            let a = puzzle.piece_at(GridPosition::Cell { row, col }).unwrap();
            let b = puzzle
                .piece_at(GridPosition::Cell { row: row + 1, col })
                .unwrap();
            let [_, _, br, bl] = corners(&a.shape);
            let [b_tl, b_tr, _, _] = corners(&b.shape);

            let a_side = edge_path(br, bl, down, &a.shape, 2);
            let b_side = edge_path(b_tl, b_tr, -down, &b.shape, 0);

            let mut forward = a_side.flatten(16).points;
            forward.reverse();
            for (p, q) in forward.iter().zip(&b_side.flatten(16).points) {
                assert!(p.approx_eq(*q, 1e-9));
            }
        }
    }
}

#[test]
fn test_exactly_one_side_protrudes() {
    let puzzle = classic(5, 4, 2024);
    for piece in &puzzle.pieces {
        let GridPosition::Cell { row, col } = piece.position else {
            unreachable!();
        };
        if col + 1 == 5 {
            continue;
        }
        let neighbor = puzzle
            .piece_at(GridPosition::Cell { row, col: col + 1 })
            .unwrap();
        let (PieceShape::RectClassic { edges: a, .. }, PieceShape::RectClassic { edges: b, .. }) =
            (piece.shape, neighbor.shape)
        else {
            unreachable!();
        };
        assert_ne!(a.right.sign(), b.left.sign());
        assert_eq!(a.right.sign() + b.left.sign(), 0.0);
    }
}

fn radial_side(sector: &Sector, tab_size: f64, polarity: Polarity, end: bool) -> PathIR {
    let at = |radius: f64, angle: f64| Point::polar(sector.center, radius, angle);
    let (from, to, outward) = if end {
        let a1 = sector.end_angle;
        (
            at(sector.inner_radius, a1),
            at(sector.outer_radius, a1),
            Point::new(-a1.sin(), a1.cos()),
        )
    } else {
        let a0 = sector.start_angle;
        (
            at(sector.outer_radius, a0),
            at(sector.inner_radius, a0),
            Point::new(a0.sin(), -a0.cos()),
        )
    };
    let mut path = PathIR::new();
    path.move_to(from);
    dovetail_edge(&mut path, from, to, outward, polarity, tab_size);
    path
}

#[test]
fn test_radial_seams_trace_the_same_dovetail() {
    let (segments, rings) = (5, 3);
    let puzzle = PuzzleLayoutEngine::new(PuzzleParameters {
        form: PuzzleForm::Circular,
        piece_style: PieceStyle::Classic,
        columns: segments,
        rows: rings,
        width: 600.0,
        height: 600.0,
        margin: 10.0,
        seed: Some(4242),
        ..PuzzleParameters::default()
    })
    .unwrap()
    .layout();

    let mut seams = 0;
    for ring in 0..rings {
        for segment in 0..segments {
            let next = (segment + 1) % segments;
            let a = puzzle.piece_at(GridPosition::Sector { ring, segment }).unwrap();
            let b = puzzle
                .piece_at(GridPosition::Sector { ring, segment: next })
                .unwrap();
            let (
                PieceShape::CircClassic {
                    sector: sa,
                    tab_size: ta,
                    edges: ea,
                },
                PieceShape::CircClassic {
                    sector: sb,
                    tab_size: tb,
                    edges: eb,
                },
            ) = (a.shape, b.shape)
            else {
                panic!("classic sectors expected");
            };
            assert_eq!(ea.end, -eb.start);

            let a_side = radial_side(&sa, ta, ea.end, true);
            let b_side = radial_side(&sb, tb, eb.start, false);
            assert!(contains_run(a.path.commands(), &a_side.commands()[1..]));
            assert!(contains_run(b.path.commands(), &b_side.commands()[1..]));

            let mut forward = a_side.flatten(16).points;
            forward.reverse();
            let backward = b_side.flatten(16).points;
            assert_eq!(forward.len(), backward.len());
            for (p, q) in forward.iter().zip(&backward) {
                assert!(
                    p.approx_eq(*q, 1e-6),
                    "seam ring {} segment {}: {:?} vs {:?}",
                    ring,
                    segment,
                    p,
                    q
                );
            }
            seams += 1;
        }
    }
    assert_eq!(seams, 15);
}
