use jigsawkit_camtools::{
    GridPosition, PieceShape, PieceStyle, Polarity, PuzzleForm, PuzzleLayoutEngine,
    PuzzleParameters,
};
use jigsawkit_core::Point;
use jigsawkit_path::PathCommand;

fn scenario_a() -> PuzzleParameters {
    PuzzleParameters {
        form: PuzzleForm::Rectangular,
        piece_style: PieceStyle::Classic,
        columns: 3,
        rows: 2,
        width: 800.0,
        height: 600.0,
        margin: 20.0,
        seed: Some(20240601),
        ..PuzzleParameters::default()
    }
}

#[test]
fn test_scenario_a_pieces_and_border() {
    let puzzle = PuzzleLayoutEngine::new(scenario_a()).unwrap().layout();
    assert_eq!(puzzle.pieces.len(), 6);

    let border = puzzle.border_path.commands();
    assert_eq!(
        border,
        &[
            PathCommand::MoveTo(Point::new(20.0, 20.0)),
            PathCommand::LineTo(Point::new(780.0, 20.0)),
            PathCommand::LineTo(Point::new(780.0, 580.0)),
            PathCommand::LineTo(Point::new(20.0, 580.0)),
            PathCommand::ClosePath,
        ]
    );
    assert!(puzzle.pieces.iter().all(|p| p.path.is_closed()));
}

#[test]
fn test_scenario_a_internal_edges_are_opposite() {
    let puzzle = PuzzleLayoutEngine::new(scenario_a()).unwrap().layout();
    let edges = |row: u32, col: u32| match puzzle
        .piece_at(GridPosition::Cell { row, col })
        .map(|p| p.shape)
    {
        Some(PieceShape::RectClassic { edges, .. }) => edges,
        other => panic!("unexpected shape {:?}", other),
    };

    let mut seams = 0;
    for row in 0..2 {
        for col in 0..3 {
            let here = edges(row, col);
            if col + 1 < 3 {
                let right = edges(row, col + 1);
                assert_ne!(here.right, Polarity::Flat);
                assert_eq!(here.right, -right.left);
                seams += 1;
            }
            if row + 1 < 2 {
                let below = edges(row + 1, col);
                assert_ne!(here.bottom, Polarity::Flat);
                assert_eq!(here.bottom, -below.top);
                seams += 1;
            }
        }
    }
    // Two vertical seams per row and one horizontal seam per column.
    assert_eq!(seams, 7);
}

#[test]
fn test_outer_edges_are_straight() {
    let puzzle = PuzzleLayoutEngine::new(scenario_a()).unwrap().layout();
    for piece in &puzzle.pieces {
        let GridPosition::Cell { row, col } = piece.position else {
            panic!("rectangular puzzle with sector position");
        };
        let PieceShape::RectClassic { edges, .. } = piece.shape else {
            panic!("classic style expected");
        };
        assert_eq!(edges.top.is_flat(), row == 0);
        assert_eq!(edges.bottom.is_flat(), row == 1);
        assert_eq!(edges.left.is_flat(), col == 0);
        assert_eq!(edges.right.is_flat(), col == 2);
    }

    // Corner piece bounds stay on the canvas margin where edges are flat.
    let corner = puzzle
        .piece_at(GridPosition::Cell { row: 0, col: 0 })
        .unwrap();
    assert!((corner.bounds.min_x - 20.0).abs() < 1e-9);
    assert!((corner.bounds.min_y - 20.0).abs() < 1e-9);
}

#[test]
fn test_grid_style_has_no_curves() {
    let puzzle = PuzzleLayoutEngine::new(PuzzleParameters {
        piece_style: PieceStyle::Grid,
        ..scenario_a()
    })
    .unwrap()
    .layout();
    for piece in &puzzle.pieces {
        assert!(matches!(piece.shape, PieceShape::RectGrid(_)));
        assert!(piece.path.iter().all(|c| !c.is_curve()));
        assert_eq!(piece.path.len(), 5);
    }
    let first = &puzzle.pieces[0];
    assert_eq!(
        first.path.to_string(),
        "M 20 20 L 273.333 20 L 273.333 300 L 20 300 Z"
    );
}
