use jigsawkit_camtools::{
    GridPosition, PieceStyle, PuzzleForm, PuzzleLayoutEngine, PuzzleParameters, TabMatrix,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn params(
    form: PuzzleForm,
    style: PieceStyle,
    cols: u32,
    rows: u32,
    seed: u32,
) -> PuzzleParameters {
    PuzzleParameters {
        form,
        piece_style: style,
        columns: cols,
        rows,
        width: 900.0,
        height: 700.0,
        margin: 15.0,
        seed: Some(seed),
        ..PuzzleParameters::default()
    }
}

fn style() -> impl Strategy<Value = PieceStyle> {
    prop_oneof![Just(PieceStyle::Grid), Just(PieceStyle::Classic)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_rect_piece_count_and_positions(
        cols in 1u32..9,
        rows in 1u32..9,
        style in style(),
        seed in any::<u32>(),
    ) {
        let parameters = params(PuzzleForm::Rectangular, style, cols, rows, seed);
        let puzzle = PuzzleLayoutEngine::new(parameters).unwrap().layout();
        prop_assert_eq!(puzzle.pieces.len(), (cols * rows) as usize);

        let mut seen = HashSet::new();
        for piece in &puzzle.pieces {
            let GridPosition::Cell { row, col } = piece.position else {
                return Err(TestCaseError::fail("sector position in rectangular puzzle"));
            };
            prop_assert!(row < rows && col < cols);
            prop_assert!(seen.insert((row, col)));
            prop_assert!(piece.path.is_closed());
        }
    }

    #[test]
    fn prop_circular_piece_count(
        segments in 1u32..13,
        rings in 1u32..6,
        style in style(),
        seed in any::<u32>(),
    ) {
        let parameters = params(PuzzleForm::Circular, style, segments, rings, seed);
        let puzzle = PuzzleLayoutEngine::new(parameters).unwrap().layout();
        prop_assert_eq!(puzzle.pieces.len(), (segments * rings) as usize);
        let positions: HashSet<_> = puzzle.pieces.iter().map(|p| p.position).collect();
        prop_assert_eq!(positions.len(), puzzle.pieces.len());
        for piece in &puzzle.pieces {
            prop_assert!(piece.path.is_closed());
            let line = piece.path.flatten(16);
            prop_assert!(line.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn prop_same_seed_same_puzzle(cols in 1u32..7, rows in 1u32..7, seed in any::<u32>()) {
        let p = params(PuzzleForm::Rectangular, PieceStyle::Classic, cols, rows, seed);
        let a = PuzzleLayoutEngine::new(p.clone()).unwrap().layout();
        let b = PuzzleLayoutEngine::new(p).unwrap().layout();
        prop_assert_eq!(&a.tab_matrix, &b.tab_matrix);
        prop_assert_eq!(a.pieces, b.pieces);
    }
}

#[test]
fn test_different_seeds_give_different_matrices() {
    let base = TabMatrix::rectangular(8, 8, 1);
    let differing = (2..50)
        .filter(|seed| TabMatrix::rectangular(8, 8, *seed) != base)
        .count();
    assert_eq!(differing, 48);
}
