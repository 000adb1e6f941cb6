//! # JigsawKit CAM Tools
//!
//! Piece geometry and puzzle layout.
//!
//! ## Components
//!
//! - **Tab Matrix**: Seeded tab/blank polarities for every internal seam
//! - **Piece Builder**: Closed outlines for rectangular and circular pieces,
//!   straight or with interlocking tabs
//! - **Jigsaw Puzzle Layout**: Full grids plus the outer border
//! - **Orientation**: Picks columns vs rows from a picture's aspect ratio

pub mod error;
pub mod jigsaw_puzzle;
pub mod orientation;
pub mod piece_builder;
pub mod tab_matrix;

pub use error::{ParameterError, PuzzleError, PuzzleResult};
pub use jigsaw_puzzle::{
    layout, GridPosition, Piece, PieceStyle, Puzzle, PuzzleForm, PuzzleLayoutEngine,
    PuzzleParameters,
};
pub use orientation::{orient_grid, AspectThresholds, Orientation};
pub use piece_builder::{build, PieceShape, RectCell, Sector};
pub use tab_matrix::{Polarity, PolarityGrid, RadialEdges, RectEdges, TabMatrix, TabRng};
