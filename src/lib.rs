//! # JigsawKit
//!
//! Interlocking jigsaw puzzle generator. Lays out rectangular, square and
//! circular puzzles from a deterministic seed and writes them as print SVG,
//! cut SVG or millimeter DXF.
//!
//! ## Architecture
//!
//! JigsawKit is organized as a workspace with multiple crates:
//!
//! 1. **jigsawkit-core** - Points, bounds, unit conversion and number formatting
//! 2. **jigsawkit-path** - Path commands, the path text parser and the flattener
//! 3. **jigsawkit-camtools** - Tab matrix, piece outlines and puzzle layout
//! 4. **jigsawkit-export** - SVG and DXF writers, rasterizer hook
//! 5. **jigsawkit-settings** - Persisted generator defaults
//! 6. **jigsawkit** - This facade plus the command line front end

pub use jigsawkit_camtools as camtools;
pub use jigsawkit_core as geometry;
pub use jigsawkit_export as export;
pub use jigsawkit_path as path;
pub use jigsawkit_settings as settings;

pub use jigsawkit_camtools::{
    orient_grid, AspectThresholds, GridPosition, Piece, PieceStyle, Polarity, Puzzle,
    PuzzleError, PuzzleForm, PuzzleLayoutEngine, PuzzleParameters, TabMatrix,
};
pub use jigsawkit_core::{Bounds, LengthUnit, Point};
pub use jigsawkit_export::{ExportError, ExportFormat, ExportOptions, Rasterizer};
pub use jigsawkit_path::{parse_path, Flattener, PathCommand, PathError, PathIR, Polyline};
pub use jigsawkit_settings::{GeneratorConfig, SettingsError};

use anyhow::Context;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so generated documents can go to stdout
/// - RUST_LOG environment variable support, INFO when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Parse a length given on the command line. Bare numbers are pixels;
/// `mm`, `in` and `px` suffixes are accepted.
pub fn parse_length(input: &str) -> Result<f64, String> {
    jigsawkit_core::parse_length_px(input, LengthUnit::Pixels)
}

/// Lay out a puzzle from `config` and serialize it in `format`.
///
/// `picture_aspect` reorients the grid to the picture before layout.
pub fn generate(
    config: &GeneratorConfig,
    picture_aspect: Option<f64>,
    format: ExportFormat,
) -> anyhow::Result<(Puzzle, String)> {
    let params = config.to_parameters(picture_aspect);
    let engine = PuzzleLayoutEngine::new(params).context("Invalid puzzle parameters")?;
    let puzzle = engine.layout();
    let document = jigsawkit_export::export(&puzzle, format, &config.export)
        .with_context(|| format!("Failed to write {} output", format))?;
    Ok((puzzle, document))
}
