//! # JigsawKit Export
//!
//! Serializes a laid-out [`Puzzle`] for printing and cutting.
//!
//! - **Print SVG**: piece outlines over an optional raster fill
//! - **Cut SVG**: hairline outlines only
//! - **DXF**: flattened closed polylines in millimeters on `CUT` and `BORDER`
//!   layers
//! - **Rasterizer**: trait for callers that need a bitmap

pub mod dxf;
pub mod error;
pub mod options;
pub mod rasterizer;
pub mod svg;

pub use dxf::{to_dxf, BORDER_LAYER, CUT_LAYER};
pub use error::{ExportError, ExportResult};
pub use options::{ExportFormat, ExportOptions, MAX_RESOLUTION};
pub use rasterizer::{rasterize_puzzle, Rasterizer};
pub use svg::{to_cut_svg, to_print_svg};

use jigsawkit_camtools::Puzzle;

/// Render `puzzle` in the requested format.
pub fn export(
    puzzle: &Puzzle,
    format: ExportFormat,
    options: &ExportOptions,
) -> ExportResult<String> {
    let text = match format {
        ExportFormat::PrintSvg => to_print_svg(puzzle, options),
        ExportFormat::CutSvg => to_cut_svg(puzzle, options),
        ExportFormat::Dxf => to_dxf(puzzle, options),
        ExportFormat::Json => puzzle.to_json()?,
    };
    Ok(text)
}
