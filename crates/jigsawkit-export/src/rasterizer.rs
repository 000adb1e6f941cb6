//! Seam for turning a print document into pixels.
//!
//! Rendering SVG is left to the caller. Implement [`Rasterizer`] over whatever
//! renderer the application already ships and hand it to
//! [`rasterize_puzzle`].

use crate::options::ExportOptions;
use crate::svg::to_print_svg;
use jigsawkit_camtools::Puzzle;
use tracing::debug;

/// One-shot SVG to bitmap conversion.
pub trait Rasterizer {
    type Bitmap;
    type Error: std::error::Error;

    /// Render `document` into a `pixel_width x pixel_height` bitmap. `scale`
    /// maps document units onto pixels.
    fn rasterize(
        &self,
        document: &str,
        pixel_width: u32,
        pixel_height: u32,
        scale: f64,
    ) -> Result<Self::Bitmap, Self::Error>;
}

/// Build the print document for `puzzle` and rasterize it at `scale`.
pub fn rasterize_puzzle<R: Rasterizer>(
    rasterizer: &R,
    puzzle: &Puzzle,
    options: &ExportOptions,
    scale: f64,
) -> Result<R::Bitmap, R::Error> {
    let document = to_print_svg(puzzle, options);
    let pixel_width = (puzzle.width * scale).round().max(1.0) as u32;
    let pixel_height = (puzzle.height * scale).round().max(1.0) as u32;
    debug!(pixel_width, pixel_height, scale, "Rasterizing print document");
    rasterizer.rasterize(&document, pixel_width, pixel_height, scale)
}
