//! SVG output.
//!
//! Both documents embed the raw piece paths (arcs and curves unflattened) in
//! the layout's pixel frame, so the canvas size maps one to one onto the SVG
//! width, height and viewBox.

use crate::options::ExportOptions;
use jigsawkit_camtools::Puzzle;
use jigsawkit_core::format_coord;
use tracing::info;

const PIECE_STROKE: &str = "#000000";
const CUT_STROKE: &str = "#ff0000";
const FILL_ID: &str = "puzzle-fill";

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn open_document(svg: &mut String, puzzle: &Puzzle) {
    let w = format_coord(puzzle.width);
    let h = format_coord(puzzle.height);
    svg.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#);
    svg.push('\n');
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    ));
    svg.push('\n');
}

fn push_pieces(svg: &mut String, puzzle: &Puzzle, stroke: &str, stroke_width: f64) {
    svg.push_str(&format!(
        r#"  <g id="pieces" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round">"#,
        stroke,
        format_coord(stroke_width)
    ));
    svg.push('\n');
    for piece in &puzzle.pieces {
        svg.push_str(&format!(r#"    <path d="{}"/>"#, piece.path));
        svg.push('\n');
    }
    svg.push_str("  </g>\n");
}

fn push_border(svg: &mut String, puzzle: &Puzzle, stroke: &str, stroke_width: f64) {
    svg.push_str(&format!(
        r#"  <path id="border" d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
        puzzle.border_path,
        stroke,
        format_coord(stroke_width)
    ));
    svg.push('\n');
}

/// Print document: optional image fill clipped to the border, piece outlines
/// stroked at the puzzle's line width, and a heavier border. The fill image
/// comes from `options.fill`.
pub fn to_print_svg(puzzle: &Puzzle, options: &ExportOptions) -> String {
    let mut svg = String::new();
    open_document(&mut svg, puzzle);

    if let Some(href) = options.fill.as_deref() {
        let href = escape_attr(href);
        let w = format_coord(puzzle.width);
        let h = format_coord(puzzle.height);
        svg.push_str("  <defs>\n");
        svg.push_str(&format!(
            r#"    <pattern id="{FILL_ID}" patternUnits="userSpaceOnUse" x="0" y="0" width="{w}" height="{h}">"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"      <image href="{href}" xlink:href="{href}" x="0" y="0" width="{w}" height="{h}" preserveAspectRatio="xMidYMid slice"/>"#
        ));
        svg.push('\n');
        svg.push_str("    </pattern>\n  </defs>\n");
        svg.push_str(&format!(
            r#"  <path id="fill" d="{}" fill="url(#{FILL_ID})" stroke="none"/>"#,
            puzzle.border_path
        ));
        svg.push('\n');
    }

    push_pieces(&mut svg, puzzle, PIECE_STROKE, puzzle.line_width);
    push_border(
        &mut svg,
        puzzle,
        PIECE_STROKE,
        puzzle.line_width * options.border_stroke_scale,
    );
    svg.push_str("</svg>\n");

    info!(
        pieces = puzzle.pieces.len(),
        filled = options.fill.is_some(),
        bytes = svg.len(),
        "Print SVG written"
    );
    svg
}

/// Cut preview: same outlines, no fill, fixed hairline stroke.
pub fn to_cut_svg(puzzle: &Puzzle, options: &ExportOptions) -> String {
    let mut svg = String::new();
    open_document(&mut svg, puzzle);
    push_pieces(&mut svg, puzzle, CUT_STROKE, options.cut_stroke_width);
    push_border(&mut svg, puzzle, CUT_STROKE, options.cut_stroke_width);
    svg.push_str("</svg>\n");

    info!(pieces = puzzle.pieces.len(), bytes = svg.len(), "Cut SVG written");
    svg
}
