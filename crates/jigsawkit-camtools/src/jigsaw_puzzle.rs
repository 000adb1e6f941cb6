//! Jigsaw Puzzle Layout
//!
//! Lays out a full rectangular or circular grid of interlocking pieces plus
//! the outer border. All coordinates are pixels in the layout frame.

use crate::error::{ParameterError, PuzzleError, PuzzleResult};
use crate::piece_builder::{PieceShape, RectCell, Sector};
use crate::tab_matrix::{TabMatrix, TabRng};
use jigsawkit_core::{Bounds, Point, PX_PER_MM};
use jigsawkit_path::{PathIR, DEFAULT_RESOLUTION};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Outline of the whole puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleForm {
    Rectangular,
    /// Rectangular with both sides forced to the shorter canvas side.
    Square,
    Circular,
}

impl fmt::Display for PuzzleForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleForm::Rectangular => write!(f, "rectangular"),
            PuzzleForm::Square => write!(f, "square"),
            PuzzleForm::Circular => write!(f, "circular"),
        }
    }
}

impl FromStr for PuzzleForm {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangular" | "rect" => Ok(PuzzleForm::Rectangular),
            "square" => Ok(PuzzleForm::Square),
            "circular" | "circle" => Ok(PuzzleForm::Circular),
            _ => Err(PuzzleError::UnsupportedShape(s.to_string())),
        }
    }
}

/// Edge style of the pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceStyle {
    /// Straight cuts only.
    Grid,
    /// Interlocking tabs on every internal seam.
    Classic,
}

impl fmt::Display for PieceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceStyle::Grid => write!(f, "grid"),
            PieceStyle::Classic => write!(f, "classic"),
        }
    }
}

impl FromStr for PieceStyle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(PieceStyle::Grid),
            "classic" => Ok(PieceStyle::Classic),
            _ => Err(PuzzleError::UnsupportedShape(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleParameters {
    pub form: PuzzleForm,
    pub piece_style: PieceStyle,
    /// Columns, or segments for circular puzzles.
    pub columns: u32,
    /// Rows, or rings for circular puzzles.
    pub rows: u32,
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub line_width: f64,
    /// Tab size as a percentage of the smaller piece dimension.
    pub tab_size_percent: f64,
    /// Fixed seed for reproducible output. Derived from the clock when absent.
    #[serde(default)]
    pub seed: Option<u32>,
}

impl Default for PuzzleParameters {
    fn default() -> Self {
        Self {
            form: PuzzleForm::Rectangular,
            piece_style: PieceStyle::Classic,
            columns: 4,
            rows: 3,
            width: 800.0,
            height: 600.0,
            margin: 20.0,
            line_width: 2.0,
            tab_size_percent: 20.0,
            seed: None,
        }
    }
}

/// Where a piece sits in its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridPosition {
    Cell { row: u32, col: u32 },
    Sector { ring: u32, segment: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub shape: PieceShape,
    pub path: PathIR,
    pub position: GridPosition,
    /// Bounds of the flattened outline, tabs included.
    pub bounds: Bounds,
}

impl Piece {
    fn new(shape: PieceShape, position: GridPosition, fallback: Bounds) -> Self {
        let path = shape.build();
        let bounds = path
            .flatten(DEFAULT_RESOLUTION)
            .bounds()
            .unwrap_or(fallback);
        Self {
            shape,
            path,
            position,
            bounds,
        }
    }
}

/// A generated puzzle. Immutable once built; regenerate to change it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub form: PuzzleForm,
    pub piece_style: PieceStyle,
    pub cols: u32,
    pub rows: u32,
    /// Canvas size after the square form has been applied.
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub line_width: f64,
    /// Seed the tab matrix was generated from.
    pub seed: u32,
    pub tab_matrix: TabMatrix,
    pub pieces: Vec<Piece>,
    pub border_path: PathIR,
}

impl Puzzle {
    pub fn page_width_mm(&self) -> f64 {
        self.width / PX_PER_MM
    }

    pub fn page_height_mm(&self) -> f64 {
        self.height / PX_PER_MM
    }

    /// Piece at a grid position, if the puzzle has it.
    pub fn piece_at(&self, position: GridPosition) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position == position)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Lays out puzzles from validated parameters.
pub struct PuzzleLayoutEngine {
    params: PuzzleParameters,
}

impl PuzzleLayoutEngine {
    pub fn new(params: PuzzleParameters) -> PuzzleResult<Self> {
        Self::validate_parameters(&params)?;
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &PuzzleParameters {
        &self.params
    }

    fn validate_parameters(params: &PuzzleParameters) -> PuzzleResult<()> {
        if params.columns == 0 || params.rows == 0 {
            return Err(PuzzleError::InvalidGrid {
                columns: params.columns,
                rows: params.rows,
            });
        }

        if !(params.width.is_finite() && params.height.is_finite())
            || params.width <= 0.0
            || params.height <= 0.0
        {
            return Err(PuzzleError::InvalidDimensions(format!(
                "canvas must be positive, got {} x {}",
                params.width, params.height
            )));
        }

        if !params.margin.is_finite() || params.margin < 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "margin".to_string(),
                reason: format!("must be zero or positive, got {}", params.margin),
            }
            .into());
        }

        let short_side = params.width.min(params.height);
        let drawable = match params.form {
            PuzzleForm::Rectangular => {
                (params.width - 2.0 * params.margin).min(params.height - 2.0 * params.margin)
            }
            PuzzleForm::Square => short_side - 2.0 * params.margin,
            PuzzleForm::Circular => short_side / 2.0 - params.margin,
        };
        if drawable <= 0.0 {
            return Err(PuzzleError::InvalidDimensions(format!(
                "margin {} leaves no drawable area on a {} x {} canvas",
                params.margin, params.width, params.height
            )));
        }

        if !params.line_width.is_finite() || params.line_width <= 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "line_width".to_string(),
                reason: format!("must be positive, got {}", params.line_width),
            }
            .into());
        }

        if !(10.0..=30.0).contains(&params.tab_size_percent) {
            return Err(ParameterError::OutOfRange {
                name: "tab_size_percent".to_string(),
                value: params.tab_size_percent,
                min: 10.0,
                max: 30.0,
            }
            .into());
        }

        Ok(())
    }

    /// Build every piece and the border.
    pub fn layout(&self) -> Puzzle {
        let p = &self.params;
        // The generator reduces seeds mod 2^31; record the reduced value.
        let seed = TabRng::new(p.seed.unwrap_or_else(clock_seed)).state();
        let (width, height) = match p.form {
            PuzzleForm::Square => {
                let side = p.width.min(p.height);
                (side, side)
            }
            _ => (p.width, p.height),
        };

        let (tab_matrix, pieces, border_path) = match p.form {
            PuzzleForm::Rectangular | PuzzleForm::Square => self.layout_rect(width, height, seed),
            PuzzleForm::Circular => self.layout_circular(width, height, seed),
        };

        info!(
            form = %p.form,
            style = %p.piece_style,
            cols = p.columns,
            rows = p.rows,
            seed,
            pieces = pieces.len(),
            "Puzzle laid out"
        );

        Puzzle {
            form: p.form,
            piece_style: p.piece_style,
            cols: p.columns,
            rows: p.rows,
            width,
            height,
            margin: p.margin,
            line_width: p.line_width,
            seed,
            tab_matrix,
            pieces,
            border_path,
        }
    }

    fn layout_rect(&self, width: f64, height: f64, seed: u32) -> (TabMatrix, Vec<Piece>, PathIR) {
        let p = &self.params;
        let (cols, rows) = (p.columns as usize, p.rows as usize);
        let m = p.margin;
        let piece_w = (width - 2.0 * m) / cols as f64;
        let piece_h = (height - 2.0 * m) / rows as f64;
        let tab_size = p.tab_size_percent / 100.0 * piece_w.min(piece_h);
        let matrix = TabMatrix::rectangular(cols, rows, seed);

        let mut pieces = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let cell = RectCell {
                    x: m + col as f64 * piece_w,
                    y: m + row as f64 * piece_h,
                    width: piece_w,
                    height: piece_h,
                };
                let shape = match p.piece_style {
                    PieceStyle::Grid => PieceShape::RectGrid(cell),
                    PieceStyle::Classic => PieceShape::RectClassic {
                        cell,
                        tab_size,
                        edges: matrix.rect_edges(row, col),
                    },
                };
                debug!(row, col, "Building rectangular piece");
                let position = GridPosition::Cell {
                    row: row as u32,
                    col: col as u32,
                };
                pieces.push(Piece::new(shape, position, cell.bounds()));
            }
        }

        let mut border = PathIR::new();
        border
            .move_to(Point::new(m, m))
            .line_to(Point::new(width - m, m))
            .line_to(Point::new(width - m, height - m))
            .line_to(Point::new(m, height - m))
            .close();

        (matrix, pieces, border)
    }

    fn layout_circular(
        &self,
        width: f64,
        height: f64,
        seed: u32,
    ) -> (TabMatrix, Vec<Piece>, PathIR) {
        let p = &self.params;
        let (segments, rings) = (p.columns as usize, p.rows as usize);
        let center = Point::new(width / 2.0, height / 2.0);
        let max_radius = width.min(height) / 2.0 - p.margin;
        let ring_width = max_radius / rings as f64;
        let step = TAU / segments as f64;
        let matrix = TabMatrix::circular(segments, rings, seed);

        let mut pieces = Vec::with_capacity(segments * rings);
        for ring in 0..rings {
            let inner_radius = ring as f64 * ring_width;
            let outer_radius = inner_radius + ring_width;
            for segment in 0..segments {
                let start_angle = segment_angle(segment, step);
                let sector = Sector {
                    center,
                    inner_radius,
                    outer_radius,
                    start_angle,
                    end_angle: start_angle + step,
                };
                let shape = match p.piece_style {
                    PieceStyle::Grid => PieceShape::CircGrid(sector),
                    PieceStyle::Classic => {
                        let mid_arc = (inner_radius + outer_radius) / 2.0 * step;
                        PieceShape::CircClassic {
                            sector,
                            tab_size: p.tab_size_percent / 100.0 * ring_width.min(mid_arc),
                            edges: matrix.radial_edges(ring, segment),
                        }
                    }
                };
                debug!(ring, segment, "Building circular piece");
                let position = GridPosition::Sector {
                    ring: ring as u32,
                    segment: segment as u32,
                };
                let fallback = Bounds::new(
                    center.x - outer_radius,
                    center.y - outer_radius,
                    center.x + outer_radius,
                    center.y + outer_radius,
                );
                pieces.push(Piece::new(shape, position, fallback));
            }
        }

        let top = Point::new(center.x, center.y - max_radius);
        let bottom = Point::new(center.x, center.y + max_radius);
        let mut border = PathIR::new();
        border
            .move_to(top)
            .arc_to(max_radius, max_radius, 0.0, true, true, bottom)
            .arc_to(max_radius, max_radius, 0.0, true, true, top)
            .close();

        (matrix, pieces, border)
    }
}

/// Angle of the boundary before `segment`. Segment 0 starts at the top.
fn segment_angle(segment: usize, step: f64) -> f64 {
    -FRAC_PI_2 + segment as f64 * step
}

fn clock_seed() -> u32 {
    (chrono::Utc::now().timestamp_millis().rem_euclid(1 << 31)) as u32
}

/// Lay out a puzzle from textual form and style tokens with a clock seed.
pub fn layout(
    form: &str,
    piece_style: &str,
    cols: u32,
    rows: u32,
    width: f64,
    height: f64,
    margin: f64,
) -> PuzzleResult<Puzzle> {
    let params = PuzzleParameters {
        form: form.parse()?,
        piece_style: piece_style.parse()?,
        columns: cols,
        rows,
        width,
        height,
        margin,
        ..PuzzleParameters::default()
    };
    Ok(PuzzleLayoutEngine::new(params)?.layout())
}
