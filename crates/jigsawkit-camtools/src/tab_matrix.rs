//! Seeded tab/blank assignment for shared piece edges.
//!
//! Every internal seam of a puzzle gets one polarity from a linear congruential
//! generator. The piece on one side of the seam uses the stored value and the
//! piece on the other side uses its negation, so the two edges always mate.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 1 << 31;

/// Linear congruential generator state.
///
/// The generator is a plain value: each draw consumes it and hands back the
/// next state, so two runs from the same seed always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRng {
    state: u32,
}

impl TabRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: (seed as u64 % LCG_MODULUS) as u32,
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance once. Returns a uniform value in `[0, 1)` and the next state.
    pub fn next_unit(self) -> (f64, Self) {
        let next = (self.state as u64 * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        let rng = Self { state: next as u32 };
        (next as f64 / LCG_MODULUS as f64, rng)
    }

    /// Draw a tab (`+1`) or blank (`-1`).
    pub fn next_polarity(self) -> (Polarity, Self) {
        let (value, rng) = self.next_unit();
        let polarity = if value > 0.5 {
            Polarity::Tab
        } else {
            Polarity::Blank
        };
        (polarity, rng)
    }
}

/// Direction of an edge's tab relative to the piece that owns the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Polarity {
    /// Recedes into the piece.
    Blank = -1,
    /// Straight edge, used on the outer boundary only.
    Flat = 0,
    /// Protrudes out of the piece.
    Tab = 1,
}

impl Polarity {
    pub fn sign(self) -> f64 {
        self as i8 as f64
    }

    pub fn is_flat(self) -> bool {
        self == Polarity::Flat
    }
}

impl Neg for Polarity {
    type Output = Polarity;

    fn neg(self) -> Polarity {
        match self {
            Polarity::Blank => Polarity::Tab,
            Polarity::Flat => Polarity::Flat,
            Polarity::Tab => Polarity::Blank,
        }
    }
}

/// A `cols x rows` grid of polarities, indexed `[col][row]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolarityGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Polarity>,
}

impl PolarityGrid {
    /// Fill a grid column by column from `rng`, returning the advanced state.
    pub fn generate(cols: usize, rows: usize, mut rng: TabRng) -> (Self, TabRng) {
        let mut cells = Vec::with_capacity(cols * rows);
        for _ in 0..cols * rows {
            let (polarity, next) = rng.next_polarity();
            cells.push(polarity);
            rng = next;
        }
        (Self { cols, rows, cells }, rng)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored polarity, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<Polarity> {
        if col < self.cols && row < self.rows {
            self.cells.get(col * self.rows + row).copied()
        } else {
            None
        }
    }
}

/// Seam polarities for a whole puzzle.
///
/// Rectangular puzzles hold `vertical` seams between horizontally adjacent
/// pieces (`(cols - 1) x rows`) and `horizontal` seams between vertically
/// adjacent pieces (`cols x (rows - 1)`). Circular puzzles hold one radial
/// seam per segment and ring in `vertical`; ring boundaries carry no tabs, so
/// `horizontal` stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabMatrix {
    pub seed: u32,
    pub vertical: PolarityGrid,
    pub horizontal: PolarityGrid,
}

impl TabMatrix {
    pub fn rectangular(cols: usize, rows: usize, seed: u32) -> Self {
        let rng = TabRng::new(seed);
        let (vertical, next) = PolarityGrid::generate(cols.saturating_sub(1), rows, rng);
        let (horizontal, _) = PolarityGrid::generate(cols, rows.saturating_sub(1), next);
        Self {
            seed: rng.state(),
            vertical,
            horizontal,
        }
    }

    /// Radial seam `k` lies between segment `k` and segment `k + 1` (wrapping).
    /// A single segment has no radial neighbor and gets no seams.
    pub fn circular(segments: usize, rings: usize, seed: u32) -> Self {
        let radial_seams = if segments > 1 { segments } else { 0 };
        let rng = TabRng::new(seed);
        let (vertical, _) = PolarityGrid::generate(radial_seams, rings, rng);
        Self {
            seed: rng.state(),
            vertical,
            horizontal: PolarityGrid::default(),
        }
    }

    /// Edge polarities for the piece at `(row, col)` of a rectangular grid,
    /// flat on the outer boundary.
    pub fn rect_edges(&self, row: usize, col: usize) -> RectEdges {
        let flat = Polarity::Flat;
        RectEdges {
            top: match row {
                0 => flat,
                _ => self.horizontal.get(col, row - 1).map_or(flat, Neg::neg),
            },
            right: self.vertical.get(col, row).unwrap_or(flat),
            bottom: self.horizontal.get(col, row).unwrap_or(flat),
            left: match col {
                0 => flat,
                _ => self.vertical.get(col - 1, row).map_or(flat, Neg::neg),
            },
        }
    }

    /// Radial edge polarities for the sector at `(ring, segment)`.
    pub fn radial_edges(&self, ring: usize, segment: usize) -> RadialEdges {
        let seams = self.vertical.cols();
        if seams == 0 {
            return RadialEdges::default();
        }
        let previous = (segment + seams - 1) % seams;
        RadialEdges {
            start: self
                .vertical
                .get(previous, ring)
                .map_or(Polarity::Flat, Neg::neg),
            end: self.vertical.get(segment, ring).unwrap_or(Polarity::Flat),
        }
    }
}

/// Polarities of the four sides of a rectangular piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectEdges {
    pub top: Polarity,
    pub right: Polarity,
    pub bottom: Polarity,
    pub left: Polarity,
}

impl Default for RectEdges {
    fn default() -> Self {
        Self {
            top: Polarity::Flat,
            right: Polarity::Flat,
            bottom: Polarity::Flat,
            left: Polarity::Flat,
        }
    }
}

/// Polarities of the two radial sides of a sector. `start` is the side at the
/// lower angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadialEdges {
    pub start: Polarity,
    pub end: Polarity,
}

impl Default for RadialEdges {
    fn default() -> Self {
        Self {
            start: Polarity::Flat,
            end: Polarity::Flat,
        }
    }
}
