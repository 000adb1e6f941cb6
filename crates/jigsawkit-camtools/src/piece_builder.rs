//! Closed outline construction for a single puzzle piece.
//!
//! Rectangular pieces are traced clockwise on screen starting at the top-left
//! corner: top, right, bottom, left. Sectors start at the outer arc and run
//! outer arc, start radial edge, inner arc, end radial edge.
//!
//! Tab curves are symmetric about the edge midpoint. Tracing an edge backwards
//! with the outward normal and polarity both flipped yields the same curve,
//! which is how a neighbor traces the shared seam.

use crate::tab_matrix::{Polarity, RadialEdges, RectEdges};
use jigsawkit_core::{Bounds, Point};
use jigsawkit_path::PathIR;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Neck width as a fraction of the tab size.
pub const NECK_RATIO: f64 = 0.45;
/// Head radius as a fraction of the tab size.
pub const HEAD_RATIO: f64 = 0.7;
/// Height of the neck above the edge line, as a fraction of the tab size.
const NECK_HEIGHT: f64 = 0.4;
/// Where the lead-in control points sit, as a fraction of the half edge.
const SHOULDER: f64 = 0.6;

/// Axis-aligned cell of a rectangular grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectCell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectCell {
    pub fn corners(&self) -> [Point; 4] {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Annular sector between two radii and two angles (radians, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    /// Inner radii below this collapse to the center point.
    pub const PIE_EPSILON: f64 = 1e-6;

    pub fn is_pie_wedge(&self) -> bool {
        self.inner_radius < Self::PIE_EPSILON
    }

    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    fn at(&self, radius: f64, angle: f64) -> Point {
        Point::polar(self.center, radius, angle)
    }
}

/// The four piece variants, each with only the data its geometry needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum PieceShape {
    RectGrid(RectCell),
    RectClassic {
        cell: RectCell,
        tab_size: f64,
        edges: RectEdges,
    },
    CircGrid(Sector),
    CircClassic {
        sector: Sector,
        tab_size: f64,
        edges: RadialEdges,
    },
}

impl PieceShape {
    /// Build the closed outline for this piece.
    pub fn build(&self) -> PathIR {
        build(self)
    }
}

/// Build the closed outline for `shape`.
pub fn build(shape: &PieceShape) -> PathIR {
    match *shape {
        PieceShape::RectGrid(cell) => rect_path(&cell, 0.0, &RectEdges::default()),
        PieceShape::RectClassic {
            cell,
            tab_size,
            edges,
        } => rect_path(&cell, tab_size, &edges),
        PieceShape::CircGrid(sector) => sector_path(&sector, 0.0, &RadialEdges::default()),
        PieceShape::CircClassic {
            sector,
            tab_size,
            edges,
        } => sector_path(&sector, tab_size, &edges),
    }
}

fn rect_path(cell: &RectCell, tab_size: f64, edges: &RectEdges) -> PathIR {
    let [tl, tr, br, bl] = cell.corners();
    let up = Point::new(0.0, -1.0);
    let right = Point::new(1.0, 0.0);

    let mut path = PathIR::new();
    path.move_to(tl);
    classic_edge(&mut path, tl, tr, up, edges.top, tab_size);
    classic_edge(&mut path, tr, br, right, edges.right, tab_size);
    classic_edge(&mut path, br, bl, -up, edges.bottom, tab_size);
    if !edges.left.is_flat() {
        classic_edge(&mut path, bl, tl, -right, edges.left, tab_size);
    }
    path.close();
    path
}

fn sector_path(sector: &Sector, tab_size: f64, edges: &RadialEdges) -> PathIR {
    let (a0, a1) = (sector.start_angle, sector.end_angle);
    let r_out = sector.outer_radius;
    // Outward normals of the radial sides, pointing away from the sector.
    let start_normal = Point::new(a0.sin(), -a0.cos());
    let end_normal = Point::new(-a1.sin(), a1.cos());

    let mut path = PathIR::new();
    if sector.is_pie_wedge() {
        let center = sector.center;
        path.move_to(center);
        let outer_end = sector.at(r_out, a1);
        dovetail_edge(&mut path, center, outer_end, end_normal, edges.end, tab_size);
        arc(&mut path, sector, r_out, a1, a0, false);
        if !edges.start.is_flat() {
            let outer_start = sector.at(r_out, a0);
            dovetail_edge(&mut path, outer_start, center, start_normal, edges.start, tab_size);
        }
        path.close();
        return path;
    }

    let r_in = sector.inner_radius;
    path.move_to(sector.at(r_out, a1));
    arc(&mut path, sector, r_out, a1, a0, false);
    dovetail_edge(
        &mut path,
        sector.at(r_out, a0),
        sector.at(r_in, a0),
        start_normal,
        edges.start,
        tab_size,
    );
    arc(&mut path, sector, r_in, a0, a1, true);
    if !edges.end.is_flat() {
        dovetail_edge(
            &mut path,
            sector.at(r_in, a1),
            sector.at(r_out, a1),
            end_normal,
            edges.end,
            tab_size,
        );
    }
    path.close();
    path
}

/// Emit arc commands from angle `from` to angle `to` on a circle of `radius`.
/// Spans of a full turn are split in two so each piece stays well defined.
fn arc(path: &mut PathIR, sector: &Sector, radius: f64, from: f64, to: f64, sweep: bool) {
    let span = (to - from).abs();
    if span >= TAU - 1e-9 {
        let mid = (from + to) / 2.0;
        arc(path, sector, radius, from, mid, sweep);
        arc(path, sector, radius, mid, to, sweep);
        return;
    }
    path.arc_to(radius, radius, 0.0, span > PI, sweep, sector.at(radius, to));
}

/// Map local edge coordinates to the layout frame. `s` runs along the edge
/// from its midpoint, `h` along the outward normal scaled by polarity.
struct EdgeFrame {
    mid: Point,
    along: Point,
    out: Point,
    half: f64,
}

impl EdgeFrame {
    fn new(from: Point, to: Point, outward: Point, polarity: Polarity) -> Self {
        Self {
            mid: from.midpoint(to),
            along: (to - from).normalized(),
            out: outward * polarity.sign(),
            half: from.distance_to(to) / 2.0,
        }
    }

    fn at(&self, s: f64, h: f64) -> Point {
        self.mid + self.along * s + self.out * h
    }
}

/// Straight line for a flat edge, otherwise three cubics: lead-in to the neck,
/// the head lobe, and back out to the far corner. The head apex sits exactly
/// `tab_size` off the edge line.
pub fn classic_edge(
    path: &mut PathIR,
    from: Point,
    to: Point,
    outward: Point,
    polarity: Polarity,
    tab_size: f64,
) {
    if polarity.is_flat() || tab_size <= 0.0 {
        path.line_to(to);
        return;
    }
    let f = EdgeFrame::new(from, to, outward, polarity);
    let neck = NECK_RATIO * tab_size / 2.0;
    let head = HEAD_RATIO * tab_size;
    let neck_h = NECK_HEIGHT * tab_size;
    // Cubic midpoint height is (p0 + 3c1 + 3c2 + p3) / 8.
    let head_h = (8.0 * tab_size - 2.0 * neck_h) / 6.0;
    let shoulder = SHOULDER * f.half;

    path.cubic_to(f.at(-shoulder, 0.0), f.at(0.0, -neck), f.at(-neck, neck_h))
        .cubic_to(f.at(-head, head_h), f.at(head, head_h), f.at(neck, neck_h))
        .cubic_to(f.at(0.0, -neck), f.at(shoulder, 0.0), to);
}

/// Straight line for a flat edge, otherwise a straight-sided dovetail centred
/// on the edge: narrow neck at the edge line, wide head `tab_size` out.
pub fn dovetail_edge(
    path: &mut PathIR,
    from: Point,
    to: Point,
    outward: Point,
    polarity: Polarity,
    tab_size: f64,
) {
    if polarity.is_flat() || tab_size <= 0.0 {
        path.line_to(to);
        return;
    }
    let f = EdgeFrame::new(from, to, outward, polarity);
    let neck = NECK_RATIO * tab_size / 2.0;
    let head = HEAD_RATIO * tab_size / 2.0;

    path.line_to(f.at(-neck, 0.0))
        .line_to(f.at(-head, tab_size))
        .line_to(f.at(head, tab_size))
        .line_to(f.at(neck, 0.0))
        .line_to(to);
}
