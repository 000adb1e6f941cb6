//! Curve flattening.
//!
//! Turns a [`PathIR`] into a polyline by sampling every curved command at a
//! fixed number of segments. Straight commands contribute their endpoint only.

use crate::arc::CenterArc;
use crate::command::{PathCommand, PathIR};
use jigsawkit_core::{Bounds, Point};
use lyon::geom::{point, CubicBezierSegment, QuadraticBezierSegment};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Segments per curve when the caller does not choose one.
pub const DEFAULT_RESOLUTION: usize = 16;

/// Upper bound on segments per curve.
pub const MAX_RESOLUTION: usize = 1024;

/// `ClosePath` skips the closing segment when the pen is already this close
/// to the subpath start.
pub const CLOSE_EPSILON: f64 = 0.01;

/// An ordered sequence of points produced by flattening.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    /// True when the source path ended in `ClosePath`.
    pub closed: bool,
}

impl Polyline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Points with a trailing duplicate of the first point removed.
    ///
    /// Closed-polyline formats state closure with a flag, so the repeated
    /// vertex would produce a zero-length final segment.
    pub fn vertices(&self) -> &[Point] {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 && first.approx_eq(*last, 1e-9) => {
                &self.points[..self.points.len() - 1]
            }
            _ => &self.points,
        }
    }
}

/// Samples curved path commands into straight segments.
#[derive(Debug, Clone, Copy)]
pub struct Flattener {
    resolution: usize,
}

impl Default for Flattener {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl Flattener {
    /// The resolution is clamped to `1..=MAX_RESOLUTION`.
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution: resolution.clamp(1, MAX_RESOLUTION),
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Flatten a whole path into a single polyline.
    pub fn flatten(&self, path: &PathIR) -> Polyline {
        let mut points = Vec::with_capacity(path.len().saturating_mul(self.resolution));
        let mut current: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;

        for command in path {
            match *command {
                PathCommand::MoveTo(p) => {
                    points.push(p);
                    current = Some(p);
                    subpath_start = Some(p);
                }
                PathCommand::ClosePath => {
                    if let (Some(cur), Some(start)) = (current, subpath_start) {
                        if cur.distance_to(start) > CLOSE_EPSILON {
                            points.push(start);
                        }
                        current = Some(start);
                    }
                }
                other => {
                    // A drawing command without a preceding moveto starts at the origin.
                    let from = current.unwrap_or_default();
                    if subpath_start.is_none() {
                        subpath_start = Some(from);
                    }
                    self.flatten_segment(from, &other, &mut points);
                    current = other.end_point();
                }
            }
        }

        Polyline {
            points,
            closed: path.is_closed(),
        }
    }

    /// Append the points for one drawing command starting at `from`.
    ///
    /// Lines add one point. Curves add exactly `resolution` points, the last
    /// being the command's endpoint.
    pub fn flatten_segment(&self, from: Point, command: &PathCommand, out: &mut Vec<Point>) {
        let n = self.resolution;
        match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => out.push(p),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                let curve = CubicBezierSegment {
                    from: point(from.x, from.y),
                    ctrl1: point(ctrl1.x, ctrl1.y),
                    ctrl2: point(ctrl2.x, ctrl2.y),
                    to: point(to.x, to.y),
                };
                sample_into(n, to, out, |t| {
                    let p = curve.sample(t);
                    Point::new(p.x, p.y)
                });
            }
            PathCommand::QuadTo { ctrl, to } => {
                let curve = QuadraticBezierSegment {
                    from: point(from.x, from.y),
                    ctrl: point(ctrl.x, ctrl.y),
                    to: point(to.x, to.y),
                };
                sample_into(n, to, out, |t| {
                    let p = curve.sample(t);
                    Point::new(p.x, p.y)
                });
            }
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => match CenterArc::from_endpoints(
                from,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            ) {
                Ok(arc) => sample_into(n, to, out, |t| arc.point_at(t)),
                Err(err) => {
                    debug!("{}; drawing a straight segment instead", err);
                    out.push(to);
                }
            },
            PathCommand::ClosePath => {}
        }
    }
}

fn sample_into(n: usize, end: Point, out: &mut Vec<Point>, sample: impl Fn(f64) -> Point) {
    for i in 1..n {
        out.push(sample(i as f64 / n as f64));
    }
    out.push(end);
}

impl PathIR {
    /// Flatten with the given number of segments per curve.
    pub fn flatten(&self, resolution: usize) -> Polyline {
        Flattener::new(resolution).flatten(self)
    }
}
