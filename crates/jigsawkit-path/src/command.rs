//! Typed path commands.
//!
//! A [`PathIR`] is the in-memory form of the path mini-language
//! (`M`, `L`, `C`, `Q`, `A`, `Z`, absolute coordinates only). Piece outlines
//! are built directly as `PathIR`; external path strings go through
//! [`crate::parser::parse_path`].

use jigsawkit_core::{format_coord, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One command of the path mini-language.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    QuadTo {
        ctrl: Point,
        to: Point,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        /// Rotation of the ellipse's x axis, in degrees.
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    ClosePath,
}

impl PathCommand {
    /// Command letter in the mini-language.
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::LineTo(_) => 'L',
            Self::CubicTo { .. } => 'C',
            Self::QuadTo { .. } => 'Q',
            Self::ArcTo { .. } => 'A',
            Self::ClosePath => 'Z',
        }
    }

    /// Explicit end point, `None` for `ClosePath`.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(p),
            Self::CubicTo { to, .. } | Self::QuadTo { to, .. } | Self::ArcTo { to, .. } => Some(to),
            Self::ClosePath => None,
        }
    }

    /// Whether the command is a curve that gets sampled during flattening.
    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            Self::CubicTo { .. } | Self::QuadTo { .. } | Self::ArcTo { .. }
        )
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = format_coord;
        match *self {
            Self::MoveTo(p) => write!(f, "M {} {}", c(p.x), c(p.y)),
            Self::LineTo(p) => write!(f, "L {} {}", c(p.x), c(p.y)),
            Self::CubicTo { ctrl1, ctrl2, to } => write!(
                f,
                "C {} {} {} {} {} {}",
                c(ctrl1.x),
                c(ctrl1.y),
                c(ctrl2.x),
                c(ctrl2.y),
                c(to.x),
                c(to.y)
            ),
            Self::QuadTo { ctrl, to } => {
                write!(f, "Q {} {} {} {}", c(ctrl.x), c(ctrl.y), c(to.x), c(to.y))
            }
            Self::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {} {} {} {} {} {} {}",
                c(rx),
                c(ry),
                c(x_axis_rotation),
                u8::from(large_arc),
                u8::from(sweep),
                c(to.x),
                c(to.y)
            ),
            Self::ClosePath => write!(f, "Z"),
        }
    }
}

/// An ordered sequence of path commands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathIR {
    commands: Vec<PathCommand>,
}

impl PathIR {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// A path is closed when `ClosePath` is its terminal command.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::ClosePath))
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
        self
    }

    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::ClosePath);
        self
    }

    /// Point where the pen rests after the last command.
    pub fn current_point(&self) -> Option<Point> {
        let mut current = None;
        let mut start = None;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    current = Some(*p);
                    start = Some(*p);
                }
                PathCommand::ClosePath => current = start,
                other => current = other.end_point(),
            }
        }
        current
    }

    /// Number of command kinds, in `M L C Q A Z` order. Handy for tests and logs.
    pub fn command_histogram(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for cmd in &self.commands {
            let slot = match cmd {
                PathCommand::MoveTo(_) => 0,
                PathCommand::LineTo(_) => 1,
                PathCommand::CubicTo { .. } => 2,
                PathCommand::QuadTo { .. } => 3,
                PathCommand::ArcTo { .. } => 4,
                PathCommand::ClosePath => 5,
            };
            counts[slot] += 1;
        }
        counts
    }
}

impl fmt::Display for PathIR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PathIR {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
