//! # JigsawKit Path
//!
//! Typed representation of the path mini-language used for piece outlines,
//! a lenient single-pass parser for externally authored path strings, and a
//! flattener that samples curves into polylines for cut-file export.
//!
//! - **Commands**: [`PathCommand`] and [`PathIR`], with a builder API and
//!   a `Display` that writes the textual form
//! - **Parser**: [`parse_path`] recovers from malformed commands and reports
//!   them as diagnostics; `str::parse::<PathIR>()` is the strict variant
//! - **Flattener**: [`Flattener`] with elliptical-arc center parameterization

pub mod arc;
pub mod command;
pub mod error;
pub mod flatten;
pub mod parser;

pub use arc::CenterArc;
pub use command::{PathCommand, PathIR};
pub use error::{PathError, PathResult};
pub use flatten::{Flattener, Polyline, CLOSE_EPSILON, DEFAULT_RESOLUTION, MAX_RESOLUTION};
pub use parser::{parse_path, ParsedPath};
