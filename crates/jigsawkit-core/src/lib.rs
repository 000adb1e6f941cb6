//! # JigsawKit Core
//!
//! Geometry primitives and unit handling shared by every JigsawKit crate.
//! The layout frame is pixel based (96 DPI, top-left origin); cut files are
//! millimeter based, and [`units`] converts between the two.

pub mod geometry;
pub mod units;

pub use geometry::{Bounds, Point};
pub use units::{
    convert, flip_y_to_mm, format_coord, format_fixed, mm_to_px, parse_length_px, px_to_mm,
    LengthUnit, DPI, MM_PER_INCH, PX_PER_MM,
};
