//! Unit conversion utilities
//!
//! Layout coordinates are CSS pixels at 96 DPI. Cut files are written in
//! millimeters, so every exporter goes through the helpers here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference resolution of the layout coordinate space.
pub const DPI: f64 = 96.0;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Pixels per millimeter at 96 DPI (96 / 25.4).
pub const PX_PER_MM: f64 = 3.7795275591;

/// Linear unit of a length value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// CSS pixels (96 DPI)
    Pixels,
    /// Millimeters
    Millimeters,
    /// Inches
    Inches,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Pixels
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels => write!(f, "px"),
            Self::Millimeters => write!(f, "mm"),
            Self::Inches => write!(f, "in"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "px" | "pixels" | "pixel" => Ok(Self::Pixels),
            "mm" | "millimeters" | "millimetres" => Ok(Self::Millimeters),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Convert a pixel length to millimeters.
pub fn px_to_mm(value_px: f64) -> f64 {
    value_px / PX_PER_MM
}

/// Convert a millimeter length to pixels.
pub fn mm_to_px(value_mm: f64) -> f64 {
    value_mm * PX_PER_MM
}

/// Convert a value from one unit to another.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    let px = match from {
        LengthUnit::Pixels => value,
        LengthUnit::Millimeters => mm_to_px(value),
        LengthUnit::Inches => value * DPI,
    };
    match to {
        LengthUnit::Pixels => px,
        LengthUnit::Millimeters => px_to_mm(px),
        LengthUnit::Inches => px / DPI,
    }
}

/// Flip a pixel-space Y coordinate (top-left origin) into a millimeter-space Y
/// coordinate with a bottom-left origin on a page `page_height_mm` tall.
pub fn flip_y_to_mm(y_px: f64, page_height_mm: f64) -> f64 {
    page_height_mm - px_to_mm(y_px)
}

/// Format a length with a fixed number of decimals.
///
/// * `value` - Value to format
/// * `decimals` - Number of digits after the decimal point
pub fn format_fixed(value: f64, decimals: usize) -> String {
    // Avoid "-0.0000" in output files
    let value = if value == 0.0 { 0.0 } else { value };
    let s = format!("{:.*}", decimals, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Format a coordinate compactly: three decimals, trailing zeros trimmed.
pub fn format_coord(value: f64) -> String {
    let s = format_fixed(value, 3);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    } else {
        s
    }
}

/// Parse a length string with an optional unit suffix ("12.5mm", "8.5in", "40px", "40").
///
/// * `input` - String to parse
/// * `default_unit` - Unit assumed when no suffix is present
///
/// Returns the value in pixels.
pub fn parse_length_px(input: &str, default_unit: LengthUnit) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty length".to_string());
    }

    let split = input
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (number, suffix) = input.split_at(split);
    let value = number.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let unit = if suffix.is_empty() {
        default_unit
    } else {
        suffix.parse::<LengthUnit>()?
    };

    Ok(convert(value, unit, LengthUnit::Pixels))
}
