//! Output format selection and export settings.

use crate::error::ExportError;
use jigsawkit_path::DEFAULT_RESOLUTION;
pub use jigsawkit_path::MAX_RESOLUTION;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// Print document with optional raster fill.
    PrintSvg,
    /// Hairline cut preview.
    CutSvg,
    /// Millimeter DXF with CUT and BORDER layers.
    Dxf,
    /// Layout dump.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::PrintSvg | ExportFormat::CutSvg => "svg",
            ExportFormat::Dxf => "dxf",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::PrintSvg => "print-svg",
            ExportFormat::CutSvg => "cut-svg",
            ExportFormat::Dxf => "dxf",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "print-svg" | "svg" => Ok(ExportFormat::PrintSvg),
            "cut-svg" => Ok(ExportFormat::CutSvg),
            "dxf" => Ok(ExportFormat::Dxf),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Segments per curve when flattening for DXF.
    pub flatten_resolution: usize,
    /// Stroke width of the cut preview, in pixels.
    pub cut_stroke_width: f64,
    /// Border stroke as a multiple of the piece stroke.
    pub border_stroke_scale: f64,
    /// Raster image reference for the print document's fill.
    #[serde(default)]
    pub fill: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            flatten_resolution: DEFAULT_RESOLUTION,
            cut_stroke_width: 0.5,
            border_stroke_scale: 1.75,
            fill: None,
        }
    }
}
