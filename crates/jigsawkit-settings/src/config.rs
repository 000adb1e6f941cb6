//! Generator configuration for JigsawKit
//!
//! Provides configuration file handling and validation for the defaults the
//! command line starts from. Supports JSON and TOML file formats stored in
//! platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Puzzle parameters (form, style, grid, canvas, tab size, seed)
//! - Export options (flatten resolution, stroke widths, fill)
//! - Grid orientation thresholds

use crate::error::{SettingsError, SettingsResult};
use jigsawkit_camtools::{orient_grid, AspectThresholds, PuzzleLayoutEngine, PuzzleParameters};
use jigsawkit_export::{ExportOptions, MAX_RESOLUTION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_DIR_NAME: &str = "jigsawkit";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Puzzle defaults
    #[serde(default)]
    pub puzzle: PuzzleParameters,
    /// Export defaults
    #[serde(default)]
    pub export: ExportOptions,
    /// Aspect ratio cutoffs used when orienting a grid to a picture
    #[serde(default)]
    pub grid: AspectThresholds,
}

impl GeneratorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), "Loaded generator config");
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = FileFormat::from_path(path)?;

        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        info!(path = %path.display(), "Saved generator config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        PuzzleLayoutEngine::new(self.puzzle.clone())?;

        if !(1..=MAX_RESOLUTION).contains(&self.export.flatten_resolution) {
            return Err(SettingsError::invalid(
                "export.flatten_resolution",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_RESOLUTION, self.export.flatten_resolution
                ),
            ));
        }

        if self.export.cut_stroke_width.is_nan() || self.export.cut_stroke_width <= 0.0 {
            return Err(SettingsError::invalid(
                "export.cut_stroke_width",
                format!("must be positive, got {}", self.export.cut_stroke_width),
            ));
        }

        if self.export.border_stroke_scale.is_nan() || self.export.border_stroke_scale <= 0.0 {
            return Err(SettingsError::invalid(
                "export.border_stroke_scale",
                format!("must be positive, got {}", self.export.border_stroke_scale),
            ));
        }

        if !(self.grid.portrait > 0.0 && self.grid.portrait <= self.grid.landscape) {
            return Err(SettingsError::invalid(
                "grid",
                format!(
                    "portrait cutoff {} must be positive and not above landscape cutoff {}",
                    self.grid.portrait, self.grid.landscape
                ),
            ));
        }

        Ok(())
    }

    /// Puzzle parameters for a run. With a picture aspect ratio the grid is
    /// reoriented so its larger count runs along the picture's longer side.
    pub fn to_parameters(&self, picture_aspect: Option<f64>) -> PuzzleParameters {
        let mut params = self.puzzle.clone();
        if let Some(aspect) = picture_aspect {
            let (cols, rows) = orient_grid(params.columns, params.rows, aspect, &self.grid);
            params.columns = cols;
            params.rows = rows;
        }
        params
    }
}

/// `<config dir>/jigsawkit/config.toml` for the current platform.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("platform config directory not found".to_string())
        })
}
