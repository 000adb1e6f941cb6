//! JigsawKit Settings Crate
//!
//! Persisted generation defaults: puzzle parameters, export options and grid
//! orientation thresholds, stored as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{default_config_path, GeneratorConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
