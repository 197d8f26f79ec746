//! Configuration and settings management for ClipSketch
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (logical drawing surface size)
//! - Drawing defaults (initial colour, stroke thickness and its bounds)
//! - Transform step sizes (keyboard translate/rotate/scale increments)
//! - Clipping presentation (clipped geometry colour, fill alpha, selection box padding)

use clipsketch_core::{Rgb, PALETTE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, SettingsError};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Canvas settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Drawing defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Palette entry selected at startup
    pub initial_color_index: usize,
    /// Stroke thickness at startup
    pub initial_thickness: f64,
    /// Increment applied by the thickness keys
    pub thickness_step: f64,
    /// Smallest allowed stroke thickness
    pub min_thickness: f64,
    /// Largest allowed stroke thickness
    pub max_thickness: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            initial_color_index: 2,
            initial_thickness: 2.0,
            thickness_step: 0.5,
            min_thickness: 1.0,
            max_thickness: 20.0,
        }
    }
}

/// Keyboard transform increments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    /// Distance moved per arrow key press
    pub translate_step: f64,
    /// Degrees rotated per bracket key press
    pub rotate_step_degrees: f64,
    /// Scale factor applied by Page Up
    pub scale_up: f64,
    /// Scale factor applied by Page Down
    pub scale_down: f64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            translate_step: 5.0,
            rotate_step_degrees: 5.0,
            scale_up: 1.05,
            scale_down: 0.95,
        }
    }
}

/// Clipped geometry presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClippingSettings {
    /// Colour used for geometry that survived clipping
    pub clip_color: Rgb,
    /// Alpha of the filled clipped polygon
    pub fill_alpha: f32,
    /// Gap between a selected shape and its selection box
    pub selection_padding: f64,
}

impl Default for ClippingSettings {
    fn default() -> Self {
        Self {
            clip_color: Rgb::new(0.2, 0.8, 0.2),
            fill_alpha: 0.3,
            selection_padding: 5.0,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas settings
    pub canvas: CanvasSettings,
    /// Drawing defaults
    pub drawing: DrawingSettings,
    /// Transform increments
    pub transform: TransformSettings,
    /// Clipping presentation
    pub clipping: ClippingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load config from `path` when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load_from_file(p),
            Some(p) => {
                tracing::info!(path = %p.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                )
                .into())
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::invalid(
                "canvas",
                "dimensions must be > 0",
            ));
        }

        let d = &self.drawing;
        if d.initial_color_index >= PALETTE.len() {
            return Err(SettingsError::invalid(
                "drawing.initial_color_index",
                format!("must be < {}", PALETTE.len()),
            ));
        }
        if !(d.min_thickness > 0.0 && d.min_thickness <= d.max_thickness) {
            return Err(SettingsError::invalid(
                "drawing.min_thickness",
                "must be > 0 and <= max_thickness",
            ));
        }
        if d.initial_thickness < d.min_thickness || d.initial_thickness > d.max_thickness {
            return Err(SettingsError::invalid(
                "drawing.initial_thickness",
                format!("must be within [{}, {}]", d.min_thickness, d.max_thickness),
            ));
        }
        if d.thickness_step <= 0.0 {
            return Err(SettingsError::invalid("drawing.thickness_step", "must be > 0"));
        }

        let t = &self.transform;
        if t.translate_step <= 0.0 {
            return Err(SettingsError::invalid("transform.translate_step", "must be > 0"));
        }
        if !t.rotate_step_degrees.is_finite() {
            return Err(SettingsError::invalid(
                "transform.rotate_step_degrees",
                "must be finite",
            ));
        }
        if t.scale_up <= 0.0 || t.scale_down <= 0.0 {
            return Err(SettingsError::invalid("transform.scale", "factors must be > 0"));
        }

        let c = &self.clipping;
        if !c.clip_color.is_normalized() {
            return Err(SettingsError::invalid(
                "clipping.clip_color",
                "components must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&c.fill_alpha) {
            return Err(SettingsError::invalid("clipping.fill_alpha", "must be within [0, 1]"));
        }
        if c.selection_padding < 0.0 {
            return Err(SettingsError::invalid("clipping.selection_padding", "must be >= 0"));
        }

        Ok(())
    }
}

/// Platform configuration file location, e.g. `~/.config/clipsketch/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("clipsketch").join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            ConfigError::UnsupportedPlatform("no configuration directory".to_string()).into()
        })
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
