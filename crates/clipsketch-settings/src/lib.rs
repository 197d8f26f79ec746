//! # ClipSketch Settings
//!
//! Editor configuration: canvas size, drawing defaults, transform step
//! sizes, and clipping presentation. Loaded from TOML or JSON.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CanvasSettings, ClippingSettings, Config, DrawingSettings,
    TransformSettings,
};
pub use error::{ConfigError, Result, SettingsError};
