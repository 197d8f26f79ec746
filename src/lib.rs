//! # ClipSketch
//!
//! An interactive 2D vector-shape editor: draw points, segments, rectangles
//! and ellipses, transform them, and restrict what is shown with a
//! rectangular clip window.
//!
//! ## Architecture
//!
//! ClipSketch is organized as a workspace with multiple crates:
//!
//! 1. **clipsketch-core** - Colours, palette, error types
//! 2. **clipsketch-settings** - Editor configuration (TOML/JSON)
//! 3. **clipsketch-designer** - Geometry core, editor state, frame builder
//! 4. **clipsketch** - Headless driver binary that replays input scripts
//!
//! Window creation and rasterization live outside this workspace; a
//! display backend consumes [`designer::Frame`]s.

pub mod script;

pub use clipsketch_designer as designer;

pub use clipsketch_core::{Error, Palette, Result, Rgb, PALETTE};
pub use clipsketch_designer::{
    build_frame, ClipRegion, DrawCommand, EditorMode, EditorState, Frame, InputEvent, Point,
    PrimitiveMode, Shape, ShapeType, SpecialKey, Transformation,
};
pub use clipsketch_settings::Config;
pub use script::{load_script, replay, ReplaySummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for frame output
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
