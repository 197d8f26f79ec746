//! Error handling for ClipSketch
//!
//! The geometry core never fails: clipping and transform degeneracies
//! resolve to well-defined values. Errors only arise at the edges of the
//! system, where editor state is built from configuration or where files
//! are read.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for ClipSketch
#[derive(Error, Debug)]
pub enum Error {
    /// Palette index does not address a palette entry
    #[error("Palette index {index} out of range (palette has {len} colours)")]
    InvalidPaletteIndex {
        /// The rejected index.
        index: usize,
        /// Number of palette entries.
        len: usize,
    },

    /// Stroke thickness outside the allowed range
    #[error("Invalid stroke thickness {value}: must be within [{min}, {max}]")]
    InvalidThickness {
        /// The rejected thickness.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Configuration could not be applied
    #[error("Settings error: {0}")]
    Settings(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
