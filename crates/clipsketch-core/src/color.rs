//! Colour model and the fixed drawing palette.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Normalized RGB triple, each component in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Returns true when every component lies in `[0.0, 1.0]`.
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Drawing colours, cycled in order by the colour key.
pub const PALETTE: [Rgb; 29] = [
    Rgb::new(1.0, 0.0, 0.0),   // Red
    Rgb::new(0.0, 1.0, 0.0),   // Green
    Rgb::new(0.0, 0.0, 1.0),   // Blue
    Rgb::new(1.0, 1.0, 0.0),   // Yellow
    Rgb::new(1.0, 0.5, 0.0),   // Orange
    Rgb::new(0.0, 1.0, 1.0),   // Cyan
    Rgb::new(1.0, 0.0, 1.0),   // Magenta
    Rgb::new(0.5, 0.0, 0.5),   // Purple
    Rgb::new(0.5, 0.25, 0.0),  // Brown
    Rgb::new(0.0, 0.0, 0.0),   // Black
    Rgb::new(0.5, 0.5, 0.5),   // Gray
    Rgb::new(0.8, 0.8, 0.2),   // Light Yellow
    Rgb::new(0.2, 0.8, 0.8),   // Light Cyan
    Rgb::new(0.8, 0.2, 0.8),   // Light Magenta
    Rgb::new(0.2, 0.2, 0.8),   // Indigo
    Rgb::new(0.8, 0.4, 0.2),   // Light Brown
    Rgb::new(0.4, 0.8, 0.2),   // Olive
    Rgb::new(0.2, 0.8, 0.4),   // Mint
    Rgb::new(0.8, 0.2, 0.4),   // Pink
    Rgb::new(0.4, 0.2, 0.8),   // Violet
    Rgb::new(0.2, 0.4, 0.8),   // Sky Blue
    Rgb::new(0.8, 0.8, 0.8),   // Very Light Gray
    Rgb::new(0.3, 0.3, 0.3),   // Dark Gray
    Rgb::new(0.9, 0.6, 0.7),   // Pastel Pink
    Rgb::new(0.6, 0.9, 0.7),   // Pastel Green
    Rgb::new(0.7, 0.6, 0.9),   // Pastel Purple
    Rgb::new(0.9, 0.9, 0.6),   // Pastel Yellow
    Rgb::new(0.6, 0.9, 0.9),   // Pastel Cyan
    Rgb::new(0.9, 0.6, 0.9),   // Pastel Magenta
];

/// Cursor into [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    index: usize,
}

impl Palette {
    /// Creates a palette cursor positioned at `index`.
    pub fn new(index: usize) -> Result<Self> {
        if index >= PALETTE.len() {
            return Err(Error::InvalidPaletteIndex {
                index,
                len: PALETTE.len(),
            });
        }
        Ok(Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The colour under the cursor.
    pub fn current(&self) -> Rgb {
        PALETTE[self.index]
    }

    /// Advances to the next colour, wrapping at the end, and returns it.
    pub fn advance(&mut self) -> Rgb {
        self.index = (self.index + 1) % PALETTE.len();
        tracing::debug!(index = self.index, "palette advanced");
        self.current()
    }
}

impl Default for Palette {
    fn default() -> Self {
        // Blue
        Self { index: 2 }
    }
}
