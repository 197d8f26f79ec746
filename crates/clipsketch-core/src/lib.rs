//! # ClipSketch Core
//!
//! Core types shared by every ClipSketch crate.
//! Provides the colour model, the fixed drawing palette, and the
//! crate-wide error type.

pub mod color;
pub mod error;

pub use color::{Palette, Rgb, PALETTE};
pub use error::{Error, Result};
