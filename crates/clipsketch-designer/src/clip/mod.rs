//! Rectangular window clipping.
//!
//! A single axis-aligned [`ClipRegion`] restricts what is drawn. Points are
//! classified by Cohen–Sutherland outcodes; segments are clipped with
//! [`clip_line`] and closed vertex loops with [`clip_polygon`].

mod line;
mod polygon;

pub use line::clip_line;
pub use polygon::{clip_polygon, clip_polygon_passes, Boundary};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::model::{Bounds, Point};

/// Four-bit region code of a point relative to a clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const RIGHT: Outcode = Outcode(2);
    pub const BOTTOM: Outcode = Outcode(4);
    pub const TOP: Outcode = Outcode(8);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Outcode) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl BitOr for Outcode {
    type Output = Outcode;

    fn bitor(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 | rhs.0)
    }
}

impl BitOrAssign for Outcode {
    fn bitor_assign(&mut self, rhs: Outcode) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Outcode {
    type Output = Outcode;

    fn bitand(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 & rhs.0)
    }
}

impl fmt::Display for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

/// Axis-aligned clip rectangle with `x_min <= x_max` and `y_min <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRegion {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl ClipRegion {
    /// Normalizes two corners picked in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x_min: a.x.min(b.x),
            y_min: a.y.min(b.y),
            x_max: a.x.max(b.x),
            y_max: a.y.max(b.y),
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// `(x_min, y_min, x_max, y_max)`
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.y_min, self.x_max, self.y_max)
    }

    pub fn as_bounds(&self) -> Bounds {
        Bounds::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }

    /// Inclusive containment.
    pub fn contains(&self, p: Point) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }

    /// Boundary coordinates count as inside for their axis.
    pub fn outcode(&self, p: Point) -> Outcode {
        let mut code = Outcode::INSIDE;

        if p.x < self.x_min {
            code |= Outcode::LEFT;
        } else if p.x > self.x_max {
            code |= Outcode::RIGHT;
        }

        if p.y < self.y_min {
            code |= Outcode::BOTTOM;
        } else if p.y > self.y_max {
            code |= Outcode::TOP;
        }

        code
    }

    /// Moves both corners by the same delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x_min += dx;
        self.x_max += dx;
        self.y_min += dy;
        self.y_max += dy;
    }
}

/// The scene-wide clip slot. Empty means everything renders unclipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipWindow {
    region: Option<ClipRegion>,
}

impl ClipWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> bool {
        self.region.is_some()
    }

    pub fn region(&self) -> Option<&ClipRegion> {
        self.region.as_ref()
    }

    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.region.map(|r| r.bounds())
    }

    pub fn set(&mut self, region: ClipRegion) {
        tracing::info!(bounds = ?region.bounds(), "clip region defined");
        self.region = Some(region);
    }

    pub fn clear(&mut self) {
        if self.region.take().is_some() {
            tracing::info!("clip region cleared");
        }
    }

    /// True when no region is active.
    pub fn contains(&self, p: Point) -> bool {
        self.region.map_or(true, |r| r.contains(p))
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        if let Some(region) = self.region.as_mut() {
            region.translate(dx, dy);
        }
    }
}
