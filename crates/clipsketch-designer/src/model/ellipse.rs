use nalgebra::Matrix3;

use super::{DesignerShape, Point};
use crate::transform::{rotation_delta_degrees, transform_point};

/// Number of samples along the ellipse outline.
pub const ELLIPSE_SEGMENTS: usize = 72;

/// Ellipse kept as center, radii and accumulated rotation.
///
/// `local` holds samples in the ellipse's own frame (centered at the origin,
/// unrotated). They change only when the radii change; global geometry is
/// derived on demand by rotating then translating them.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignEllipse {
    pub center: Point,
    radius_x: f64,
    radius_y: f64,
    pub rotation_degrees: f64,
    local: Vec<Point>,
}

impl DesignEllipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            rotation_degrees: 0.0,
            local: sample_local(radius_x, radius_y),
        }
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    pub fn set_radii(&mut self, radius_x: f64, radius_y: f64) {
        self.radius_x = radius_x;
        self.radius_y = radius_y;
        self.local = sample_local(radius_x, radius_y);
    }

    /// Multiplies both radii by `factor` and resamples.
    pub fn scale_radii(&mut self, factor: f64) {
        self.set_radii(self.radius_x * factor, self.radius_y * factor);
    }
}

fn sample_local(radius_x: f64, radius_y: f64) -> Vec<Point> {
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (ELLIPSE_SEGMENTS as f64);
            Point::new(radius_x * theta.cos(), radius_y * theta.sin())
        })
        .collect()
}

impl DesignerShape for DesignEllipse {
    fn vertices(&self) -> &[Point] {
        &self.local
    }

    fn vertices_for_clipping(&self) -> Vec<Point> {
        let rad = self.rotation_degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        self.local
            .iter()
            .map(|p| {
                Point::new(
                    p.x * cos - p.y * sin + self.center.x,
                    p.x * sin + p.y * cos + self.center.y,
                )
            })
            .collect()
    }

    fn centroid(&self) -> Point {
        self.center
    }

    /// Moves the center and, for rotation blocks, accumulates the angle.
    ///
    /// Scaling is not read from the matrix; the transform engine resizes
    /// the radii directly before calling this.
    fn transform(&mut self, m: &Matrix3<f64>) {
        self.center = transform_point(m, self.center);

        if let Some(delta) = rotation_delta_degrees(m) {
            self.rotation_degrees += delta;
        }
    }
}
