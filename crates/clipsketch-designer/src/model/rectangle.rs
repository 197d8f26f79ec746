use nalgebra::Matrix3;

use super::{transform_vertices, Bounds, DesignerShape, Point};

/// Four-vertex loop. Created axis-aligned; rotation moves the vertices
/// so later geometry may be any parallelogram.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRectangle {
    vertices: Vec<Point>,
}

impl DesignRectangle {
    /// Builds the rectangle spanned by two opposite corners picked in any order.
    ///
    /// Vertices wind min/min, max/min, max/max, min/max. Coincident corners
    /// give a zero-area rectangle.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let b = Bounds::new(
            p1.x.min(p2.x),
            p1.y.min(p2.y),
            p1.x.max(p2.x),
            p1.y.max(p2.y),
        );
        Self {
            vertices: b.corners().to_vec(),
        }
    }
}

impl DesignerShape for DesignRectangle {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn transform(&mut self, m: &Matrix3<f64>) {
        transform_vertices(&mut self.vertices, m);
    }
}
