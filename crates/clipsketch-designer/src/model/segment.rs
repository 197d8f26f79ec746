use nalgebra::Matrix3;

use super::{transform_vertices, DesignerShape, Point};

/// Straight line segment. Endpoint order is preserved through clipping.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSegment {
    vertices: Vec<Point>,
}

impl DesignSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            vertices: vec![start, end],
        }
    }

    pub fn start(&self) -> Point {
        self.vertices[0]
    }

    pub fn end(&self) -> Point {
        self.vertices[1]
    }
}

impl DesignerShape for DesignSegment {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn transform(&mut self, m: &Matrix3<f64>) {
        transform_vertices(&mut self.vertices, m);
    }
}
