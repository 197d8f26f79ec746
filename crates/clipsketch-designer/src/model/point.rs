use nalgebra::Matrix3;

use super::{transform_vertices, DesignerShape, Point};

/// A single-vertex shape drawn as a dot.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignPoint {
    vertices: Vec<Point>,
}

impl DesignPoint {
    pub fn new(position: Point) -> Self {
        Self {
            vertices: vec![position],
        }
    }

    pub fn position(&self) -> Point {
        self.vertices[0]
    }
}

impl DesignerShape for DesignPoint {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn transform(&mut self, m: &Matrix3<f64>) {
        transform_vertices(&mut self.vertices, m);
    }
}
