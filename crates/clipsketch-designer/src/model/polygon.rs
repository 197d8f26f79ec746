use nalgebra::Matrix3;

use super::{transform_vertices, DesignerShape, Point};

/// Output of polygon clipping, handed to the renderer and then dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignPolygon {
    vertices: Vec<Point>,
}

impl DesignPolygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }
}

impl DesignerShape for DesignPolygon {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn transform(&mut self, m: &Matrix3<f64>) {
        transform_vertices(&mut self.vertices, m);
    }
}
