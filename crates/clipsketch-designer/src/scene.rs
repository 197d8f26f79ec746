//! Ordered shape storage.
//!
//! Insertion order is draw order: later shapes render on top and win picks.

use clipsketch_core::Rgb;

use crate::model::{DesignerShape, Point, Shape, ShapeType};
use crate::transform::{self, Transformation};

/// Stroke attributes of a drawn shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Rgb,
    /// Line width; kept within the editor's thickness bounds by the caller.
    pub thickness: f64,
}

impl Style {
    pub fn new(color: Rgb, thickness: f64) -> Self {
        Self { color, thickness }
    }
}

/// A shape placed in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: u64,
    pub shape: Shape,
    pub style: Style,
    pub selected: bool,
}

impl DrawingObject {
    pub fn new(id: u64, shape: Shape, style: Style) -> Self {
        Self {
            id,
            shape,
            style,
            selected: false,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    pub fn vertices_for_clipping(&self) -> Vec<Point> {
        self.shape.vertices_for_clipping()
    }

    pub fn apply(&mut self, t: Transformation) {
        transform::apply(&mut self.shape, t);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<DrawingObject>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a shape on top of the draw order and returns its id.
    pub fn add(&mut self, shape: Shape, style: Style) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        tracing::debug!(id, shape = shape.shape_type().name(), "shape added");
        self.objects.push(DrawingObject::new(id, shape, style));
        id
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> &[DrawingObject] {
        &self.objects
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DrawingObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut DrawingObject> {
        self.objects.iter_mut()
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        tracing::info!(count = self.objects.len(), "scene cleared");
        self.objects.clear();
    }
}
