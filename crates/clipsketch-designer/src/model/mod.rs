use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

mod ellipse;
mod point;
mod polygon;
mod rectangle;
mod segment;

pub use ellipse::{DesignEllipse, ELLIPSE_SEGMENTS};
pub use point::DesignPoint;
pub use polygon::DesignPolygon;
pub use rectangle::DesignRectangle;
pub use segment::DesignSegment;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Tight box around `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(first.x, first.y, first.x, first.y);
        Some(points.iter().skip(1).fold(init, |b, p| {
            Self::new(
                b.min_x.min(p.x),
                b.min_y.min(p.y),
                b.max_x.max(p.x),
                b.max_y.max(p.y),
            )
        }))
    }

    /// Exclusive containment: a point on an edge is outside.
    pub fn contains_strict(&self, p: Point) -> bool {
        self.min_x < p.x && p.x < self.max_x && self.min_y < p.y && p.y < self.max_y
    }

    pub fn padded(&self, pad: f64) -> Self {
        Self::new(
            self.min_x - pad,
            self.min_y - pad,
            self.max_x + pad,
            self.max_y + pad,
        )
    }

    /// Corners as (min/min, max/min, max/max, min/max).
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Arithmetic mean of `points`; the origin for an empty slice.
pub fn mean_point(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

pub trait DesignerShape {
    /// Stored vertices. For an ellipse these are the local-frame samples.
    fn vertices(&self) -> &[Point];

    /// Vertex loop in global coordinates.
    fn vertices_for_clipping(&self) -> Vec<Point> {
        self.vertices().to_vec()
    }

    /// Pivot used by rotation and scaling.
    fn centroid(&self) -> Point {
        mean_point(&self.vertices_for_clipping())
    }

    /// Maps the shape through a 3x3 homogeneous matrix.
    fn transform(&mut self, m: &Matrix3<f64>);

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.vertices_for_clipping())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Point,
    Segment,
    Rectangle,
    Ellipse,
    /// Transient result of polygon clipping; never stored in a scene.
    ClippedPolygon,
}

impl ShapeType {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeType::Point => "Point",
            ShapeType::Segment => "Segment",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::ClippedPolygon => "Clipped Polygon",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(DesignPoint),
    Segment(DesignSegment),
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    ClippedPolygon(DesignPolygon),
}

impl DesignerShape for Shape {
    fn vertices(&self) -> &[Point] {
        match self {
            Shape::Point(s) => s.vertices(),
            Shape::Segment(s) => s.vertices(),
            Shape::Rectangle(s) => s.vertices(),
            Shape::Ellipse(s) => s.vertices(),
            Shape::ClippedPolygon(s) => s.vertices(),
        }
    }

    fn vertices_for_clipping(&self) -> Vec<Point> {
        match self {
            Shape::Point(s) => s.vertices_for_clipping(),
            Shape::Segment(s) => s.vertices_for_clipping(),
            Shape::Rectangle(s) => s.vertices_for_clipping(),
            Shape::Ellipse(s) => s.vertices_for_clipping(),
            Shape::ClippedPolygon(s) => s.vertices_for_clipping(),
        }
    }

    fn centroid(&self) -> Point {
        match self {
            Shape::Point(s) => s.centroid(),
            Shape::Segment(s) => s.centroid(),
            Shape::Rectangle(s) => s.centroid(),
            Shape::Ellipse(s) => s.centroid(),
            Shape::ClippedPolygon(s) => s.centroid(),
        }
    }

    fn transform(&mut self, m: &Matrix3<f64>) {
        match self {
            Shape::Point(s) => s.transform(m),
            Shape::Segment(s) => s.transform(m),
            Shape::Rectangle(s) => s.transform(m),
            Shape::Ellipse(s) => s.transform(m),
            Shape::ClippedPolygon(s) => s.transform(m),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Point(_) => ShapeType::Point,
            Shape::Segment(_) => ShapeType::Segment,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::ClippedPolygon(_) => ShapeType::ClippedPolygon,
        }
    }

    pub fn as_ellipse(&self) -> Option<&DesignEllipse> {
        match self {
            Shape::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_ellipse_mut(&mut self) -> Option<&mut DesignEllipse> {
        match self {
            Shape::Ellipse(e) => Some(e),
            _ => None,
        }
    }
}

/// Replaces every vertex with its image under `m`.
pub(crate) fn transform_vertices(vertices: &mut [Point], m: &Matrix3<f64>) {
    for v in vertices.iter_mut() {
        *v = crate::transform::transform_point(m, *v);
    }
}
