//! Affine transforms in 3x3 homogeneous form.
//!
//! Points are column vectors `[x, y, 1]ᵀ`, so a matrix maps a point as
//! `M · p` and composition reads right to left. Rotation and scaling are
//! anchored on the shape's centroid:
//!
//! ```text
//! M = translate(+pivot) · R · translate(-pivot)
//! ```

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::model::{DesignerShape, Point, Shape};

/// A transform request against a single shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transformation {
    Translate { dx: f64, dy: f64 },
    /// Counter-clockwise in a y-up frame, degrees.
    Rotate { degrees: f64 },
    /// Uniform scale factor. Zero collapses the shape onto its pivot.
    Scale { factor: f64 },
}

impl Transformation {
    /// Builds the full matrix for this transform anchored at `pivot`.
    ///
    /// Translation ignores the pivot.
    pub fn matrix(&self, pivot: Point) -> Matrix3<f64> {
        match *self {
            Transformation::Translate { dx, dy } => translation(dx, dy),
            Transformation::Rotate { degrees } => about_pivot(&rotation(degrees), pivot),
            Transformation::Scale { factor } => about_pivot(&scaling(factor, factor), pivot),
        }
    }
}

pub fn translation(dx: f64, dy: f64) -> Matrix3<f64> {
    Matrix3::new(
        1.0, 0.0, dx, //
        0.0, 1.0, dy, //
        0.0, 0.0, 1.0,
    )
}

pub fn rotation(degrees: f64) -> Matrix3<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Matrix3::new(
        cos, -sin, 0.0, //
        sin, cos, 0.0, //
        0.0, 0.0, 1.0,
    )
}

pub fn scaling(sx: f64, sy: f64) -> Matrix3<f64> {
    Matrix3::new(
        sx, 0.0, 0.0, //
        0.0, sy, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Conjugates `m` so that it acts around `pivot` instead of the origin.
pub fn about_pivot(m: &Matrix3<f64>, pivot: Point) -> Matrix3<f64> {
    let to_origin = translation(-pivot.x, -pivot.y);
    let from_origin = translation(pivot.x, pivot.y);
    from_origin * m * to_origin
}

pub fn transform_point(m: &Matrix3<f64>, p: Point) -> Point {
    let v = m * Vector3::new(p.x, p.y, 1.0);
    Point::new(v.x, v.y)
}

/// True when the upper-left 2x2 block has the shape of a rotation
/// (`m00 == m11` and `m01 == -m10`).
///
/// Compared with exact float equality. Matrices built by this module in a
/// single step always pass; products of several independently rounded
/// matrices may not, in which case an ellipse silently keeps its angle.
pub fn is_pure_rotation(m: &Matrix3<f64>) -> bool {
    m[(0, 0)] == m[(1, 1)] && m[(0, 1)] == -m[(1, 0)]
}

/// Rotation carried by `m` in degrees, if its linear block is a rotation.
///
/// Translations and uniform positive scales report `Some(0.0)`; a uniform
/// negative scale reports `Some(180.0)`, which validated settings never build.
pub fn rotation_delta_degrees(m: &Matrix3<f64>) -> Option<f64> {
    is_pure_rotation(m).then(|| m[(1, 0)].atan2(m[(0, 0)]).to_degrees())
}

/// Applies `t` to `shape` in place, pivoting on its centroid.
///
/// Ellipses scale through their radii, not through the matrix: the radii
/// are multiplied first, then the matrix only moves the center.
pub fn apply(shape: &mut Shape, t: Transformation) {
    let pivot = shape.centroid();
    let m = t.matrix(pivot);

    if let Transformation::Scale { factor } = t {
        if let Some(ellipse) = shape.as_ellipse_mut() {
            ellipse.scale_radii(factor);
        }
    }

    shape.transform(&m);
    tracing::debug!(
        shape = shape.shape_type().name(),
        ?t,
        pivot_x = pivot.x,
        pivot_y = pivot.y,
        "applied transform"
    );
}
