//! Affine transform integration tests

use clipsketch_designer::transform::{self, apply};
use clipsketch_designer::{
    DesignEllipse, DesignPoint, DesignRectangle, DesignSegment, DesignerShape, Point, Shape,
    Transformation,
};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

fn rectangle() -> Shape {
    Shape::Rectangle(DesignRectangle::from_corners(
        Point::new(10.0, 20.0),
        Point::new(70.0, 60.0),
    ))
}

fn ellipse() -> Shape {
    Shape::Ellipse(DesignEllipse::new(Point::new(50.0, 50.0), 30.0, 10.0))
}

fn assert_same_geometry(before: &Shape, after: &Shape) {
    let a = before.vertices_for_clipping();
    let b = after.vertices_for_clipping();
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(&b) {
        assert!(close(*p, *q), "{:?} != {:?}", p, q);
    }
}

#[test]
fn test_full_turn_is_identity() {
    for original in [rectangle(), ellipse()] {
        let mut shape = original.clone();
        apply(&mut shape, Transformation::Rotate { degrees: 360.0 });
        assert_same_geometry(&original, &shape);
    }
}

#[test]
fn test_unit_scale_is_noop() {
    for original in [rectangle(), ellipse()] {
        let mut shape = original.clone();
        apply(&mut shape, Transformation::Scale { factor: 1.0 });
        assert_same_geometry(&original, &shape);
    }

    let mut shape = ellipse();
    apply(&mut shape, Transformation::Scale { factor: 1.0 });
    let e = shape.as_ellipse().unwrap();
    assert_eq!(e.radius_x(), 30.0);
    assert_eq!(e.radius_y(), 10.0);
}

#[test]
fn test_rectangle_rotates_about_centroid() {
    let mut shape = rectangle();
    let centroid = shape.centroid();
    apply(&mut shape, Transformation::Rotate { degrees: 90.0 });

    assert!(close(shape.centroid(), centroid));
    // 60x40 box turned a quarter becomes 40x60.
    let bounds = shape.bounds().unwrap();
    assert!((bounds.width() - 40.0).abs() < EPS);
    assert!((bounds.height() - 60.0).abs() < EPS);
}

#[test]
fn test_ellipse_rotate_then_translate() {
    let mut shape = ellipse();
    apply(&mut shape, Transformation::Rotate { degrees: 90.0 });
    apply(&mut shape, Transformation::Translate { dx: 10.0, dy: 0.0 });

    let e = shape.as_ellipse().unwrap();
    assert!(close(e.center, Point::new(60.0, 50.0)));
    assert!((e.rotation_degrees - 90.0).abs() < EPS);

    // The long axis now runs vertically.
    let bounds = shape.bounds().unwrap();
    assert!((bounds.height() - 60.0).abs() < 1e-6);
    assert!((bounds.width() - 20.0).abs() < 1e-6);
}

#[test]
fn test_ellipse_scale_changes_radii_not_center() {
    let mut shape = ellipse();
    apply(&mut shape, Transformation::Scale { factor: 2.0 });

    let e = shape.as_ellipse().unwrap();
    assert!(close(e.center, Point::new(50.0, 50.0)));
    assert!((e.radius_x() - 60.0).abs() < EPS);
    assert!((e.radius_y() - 20.0).abs() < EPS);
    assert_eq!(e.rotation_degrees, 0.0);
}

#[test]
fn test_zero_scale_collapses_to_centroid() {
    let mut shape = rectangle();
    let centroid = shape.centroid();
    apply(&mut shape, Transformation::Scale { factor: 0.0 });

    assert!(shape
        .vertices_for_clipping()
        .iter()
        .all(|p| close(*p, centroid)));
}

#[test]
fn test_point_and_segment_translate() {
    let mut point = Shape::Point(DesignPoint::new(Point::new(1.0, 2.0)));
    apply(&mut point, Transformation::Translate { dx: 4.0, dy: -2.0 });
    assert_eq!(point.vertices(), &[Point::new(5.0, 0.0)]);

    let mut segment = Shape::Segment(DesignSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
    apply(&mut segment, Transformation::Rotate { degrees: 90.0 });
    let v = segment.vertices();
    assert!(close(v[0], Point::new(5.0, -5.0)));
    assert!(close(v[1], Point::new(5.0, 5.0)));
}

#[test]
fn test_composed_rotation_matrix_is_detected() {
    let m = Transformation::Rotate { degrees: 30.0 }.matrix(Point::new(12.0, -7.0));
    let delta = transform::rotation_delta_degrees(&m).unwrap();
    assert!((delta - 30.0).abs() < EPS);

    let skew = transform::scaling(2.0, 1.0);
    assert!(!transform::is_pure_rotation(&skew));
}

proptest! {
    #[test]
    fn prop_translate_round_trip(dx in -500.0f64..500.0, dy in -500.0f64..500.0) {
        for original in [rectangle(), ellipse()] {
            let mut shape = original.clone();
            apply(&mut shape, Transformation::Translate { dx, dy });
            apply(&mut shape, Transformation::Translate { dx: -dx, dy: -dy });
            for (p, q) in original.vertices_for_clipping().iter().zip(shape.vertices_for_clipping()) {
                prop_assert!((p.x - q.x).abs() < 1e-6 && (p.y - q.y).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn prop_transform_keeps_vertex_count(degrees in -720.0f64..720.0, factor in 0.1f64..4.0) {
        for original in [rectangle(), ellipse()] {
            let mut shape = original.clone();
            apply(&mut shape, Transformation::Rotate { degrees });
            apply(&mut shape, Transformation::Scale { factor });
            prop_assert_eq!(
                shape.vertices_for_clipping().len(),
                original.vertices_for_clipping().len()
            );
        }
    }
}
