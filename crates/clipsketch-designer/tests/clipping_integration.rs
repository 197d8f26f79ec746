//! Window clipping integration tests

use clipsketch_designer::clip::clip_polygon_passes;
use clipsketch_designer::{clip_line, clip_polygon, ClipRegion, Outcode, Point};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn region() -> ClipRegion {
    ClipRegion::from_corners(Point::new(0.0, 0.0), Point::new(100.0, 100.0))
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

fn within(region: &ClipRegion, p: Point) -> bool {
    p.x >= region.x_min() - EPS
        && p.x <= region.x_max() + EPS
        && p.y >= region.y_min() - EPS
        && p.y <= region.y_max() + EPS
}

#[test]
fn test_segment_entering_from_left() {
    let (a, b) = clip_line(&region(), Point::new(-10.0, 50.0), Point::new(50.0, 50.0)).unwrap();
    assert!(close(a, Point::new(0.0, 50.0)));
    assert!(close(b, Point::new(50.0, 50.0)));
}

#[test]
fn test_segment_crossing_whole_window() {
    let (a, b) = clip_line(&region(), Point::new(-50.0, -50.0), Point::new(150.0, 150.0)).unwrap();
    assert!(close(a, Point::new(0.0, 0.0)));
    assert!(close(b, Point::new(100.0, 100.0)));
}

#[test]
fn test_segment_sharing_outside_side_is_rejected() {
    let r = region();
    assert!(clip_line(&r, Point::new(-20.0, 10.0), Point::new(-5.0, 90.0)).is_none());
    assert!(clip_line(&r, Point::new(10.0, 120.0), Point::new(90.0, 101.0)).is_none());
}

#[test]
fn test_segment_missing_corner_is_rejected() {
    // Outcodes differ but the segment passes outside the top-left corner.
    assert!(clip_line(&region(), Point::new(-30.0, 80.0), Point::new(20.0, 130.0)).is_none());
}

#[test]
fn test_segment_on_boundary_is_kept() {
    let (a, b) = clip_line(&region(), Point::new(0.0, 10.0), Point::new(0.0, 90.0)).unwrap();
    assert_eq!(a, Point::new(0.0, 10.0));
    assert_eq!(b, Point::new(0.0, 90.0));
}

#[test]
fn test_outcode_bits() {
    let r = region();
    assert_eq!(r.outcode(Point::new(50.0, 50.0)), Outcode::INSIDE);
    assert_eq!(r.outcode(Point::new(-1.0, 50.0)), Outcode::LEFT);
    assert_eq!(r.outcode(Point::new(101.0, -1.0)), Outcode::RIGHT | Outcode::BOTTOM);
    assert_eq!(r.outcode(Point::new(-1.0, 101.0)).bits(), 0b1001);
}

#[test]
fn test_polygon_enclosing_window_becomes_window() {
    let square = [
        Point::new(-50.0, -50.0),
        Point::new(150.0, -50.0),
        Point::new(150.0, 150.0),
        Point::new(-50.0, 150.0),
    ];
    let clipped = clip_polygon(&region(), &square);
    assert_eq!(clipped.len(), 4);

    for corner in region().as_bounds().corners() {
        assert!(
            clipped.iter().any(|p| close(*p, corner)),
            "missing corner {:?} in {:?}",
            corner,
            clipped
        );
    }
}

#[test]
fn test_polygon_just_larger_than_window() {
    let square = [
        Point::new(-10.0, -10.0),
        Point::new(110.0, -10.0),
        Point::new(110.0, 110.0),
        Point::new(-10.0, 110.0),
    ];
    let clipped = clip_polygon(&region(), &square);
    assert_eq!(clipped.len(), 4);
    for corner in region().as_bounds().corners() {
        assert!(clipped.iter().any(|p| close(*p, corner)), "missing {:?}", corner);
    }
}

#[test]
fn test_polygon_partially_outside() {
    let triangle = [
        Point::new(50.0, 50.0),
        Point::new(150.0, 50.0),
        Point::new(50.0, 80.0),
    ];
    let clipped = clip_polygon(&region(), &triangle);
    assert!(clipped.len() >= 3);
    assert!(clipped.iter().all(|p| within(&region(), *p)));
    assert!(clipped.iter().any(|p| (p.x - 100.0).abs() < EPS));
}

#[test]
fn test_polygon_fully_outside_is_empty() {
    let square = [
        Point::new(200.0, 200.0),
        Point::new(300.0, 200.0),
        Point::new(300.0, 300.0),
        Point::new(200.0, 300.0),
    ];
    assert!(clip_polygon(&region(), &square).is_empty());

    let passes = clip_polygon_passes(&region(), &square);
    assert_eq!(passes.len(), 4);
    assert!(passes.iter().skip(1).all(|pass| pass.is_empty()));
}

#[test]
fn test_empty_polygon_stays_empty() {
    assert!(clip_polygon(&region(), &[]).is_empty());
}

fn coord() -> impl Strategy<Value = f64> {
    (-200i32..300).prop_map(f64::from)
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn prop_contains_agrees_with_outcode(
        a in point(),
        b in point(),
        p in point(),
        fx in -200.0f64..300.0,
        fy in -200.0f64..300.0,
    ) {
        let r = ClipRegion::from_corners(a, b);
        prop_assert_eq!(r.contains(p), r.outcode(p).is_inside());
        let q = Point::new(fx, fy);
        prop_assert_eq!(r.contains(q), r.outcode(q).is_inside());
    }

    #[test]
    fn prop_clipped_segment_lies_in_window(p1 in point(), p2 in point()) {
        let r = region();
        if let Some((a, b)) = clip_line(&r, p1, p2) {
            prop_assert!(within(&r, a));
            prop_assert!(within(&r, b));
        }
    }

    #[test]
    fn prop_inside_segment_is_unchanged(x1 in 0i32..=100, y1 in 0i32..=100, x2 in 0i32..=100, y2 in 0i32..=100) {
        let p1 = Point::new(f64::from(x1), f64::from(y1));
        let p2 = Point::new(f64::from(x2), f64::from(y2));
        prop_assert_eq!(clip_line(&region(), p1, p2), Some((p1, p2)));
    }

    #[test]
    fn prop_clipped_polygon_lies_in_window(vertices in prop::collection::vec(point(), 3..12)) {
        let r = region();
        for p in clip_polygon(&r, &vertices) {
            prop_assert!(within(&r, p));
        }
    }

    #[test]
    fn prop_inside_polygon_is_unchanged(
        coords in prop::collection::vec((0i32..=100, 0i32..=100), 3..10)
    ) {
        let vertices: Vec<Point> = coords
            .into_iter()
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
            .collect();
        prop_assert_eq!(clip_polygon(&region(), &vertices), vertices);
    }
}
