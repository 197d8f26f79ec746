use super::{ClipRegion, Outcode};
use crate::model::Point;

/// Cohen–Sutherland segment clipping.
///
/// Returns the visible part of `p1 → p2` with endpoint correspondence kept
/// (the first returned point lies on `p1`'s side), or `None` when nothing
/// of the segment is inside `region`.
///
/// Outside endpoints are resolved one bit at a time in the priority
/// TOP, BOTTOM, RIGHT, LEFT; endpoint 1 is moved first when both are out.
pub fn clip_line(region: &ClipRegion, p1: Point, p2: Point) -> Option<(Point, Point)> {
    let (x_min, y_min, x_max, y_max) = region.bounds();
    let (mut a, mut b) = (p1, p2);
    let mut code_a = region.outcode(a);
    let mut code_b = region.outcode(b);

    loop {
        if code_a.is_inside() && code_b.is_inside() {
            return Some((a, b));
        }
        if !(code_a & code_b).is_inside() {
            return None;
        }

        let moving_a = !code_a.is_inside();
        let code = if moving_a { code_a } else { code_b };
        let dx = b.x - a.x;
        let dy = b.y - a.y;

        // A zero denominator keeps the anchor's coordinate on that axis.
        let at_y = |y: f64| {
            let x = if dy != 0.0 { a.x + dx * (y - a.y) / dy } else { a.x };
            Point::new(x, y)
        };
        let at_x = |x: f64| {
            let y = if dx != 0.0 { a.y + dy * (x - a.x) / dx } else { a.y };
            Point::new(x, y)
        };

        let crossing = if code.contains(Outcode::TOP) {
            at_y(y_max)
        } else if code.contains(Outcode::BOTTOM) {
            at_y(y_min)
        } else if code.contains(Outcode::RIGHT) {
            at_x(x_max)
        } else {
            at_x(x_min)
        };

        if moving_a {
            a = crossing;
            code_a = region.outcode(a);
        } else {
            b = crossing;
            code_b = region.outcode(b);
        }
    }
}
