use super::ClipRegion;
use crate::model::Point;

/// One half-plane of the clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Left,
    Right,
    Bottom,
    Top,
}

impl Boundary {
    /// Order in which the half-planes are applied.
    pub const ALL: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    fn inside(self, region: &ClipRegion, p: Point) -> bool {
        match self {
            Boundary::Left => p.x >= region.x_min(),
            Boundary::Right => p.x <= region.x_max(),
            Boundary::Bottom => p.y >= region.y_min(),
            Boundary::Top => p.y <= region.y_max(),
        }
    }

    /// Where `from → to` meets this boundary line. An edge parallel to the
    /// boundary keeps `from`'s coordinate on the free axis.
    fn intersect(self, region: &ClipRegion, from: Point, to: Point) -> Point {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        match self {
            Boundary::Left | Boundary::Right => {
                let x = if self == Boundary::Left {
                    region.x_min()
                } else {
                    region.x_max()
                };
                let y = if dx != 0.0 {
                    from.y + dy * (x - from.x) / dx
                } else {
                    from.y
                };
                Point::new(x, y)
            }
            Boundary::Bottom | Boundary::Top => {
                let y = if self == Boundary::Bottom {
                    region.y_min()
                } else {
                    region.y_max()
                };
                let x = if dy != 0.0 {
                    from.x + dx * (y - from.y) / dy
                } else {
                    from.x
                };
                Point::new(x, y)
            }
        }
    }

    fn clip(self, region: &ClipRegion, input: &[Point]) -> Vec<Point> {
        let Some(&last) = input.last() else {
            return Vec::new();
        };

        let mut output = Vec::with_capacity(input.len() + 2);
        let mut prev = last;
        for &curr in input {
            let prev_in = self.inside(region, prev);
            if self.inside(region, curr) {
                if !prev_in {
                    output.push(self.intersect(region, prev, curr));
                }
                output.push(curr);
            } else if prev_in {
                output.push(self.intersect(region, prev, curr));
            }
            prev = curr;
        }
        output
    }
}

/// Sutherland–Hodgman clipping of a closed vertex loop.
///
/// The loop is cyclic: the last vertex precedes the first. An empty result
/// means nothing of the polygon is visible.
pub fn clip_polygon(region: &ClipRegion, vertices: &[Point]) -> Vec<Point> {
    clip_polygon_passes(region, vertices)
        .pop()
        .unwrap_or_default()
}

/// Like [`clip_polygon`] but returns the loop after each boundary pass,
/// in [`Boundary::ALL`] order. Once a pass empties the loop the remaining
/// passes yield empty loops too.
pub fn clip_polygon_passes(region: &ClipRegion, vertices: &[Point]) -> Vec<Vec<Point>> {
    let mut passes: Vec<Vec<Point>> = Vec::with_capacity(Boundary::ALL.len());
    let mut current = vertices.to_vec();

    for boundary in Boundary::ALL {
        current = if current.is_empty() {
            Vec::new()
        } else {
            boundary.clip(region, &current)
        };
        passes.push(current.clone());
    }

    tracing::trace!(
        input = vertices.len(),
        output = current.len(),
        "polygon clipped"
    );
    passes
}
