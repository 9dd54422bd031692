//! Cubic Bezier curve evaluation.

use crate::domain::geometry::Point;

/// A cubic Bezier curve defined by four control points.
///
/// The curve starts at `p0`, ends at `p3`, and is pulled toward `p1` and `p2`
/// in between.  It always lies inside the convex hull of the four points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBezier {
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at `t ∈ [0, 1]` using the Bernstein basis.
    ///
    /// Each axis is computed independently and truncated toward zero.
    /// `t = 0` yields `p0` and `t = 1` yields `p3` exactly.
    pub fn at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let tt = t * t;
        let uu = u * u;
        let uuu = uu * u;
        let ttt = tt * t;

        let blend = |a: i32, b: i32, c: i32, d: i32| -> i32 {
            (uuu * a as f64 + 3.0 * uu * t * b as f64 + 3.0 * u * tt * c as f64 + ttt * d as f64)
                as i32
        };

        Point::new(
            blend(self.p0.x, self.p1.x, self.p2.x, self.p3.x),
            blend(self.p0.y, self.p1.y, self.p2.y, self.p3.y),
        )
    }

    /// Returns the axis-aligned box `(min, max)` enclosing all control points.
    pub fn control_box(&self) -> (Point, Point) {
        let xs = [self.p0.x, self.p1.x, self.p2.x, self.p3.x];
        let ys = [self.p0.y, self.p1.y, self.p2.y, self.p3.y];
        let min = Point::new(
            xs.iter().copied().min().unwrap_or(0),
            ys.iter().copied().min().unwrap_or(0),
        );
        let max = Point::new(
            xs.iter().copied().max().unwrap_or(0),
            ys.iter().copied().max().unwrap_or(0),
        );
        (min, max)
    }
}
