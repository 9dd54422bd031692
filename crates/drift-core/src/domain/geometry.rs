//! Screen geometry: integer points, screen bounds, and absolute coordinates.
//!
//! All coordinates are in physical pixels with the origin at the top-left of
//! the primary screen.  Points may lie outside the screen (a Bezier control
//! point often does); nothing here rejects them.
//!
//! # Absolute coordinates (for beginners)
//!
//! Some input APIs (notably Windows `SendInput` with `MOUSEEVENTF_ABSOLUTE`)
//! do not accept pixels.  They expect a position normalized to the range
//! `[0, 65535]` regardless of resolution, so `(0, 0)` is the top-left corner
//! and `(65535, 65535)` is the bottom-right corner.  [`ScreenBounds::to_absolute`]
//! performs that scaling with `coordinate * 65535 / dimension`.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest value of the normalized absolute coordinate range.
pub const ABSOLUTE_MAX: i32 = 65535;

/// An integer screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`, saturating at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Size of the addressable screen in pixels.
///
/// Queried once from the environment at startup and treated as constant for
/// the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if `point` lies inside `[0, width) × [0, height)`.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < self.width as i64
            && (point.y as i64) < self.height as i64
    }

    /// Draws a uniformly random on-screen point.
    ///
    /// A zero-sized dimension yields coordinate 0 on that axis.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x = rng.gen_range(0..self.width.max(1));
        let y = rng.gen_range(0..self.height.max(1));
        Point::new(x as i32, y as i32)
    }

    /// Scales a pixel position into the `[0, 65535]` absolute range.
    ///
    /// Uses truncation, matching what the injection API expects, and clamps
    /// off-screen points to the nearest edge.
    pub fn to_absolute(&self, point: Point) -> (i32, i32) {
        (
            scale_to_absolute(point.x, self.width),
            scale_to_absolute(point.y, self.height),
        )
    }

    /// Inverse of [`to_absolute`](Self::to_absolute), rounded to the nearest pixel.
    ///
    /// For on-screen points the round trip is exact to within one pixel.
    pub fn from_absolute(&self, abs_x: i32, abs_y: i32) -> Point {
        Point::new(
            scale_from_absolute(abs_x, self.width),
            scale_from_absolute(abs_y, self.height),
        )
    }
}

fn scale_to_absolute(coordinate: i32, dimension: u32) -> i32 {
    if dimension == 0 {
        return 0;
    }
    let scaled = (coordinate as f64 * ABSOLUTE_MAX as f64) / dimension as f64;
    (scaled as i32).clamp(0, ABSOLUTE_MAX)
}

fn scale_from_absolute(value: i32, dimension: u32) -> i32 {
    (value as f64 * dimension as f64 / ABSOLUTE_MAX as f64).round() as i32
}

// ── Tests ─────────────────────────────────────────────────────────────────────
