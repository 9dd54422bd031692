//! Trajectory planner: builds a randomized Bezier curve and samples it.
//!
//! # How a trajectory is planned
//!
//! 1. Draw a `complexity` from `[min_complexity, max_complexity)`.
//! 2. `steps = base_steps × complexity` (150–350 with the defaults).
//! 3. Bend the path: the first control point is the start plus a random
//!    offset, the second is the target plus an independent random offset.
//!    Each offset component is drawn from `[-max_control_offset, +max_control_offset]`.
//! 4. For every `i` in `0..=steps`, evaluate the curve at
//!    `ease_in_out_cubic(i / steps)`.
//!
//! Because the eased progress is exactly `0` for the first sample and exactly
//! `1` for the last, the trajectory starts on the start point and ends on the
//! target regardless of where the control points landed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::geometry::Point;

use super::{bezier::CubicBezier, easing::ease_in_out_cubic};

/// Tunables for [`TrajectoryPlanner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Steps contributed by each unit of complexity.
    pub base_steps: u32,
    /// Smallest complexity that can be drawn (inclusive).
    pub min_complexity: u32,
    /// Upper complexity bound (exclusive).
    pub max_complexity: u32,
    /// Largest per-axis displacement of a control point from its endpoint.
    pub max_control_offset: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_steps: 50,
            min_complexity: 3,
            max_complexity: 8,
            max_control_offset: 100,
        }
    }
}

/// Longest trajectory a configuration may ask for.
pub const MAX_STEPS: u32 = 100_000;

impl PlannerConfig {
    /// Number of steps for the given complexity, saturating at `u32::MAX`.
    pub fn steps_for(&self, complexity: u32) -> u32 {
        self.base_steps.saturating_mul(complexity)
    }

    /// Largest complexity [`TrajectoryPlanner::draw_complexity`] can return.
    pub fn max_drawn_complexity(&self) -> u32 {
        self.max_complexity.saturating_sub(1).max(self.min_complexity)
    }

    /// Step count of the longest trajectory this configuration can plan, or
    /// `None` if it does not fit in a `u32`.
    pub fn max_steps(&self) -> Option<u32> {
        self.base_steps.checked_mul(self.max_drawn_complexity())
    }
}

/// An ordered sequence of points from a start to a target, indexed `0..=steps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    points: Vec<Point>,
    curve: CubicBezier,
    complexity: u32,
}

impl Trajectory {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of steps; one less than the number of points.
    pub fn steps(&self) -> u32 {
        self.points.len().saturating_sub(1) as u32
    }

    pub fn complexity(&self) -> u32 {
        self.complexity
    }

    /// The curve this trajectory was sampled from.
    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Replaces every point with `f(step, point)`, keeping curve metadata.
    pub fn map_points<F>(self, mut f: F) -> Self
    where
        F: FnMut(u32, Point) -> Point,
    {
        let points = self
            .points
            .into_iter()
            .enumerate()
            .map(|(i, p)| f(i as u32, p))
            .collect();
        Self { points, ..self }
    }
}

/// Plans eased, curved trajectories between two points.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryPlanner {
    config: PlannerConfig,
}

impl TrajectoryPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Draws a complexity from the configured half-open range.
    ///
    /// An empty range degrades to `min_complexity`.
    pub fn draw_complexity<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let cfg = &self.config;
        if cfg.min_complexity < cfg.max_complexity {
            rng.gen_range(cfg.min_complexity..cfg.max_complexity)
        } else {
            cfg.min_complexity
        }
    }

    /// Plans a trajectory from `start` to `target` with a random complexity.
    pub fn plan<R: Rng + ?Sized>(&self, start: Point, target: Point, rng: &mut R) -> Trajectory {
        let complexity = self.draw_complexity(rng);
        self.plan_with_complexity(start, target, complexity, rng)
    }

    /// Plans a trajectory with a caller-chosen complexity.
    ///
    /// Control points are still drawn from `rng`.
    pub fn plan_with_complexity<R: Rng + ?Sized>(
        &self,
        start: Point,
        target: Point,
        complexity: u32,
        rng: &mut R,
    ) -> Trajectory {
        let control1 = self.random_offset(start, rng);
        let control2 = self.random_offset(target, rng);
        let curve = CubicBezier::new(start, control1, control2, target);
        sample(curve, self.config.steps_for(complexity), complexity)
    }

    fn random_offset<R: Rng + ?Sized>(&self, point: Point, rng: &mut R) -> Point {
        let max = self.config.max_control_offset.min(i32::MAX as u32) as i32;
        point.offset(rng.gen_range(-max..=max), rng.gen_range(-max..=max))
    }
}

/// Samples `curve` at `steps + 1` eased progress values.
///
/// With `steps == 0` the trajectory is the single start point.
pub fn sample(curve: CubicBezier, steps: u32, complexity: u32) -> Trajectory {
    let points = if steps == 0 {
        vec![curve.p0]
    } else {
        (0..=steps)
            .map(|i| curve.at(ease_in_out_cubic(i as f64 / steps as f64)))
            .collect()
    };
    Trajectory {
        points,
        curve,
        complexity,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_steps_for_saturates_instead_of_overflowing() {
        let cfg = PlannerConfig {
            base_steps: 1_000_000_000,
            ..PlannerConfig::default()
        };
        assert_eq!(cfg.steps_for(5), u32::MAX);
    }

    #[test]
    fn test_max_steps_uses_largest_drawable_complexity() {
        // Arrange
        let default = PlannerConfig::default();
        let pinned = PlannerConfig {
            min_complexity: 4,
            max_complexity: 4,
            ..PlannerConfig::default()
        };
        let huge = PlannerConfig {
            base_steps: 1_000_000_000,
            ..PlannerConfig::default()
        };

        // Act / Assert
        assert_eq!(default.max_steps(), Some(350));
        assert_eq!(pinned.max_steps(), Some(200));
        assert_eq!(huge.max_steps(), None);
    }

    #[test]
    fn test_default_config_matches_built_in_constants() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.base_steps, 50);
        assert_eq!((cfg.min_complexity, cfg.max_complexity), (3, 8));
        assert_eq!(cfg.max_control_offset, 100);
    }

    #[test]
    fn test_steps_for_complexity_five_is_250() {
        assert_eq!(PlannerConfig::default().steps_for(5), 250);
    }

    #[test]
    fn test_steps_strictly_increase_with_complexity() {
        let cfg = PlannerConfig::default();
        for c in 1..20 {
            assert!(cfg.steps_for(c) < cfg.steps_for(c + 1));
            assert_eq!(cfg.steps_for(c) % cfg.base_steps, 0);
        }
    }

    #[test]
    fn test_draw_complexity_stays_in_half_open_range() {
        let planner = TrajectoryPlanner::default();
        let mut rng = rng(10);
        let mut seen = [false; 8];
        for _ in 0..2_000 {
            let c = planner.draw_complexity(&mut rng);
            assert!((3..8).contains(&c), "complexity {c} out of range");
            seen[c as usize] = true;
        }
        assert!(seen[3..8].iter().all(|s| *s), "every complexity 3..8 should appear");
    }

    #[test]
    fn test_plan_starts_at_start_and_ends_at_target() {
        // Arrange
        let planner = TrajectoryPlanner::default();
        let start = Point::new(412, 77);
        let target = Point::new(1533, 990);

        for seed in 0..50 {
            // Act
            let trajectory = planner.plan(start, target, &mut rng(seed));

            // Assert
            assert_eq!(trajectory.first(), Some(start));
            assert_eq!(trajectory.last(), Some(target));
        }
    }

    #[test]
    fn test_plan_point_count_is_steps_plus_one() {
        let planner = TrajectoryPlanner::default();
        let trajectory = planner.plan_with_complexity(
            Point::new(0, 0),
            Point::new(1000, 800),
            5,
            &mut rng(3),
        );
        assert_eq!(trajectory.steps(), 250);
        assert_eq!(trajectory.points().len(), 251);
        assert_eq!(trajectory.complexity(), 5);
    }

    #[test]
    fn test_control_points_are_within_max_offset_of_endpoints() {
        let planner = TrajectoryPlanner::default();
        let start = Point::new(500, 500);
        let target = Point::new(900, 100);
        for seed in 0..200 {
            let curve = *planner.plan(start, target, &mut rng(seed)).curve();
            assert!((curve.p1.x - start.x).abs() <= 100);
            assert!((curve.p1.y - start.y).abs() <= 100);
            assert!((curve.p2.x - target.x).abs() <= 100);
            assert!((curve.p2.y - target.y).abs() <= 100);
        }
    }

    #[test]
    fn test_zero_offset_gives_control_points_on_endpoints() {
        let planner = TrajectoryPlanner::new(PlannerConfig {
            max_control_offset: 0,
            ..PlannerConfig::default()
        });
        let curve = *planner
            .plan(Point::new(1, 2), Point::new(3, 4), &mut rng(0))
            .curve();
        assert_eq!(curve.p1, Point::new(1, 2));
        assert_eq!(curve.p2, Point::new(3, 4));
    }

    #[test]
    fn test_same_start_and_target_still_ends_on_target() {
        let planner = TrajectoryPlanner::default();
        let p = Point::new(640, 360);
        let trajectory = planner.plan(p, p, &mut rng(8));
        assert_eq!(trajectory.first(), Some(p));
        assert_eq!(trajectory.last(), Some(p));
    }

    #[test]
    fn test_out_of_range_target_is_interpolated_toward() {
        let planner = TrajectoryPlanner::default();
        let target = Point::new(-5_000, 9_000);
        let trajectory = planner.plan(Point::new(10, 10), target, &mut rng(4));
        assert_eq!(trajectory.last(), Some(target));
    }

    #[test]
    fn test_sample_with_zero_steps_is_single_point() {
        let curve = CubicBezier::new(
            Point::new(5, 5),
            Point::new(6, 6),
            Point::new(7, 7),
            Point::new(8, 8),
        );
        let trajectory = sample(curve, 0, 0);
        assert_eq!(trajectory.points(), &[Point::new(5, 5)]);
    }

    #[test]
    fn test_eased_sampling_clusters_points_near_endpoints() {
        // Straight line from 0 to 1000: eased sampling moves less in the
        // first tenth of the steps than linear sampling would.
        let line = CubicBezier::new(
            Point::new(0, 0),
            Point::new(333, 0),
            Point::new(667, 0),
            Point::new(1000, 0),
        );
        let trajectory = sample(line, 100, 2);
        assert!(trajectory.points()[10].x < 100);
        assert!(trajectory.points()[50].x >= 499 && trajectory.points()[50].x <= 501);
    }

    #[test]
    fn test_map_points_passes_step_index() {
        let planner = TrajectoryPlanner::default();
        let trajectory = planner
            .plan_with_complexity(Point::new(0, 0), Point::new(10, 10), 1, &mut rng(0))
            .map_points(|step, _| Point::new(step as i32, 0));
        assert_eq!(trajectory.points()[0], Point::new(0, 0));
        assert_eq!(trajectory.points()[50], Point::new(50, 0));
    }
}
