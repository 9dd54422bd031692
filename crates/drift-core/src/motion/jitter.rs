//! Jitter post-processor: small oscillating noise shaped by an envelope.
//!
//! For each step a signed integer magnitude is drawn afresh.  The magnitude
//! drives a circular wobble (`sin` on X, `cos` on Y, so the axes are 90° out
//! of phase) whose angle advances with the step index.  The wobble is then
//! scaled by an envelope `peak × sin(π × step / total)`, which is zero at both
//! ends of the trajectory and largest in the middle.
//!
//! Consequences:
//!
//! - The first and last points are never moved, so endpoint exactness
//!   survives jitter.
//! - Per-axis displacement never exceeds `max|magnitude| × peak_intensity`
//!   (3 pixels with the defaults).

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::geometry::Point;

use super::planner::Trajectory;

/// Tunables for the jitter post-processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterConfig {
    /// Smallest magnitude that can be drawn (inclusive).
    pub min_magnitude: i32,
    /// Upper magnitude bound (exclusive).
    pub max_magnitude: i32,
    /// Radians the wobble advances per step.
    pub angular_frequency: f64,
    /// Envelope value at the midpoint of the trajectory.
    pub peak_intensity: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            min_magnitude: -2,
            max_magnitude: 3,
            angular_frequency: 0.3,
            peak_intensity: 1.5,
        }
    }
}

impl JitterConfig {
    /// Envelope value for `step` out of `total_steps`.
    ///
    /// Returns `0.0` when `total_steps` is zero.
    pub fn envelope(&self, step: u32, total_steps: u32) -> f64 {
        if total_steps == 0 {
            return 0.0;
        }
        let progress = step as f64 / total_steps as f64;
        self.peak_intensity * (progress * PI).sin()
    }

    /// Largest absolute magnitude the configured range can produce.
    pub fn max_abs_magnitude(&self) -> i32 {
        if self.min_magnitude >= self.max_magnitude {
            return self.min_magnitude.abs();
        }
        self.min_magnitude.abs().max((self.max_magnitude - 1).abs())
    }

    /// Upper bound on per-axis displacement, in whole pixels.
    pub fn max_displacement(&self) -> i32 {
        (self.max_abs_magnitude() as f64 * self.peak_intensity.abs()) as i32
    }

    /// Draws a magnitude from the configured half-open range.
    pub fn draw_magnitude<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.min_magnitude < self.max_magnitude {
            rng.gen_range(self.min_magnitude..self.max_magnitude)
        } else {
            self.min_magnitude
        }
    }

    /// Displaces `point` using an already drawn `magnitude`.
    ///
    /// Every intermediate value is truncated toward zero.
    pub fn displace(&self, point: Point, step: u32, total_steps: u32, magnitude: i32) -> Point {
        let angle = step as f64 * self.angular_frequency;
        let noise_x = (magnitude as f64 * angle.sin()) as i32;
        let noise_y = (magnitude as f64 * angle.cos()) as i32;

        let intensity = self.envelope(step, total_steps);

        point.offset(
            (noise_x as f64 * intensity) as i32,
            (noise_y as f64 * intensity) as i32,
        )
    }

    /// Draws a magnitude and displaces `point` with it.
    pub fn jitter<R: Rng + ?Sized>(
        &self,
        point: Point,
        step: u32,
        total_steps: u32,
        rng: &mut R,
    ) -> Point {
        let magnitude = self.draw_magnitude(rng);
        self.displace(point, step, total_steps, magnitude)
    }

    /// Applies [`jitter`](Self::jitter) to every point of `trajectory` in order.
    pub fn apply<R: Rng + ?Sized>(&self, trajectory: Trajectory, rng: &mut R) -> Trajectory {
        let total = trajectory.steps();
        trajectory.map_points(|step, point| self.jitter(point, step, total, rng))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_envelope_is_zero_at_both_ends() {
        let cfg = JitterConfig::default();
        assert_eq!(cfg.envelope(0, 250), 0.0);
        assert!(cfg.envelope(250, 250).abs() < 1e-12);
    }

    #[test]
    fn test_envelope_peaks_at_midpoint() {
        // Arrange
        let cfg = JitterConfig::default();
        let total = 250;

        // Act
        let (peak_step, peak) = (0..=total)
            .map(|s| (s, cfg.envelope(s, total)))
            .fold((0, f64::MIN), |best, cur| if cur.1 > best.1 { cur } else { best });

        // Assert
        assert_eq!(peak_step, 125);
        assert!((peak - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_envelope_with_zero_total_is_zero() {
        assert_eq!(JitterConfig::default().envelope(0, 0), 0.0);
    }

    #[test]
    fn test_displace_leaves_endpoints_untouched_for_every_magnitude() {
        let cfg = JitterConfig::default();
        let p = Point::new(1000, 800);
        for magnitude in -2..3 {
            assert_eq!(cfg.displace(p, 0, 250, magnitude), p);
            assert_eq!(cfg.displace(p, 250, 250, magnitude), p);
        }
    }

    #[test]
    fn test_displace_with_zero_magnitude_is_identity() {
        let cfg = JitterConfig::default();
        let p = Point::new(10, 10);
        for step in 0..=100 {
            assert_eq!(cfg.displace(p, step, 100, 0), p);
        }
    }

    #[test]
    fn test_displace_known_value_at_midpoint() {
        // step 125 of 250: angle 37.5 rad, sin ≈ -0.198, cos ≈ 0.980.
        // magnitude 2: noise = (trunc(-0.40), trunc(1.96)) = (0, 1).
        // intensity 1.5: offset = (0, trunc(1.5)) = (0, 1).
        let cfg = JitterConfig::default();
        assert_eq!(
            cfg.displace(Point::new(500, 400), 125, 250, 2),
            Point::new(500, 401)
        );
    }

    #[test]
    fn test_displacement_is_bounded_by_magnitude_times_peak() {
        // Arrange
        let cfg = JitterConfig::default();
        let bound = cfg.max_displacement();
        let origin = Point::new(0, 0);

        // Act / Assert: exhaustive over steps and every possible magnitude.
        for total in [150u32, 250, 350] {
            for step in 0..=total {
                for magnitude in -2..3 {
                    let p = cfg.displace(origin, step, total, magnitude);
                    assert!(p.x.abs() <= bound, "x offset {} > {bound}", p.x);
                    assert!(p.y.abs() <= bound, "y offset {} > {bound}", p.y);
                }
            }
        }
    }

    #[test]
    fn test_default_max_displacement_is_three() {
        assert_eq!(JitterConfig::default().max_abs_magnitude(), 2);
        assert_eq!(JitterConfig::default().max_displacement(), 3);
    }

    #[test]
    fn test_draw_magnitude_covers_minus_two_to_two() {
        let cfg = JitterConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            let m = cfg.draw_magnitude(&mut rng);
            assert!((-2..3).contains(&m));
            seen.insert(m);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_apply_preserves_trajectory_endpoints() {
        // Arrange
        let planner = crate::motion::planner::TrajectoryPlanner::default();
        let cfg = JitterConfig::default();
        let start = Point::new(0, 0);
        let target = Point::new(1000, 800);

        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let trajectory = planner.plan(start, target, &mut rng);

            // Act
            let jittered = cfg.apply(trajectory, &mut rng);

            // Assert
            assert_eq!(jittered.first(), Some(start));
            assert_eq!(jittered.last(), Some(target));
        }
    }

    #[test]
    fn test_apply_keeps_every_point_near_the_curve() {
        let planner = crate::motion::planner::TrajectoryPlanner::default();
        let cfg = JitterConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let clean = planner.plan(Point::new(100, 100), Point::new(700, 300), &mut rng);

        let jittered = cfg.apply(clean.clone(), &mut rng);

        for (a, b) in clean.points().iter().zip(jittered.points()) {
            assert!((a.x - b.x).abs() <= 3 && (a.y - b.y).abs() <= 3);
        }
    }
}
