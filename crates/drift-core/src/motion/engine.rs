//! `MotionEngine`: planner → jitter → cadence in one call.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::geometry::Point;

use super::{
    cadence::CadenceConfig,
    jitter::JitterConfig,
    planner::{PlannerConfig, TrajectoryPlanner},
};

/// All motion tunables, grouped the way they appear in the config file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub jitter: JitterConfig,
    #[serde(default)]
    pub cadence: CadenceConfig,
}

/// A point to inject together with the pause that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waypoint {
    pub point: Point,
    pub delay: Duration,
}

/// A fully materialized motion, ready for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMotion {
    pub waypoints: Vec<Waypoint>,
    pub complexity: u32,
}

impl PlannedMotion {
    /// Number of steps; one less than the number of waypoints.
    pub fn steps(&self) -> u32 {
        self.waypoints.len().saturating_sub(1) as u32
    }

    /// Sum of all step delays.
    pub fn total_duration(&self) -> Duration {
        self.waypoints.iter().map(|w| w.delay).sum()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.waypoints.first().map(|w| w.point)
    }

    pub fn last_point(&self) -> Option<Point> {
        self.waypoints.last().map(|w| w.point)
    }
}

/// Produces human-looking motions between two points.
#[derive(Debug, Clone, Default)]
pub struct MotionEngine {
    planner: TrajectoryPlanner,
    jitter: JitterConfig,
    cadence: CadenceConfig,
}

impl MotionEngine {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            planner: TrajectoryPlanner::new(config.planner),
            jitter: config.jitter,
            cadence: config.cadence,
        }
    }

    pub fn planner(&self) -> &TrajectoryPlanner {
        &self.planner
    }

    pub fn jitter(&self) -> &JitterConfig {
        &self.jitter
    }

    /// Plans, jitters and paces a motion from `start` to `target`.
    ///
    /// All jitter magnitudes are drawn first, then one delay per point.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        start: Point,
        target: Point,
        rng: &mut R,
    ) -> PlannedMotion {
        let trajectory = self.planner.plan(start, target, rng);
        let complexity = trajectory.complexity();

        let waypoints = self
            .jitter
            .apply(trajectory, rng)
            .into_points()
            .into_iter()
            .map(|point| Waypoint {
                point,
                delay: self.cadence.draw_delay(rng),
            })
            .collect();

        PlannedMotion {
            waypoints,
            complexity,
        }
    }
}
