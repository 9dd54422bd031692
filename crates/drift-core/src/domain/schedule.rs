//! Interval between scheduled activity actions.
//!
//! Every interval is an independent uniform draw; nothing about previous
//! intervals influences the next one.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Range of whole seconds to wait between actions (`min` inclusive, `max` exclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub min_interval_secs: u64,
    pub max_interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: 10,
            max_interval_secs: 30,
        }
    }
}

impl ScheduleConfig {
    /// Draws a fresh interval.
    ///
    /// An empty range degrades to `min_interval_secs`.
    pub fn draw_interval<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let secs = if self.min_interval_secs < self.max_interval_secs {
            rng.gen_range(self.min_interval_secs..self.max_interval_secs)
        } else {
            self.min_interval_secs
        };
        Duration::from_secs(secs)
    }
}

/// The interval until the next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleState {
    next_interval: Duration,
}

impl ScheduleState {
    /// Creates the state with its first interval already drawn.
    pub fn new<R: Rng + ?Sized>(config: &ScheduleConfig, rng: &mut R) -> Self {
        Self {
            next_interval: config.draw_interval(rng),
        }
    }

    pub fn next_interval(&self) -> Duration {
        self.next_interval
    }

    /// Replaces the interval with a fresh draw and returns it.
    pub fn redraw<R: Rng + ?Sized>(&mut self, config: &ScheduleConfig, rng: &mut R) -> Duration {
        self.next_interval = config.draw_interval(rng);
        self.next_interval
    }
}
