//! Per-step delays that give playback a non-constant real-time rhythm.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Range of milliseconds to pause after each injected point
/// (`min` inclusive, `max` exclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    pub min_step_delay_ms: u64,
    pub max_step_delay_ms: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            min_step_delay_ms: 10,
            max_step_delay_ms: 20,
        }
    }
}

impl CadenceConfig {
    /// Draws one step delay.  An empty range degrades to the minimum.
    pub fn draw_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let ms = if self.min_step_delay_ms < self.max_step_delay_ms {
            rng.gen_range(self.min_step_delay_ms..self.max_step_delay_ms)
        } else {
            self.min_step_delay_ms
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_draw_delay_in_default_range() {
        let cfg = CadenceConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..500 {
            let ms = cfg.draw_delay(&mut rng).as_millis();
            assert!((10..20).contains(&ms), "delay {ms}ms out of range");
        }
    }

    #[test]
    fn test_zero_range_gives_zero_delay() {
        let cfg = CadenceConfig {
            min_step_delay_ms: 0,
            max_step_delay_ms: 0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(cfg.draw_delay(&mut rng), Duration::ZERO);
    }
}
