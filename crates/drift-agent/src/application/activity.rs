//! ActivityService: the scheduler that drives the whole agent.
//!
//! # The activity loop (for beginners)
//!
//! ```text
//! draw interval ──► wait ──► move cursor ──► tap keys ──► draw interval ──► …
//!                    │
//!                    └── Ctrl-C: stop
//! ```
//!
//! Exactly one action runs at a time.  The service owns the random number
//! generator and the schedule state, so nothing here is global and a seeded
//! generator reproduces an entire run.
//!
//! Failures at the OS boundary are never fatal: a failed cursor query skips
//! the move, a failed injection ends the current motion, and the loop carries
//! on with the key taps and the next scheduled action.

use drift_core::{
    ActivityKey, InputAction, MotionEngine, ScheduleConfig, ScheduleState, ScreenBounds,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{
    inject_input::InputInjector,
    playback::play_motion,
    query_desktop::DesktopProbe,
    shutdown::ShutdownSignal,
};

/// What one scheduled action consists of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityRoutine {
    /// Move the cursor to a random on-screen point.
    pub move_cursor: bool,
    /// Keys tapped, in order, after the move.
    pub keys: Vec<ActivityKey>,
}

impl Default for ActivityRoutine {
    fn default() -> Self {
        Self {
            move_cursor: true,
            keys: vec![ActivityKey::Escape, ActivityKey::NumLock],
        }
    }
}

/// Outcome of one scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionReport {
    /// Waypoints injected by the cursor move.
    pub points_injected: usize,
    /// Keys successfully tapped.
    pub keys_tapped: usize,
    /// Boundary failures that were logged and skipped.
    pub failures: usize,
    /// Shutdown interrupted the move.
    pub cancelled: bool,
}

/// The scheduler use case.
pub struct ActivityService<R> {
    injector: Box<dyn InputInjector>,
    desktop: Box<dyn DesktopProbe>,
    bounds: ScreenBounds,
    engine: MotionEngine,
    routine: ActivityRoutine,
    schedule: ScheduleConfig,
    rng: R,
}

impl<R: Rng> ActivityService<R> {
    /// Creates the service.  `bounds` is the screen size read once at startup.
    pub fn new(
        injector: Box<dyn InputInjector>,
        desktop: Box<dyn DesktopProbe>,
        bounds: ScreenBounds,
        engine: MotionEngine,
        routine: ActivityRoutine,
        schedule: ScheduleConfig,
        rng: R,
    ) -> Self {
        Self {
            injector,
            desktop,
            bounds,
            engine,
            routine,
            schedule,
            rng,
        }
    }

    /// Runs the schedule until shutdown, or until `max_actions` actions ran.
    ///
    /// Returns the number of actions performed.
    pub async fn run(&mut self, shutdown: &ShutdownSignal, max_actions: Option<u64>) -> u64 {
        let mut state = ScheduleState::new(&self.schedule, &mut self.rng);
        let mut performed = 0u64;

        loop {
            if max_actions.is_some_and(|max| performed >= max) || shutdown.is_triggered() {
                break;
            }

            info!("next action in {} s", state.next_interval().as_secs());

            tokio::select! {
                _ = tokio::time::sleep(state.next_interval()) => {}
                _ = shutdown.triggered() => break,
            }

            let report = self.perform_action(shutdown).await;
            performed += 1;
            debug!(
                points = report.points_injected,
                keys = report.keys_tapped,
                failures = report.failures,
                "action {performed} finished"
            );
            if report.cancelled {
                break;
            }

            state.redraw(&self.schedule, &mut self.rng);
        }

        performed
    }

    /// Performs one action: cursor move (if enabled) followed by key taps.
    pub async fn perform_action(&mut self, shutdown: &ShutdownSignal) -> ActionReport {
        let mut report = ActionReport::default();

        if self.routine.move_cursor {
            self.move_cursor(shutdown, &mut report).await;
            if report.cancelled {
                return report;
            }
        }

        for key in &self.routine.keys {
            match self.injector.inject(&InputAction::KeyTap(*key)) {
                Ok(()) => report.keys_tapped += 1,
                Err(e) => {
                    warn!("key tap {key} failed: {e}");
                    report.failures += 1;
                }
            }
        }

        report
    }

    async fn move_cursor(&mut self, shutdown: &ShutdownSignal, report: &mut ActionReport) {
        let start = match self.desktop.cursor_position() {
            Ok(p) => p,
            Err(e) => {
                warn!("skipping cursor move: {e}");
                report.failures += 1;
                return;
            }
        };
        let target = self.bounds.random_point(&mut self.rng);
        let motion = self.engine.generate(start, target, &mut self.rng);
        debug!(
            from = ?start,
            to = ?target,
            steps = motion.steps(),
            complexity = motion.complexity,
            "planned cursor motion"
        );

        match play_motion(self.injector.as_ref(), &motion, shutdown).await {
            Ok(playback) => {
                report.points_injected = playback.injected;
                report.cancelled = playback.cancelled;
            }
            Err(e) => {
                warn!("cursor motion aborted: {e}");
                report.failures += 1;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
