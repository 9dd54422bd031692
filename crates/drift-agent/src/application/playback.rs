//! Plays a planned motion through an injector.
//!
//! Playback is strictly sequential: waypoint `i + 1` is never injected before
//! waypoint `i`'s injection call has returned and its delay has elapsed.
//! Shutdown is checked between waypoints only, so a motion that is stopped
//! early still has the exact timing and shape up to the point it stopped.

use drift_core::{InputAction, PlannedMotion};
use tracing::trace;

use super::{inject_input::InjectionError, inject_input::InputInjector, shutdown::ShutdownSignal};

/// What happened during one playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackReport {
    /// Waypoints successfully injected.
    pub injected: usize,
    /// `true` if shutdown stopped playback before the last waypoint.
    pub cancelled: bool,
}

/// Injects every waypoint of `motion` in order, sleeping after each one.
///
/// # Errors
///
/// Stops at the first failed injection and returns its [`InjectionError`];
/// the remaining waypoints are dropped.
pub async fn play_motion(
    injector: &dyn InputInjector,
    motion: &PlannedMotion,
    shutdown: &ShutdownSignal,
) -> Result<PlaybackReport, InjectionError> {
    let mut report = PlaybackReport::default();

    for (step, waypoint) in motion.waypoints.iter().enumerate() {
        if shutdown.is_triggered() {
            report.cancelled = true;
            break;
        }

        injector.inject(&InputAction::MoveTo(waypoint.point))?;
        report.injected += 1;
        trace!(step, x = waypoint.point.x, y = waypoint.point.y, "waypoint injected");

        tokio::time::sleep(waypoint.delay).await;
    }

    Ok(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
